//! Domain vocabulary shared by the sign-up sheet crates.
//!
//! - `domain`: grid dimensions, labels, validated names, cells and selection records
//! - `error`: the error taxonomy surfaced by the store and controller
//! - `protocol`: serializable commands, events and views exchanged with a front end

pub mod domain;
pub mod error;
pub mod protocol;
