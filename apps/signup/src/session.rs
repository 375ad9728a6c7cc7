//! Interactive loop: one request per input line, one reply per request.

use std::io::{BufRead, Write};

use anyhow::Context;
use grid_store::SignupBoard;
use serde::Serialize;
use sheet_core::SelectionController;
use shared::{
    error::{ErrorCode, ErrorView, SheetError},
    protocol::{GridSnapshot, SelectionRow, SheetEvent, SheetQuery},
};
use tracing::{debug, error, warn};

use crate::{
    commands::{parse_json_line, parse_line, Request, HELP},
    config::OutputFormat,
    render::{render_event, render_grid},
};

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Reply {
    Event(SheetEvent),
    Grids(Vec<GridSnapshot>),
    Selections(Vec<SelectionRow>),
    Error(ErrorView),
}

pub struct Session {
    board: SignupBoard,
    controller: SelectionController,
    output: OutputFormat,
}

impl Session {
    pub fn new(board: SignupBoard, output: OutputFormat) -> Self {
        Self {
            board,
            controller: SelectionController::new(),
            output,
        }
    }

    /// Reads requests until EOF or `quit`. Sheet errors are reported and the loop continues;
    /// I/O failures end it.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        if self.output == OutputFormat::Table {
            writeln!(output, "{HELP}")?;
        }

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let parsed = match self.output {
                OutputFormat::Table => parse_line(&line),
                OutputFormat::Json => parse_json_line(&line),
            };

            let request = match parsed {
                Ok(Some(request)) => request,
                Ok(None) => continue,
                Err(err) => {
                    debug!(%line, error = %err, "unparseable input");
                    let reply =
                        Reply::Error(ErrorView::new(ErrorCode::Validation, format!("{err:#}")));
                    self.write_reply(&mut output, &reply)?;
                    continue;
                }
            };

            match request {
                Request::Quit => break,
                Request::Help => writeln!(output, "{HELP}")?,
                Request::Command(command) => {
                    let reply = match self.controller.apply(&mut self.board, command) {
                        Ok(event) => Reply::Event(event),
                        Err(err) => self.error_reply(&err),
                    };
                    self.write_reply(&mut output, &reply)?;
                }
                Request::Query(query) => {
                    let reply = self.answer(query);
                    self.write_reply(&mut output, &reply)?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }

    pub fn answer(&self, query: SheetQuery) -> Reply {
        match query {
            SheetQuery::ShowGrid { grid: Some(label) } => match self.board.grid(&label) {
                Ok(grid) => Reply::Grids(vec![grid.snapshot()]),
                Err(err) => self.error_reply(&err),
            },
            SheetQuery::ShowGrid { grid: None } => Reply::Grids(
                self.board
                    .grids()
                    .iter()
                    .map(|grid| grid.snapshot())
                    .collect(),
            ),
            SheetQuery::ListSelections => Reply::Selections(reporting::to_rows(
                &reporting::list_all(self.board.grids()),
            )),
        }
    }

    fn error_reply(&self, err: &SheetError) -> Reply {
        if err.code().is_recoverable() {
            warn!(error = %err, "request rejected");
        } else {
            error!(error = %err, "request out of range");
        }
        Reply::Error(ErrorView::from(err))
    }

    fn write_reply(&self, output: &mut impl Write, reply: &Reply) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, reply)?;
                writeln!(output)?;
            }
            OutputFormat::Table => writeln!(output, "{}", self.render_text(reply))?,
        }
        Ok(())
    }

    fn render_text(&self, reply: &Reply) -> String {
        match reply {
            Reply::Event(event) => render_event(event),
            Reply::Grids(snapshots) => snapshots
                .iter()
                .filter_map(|snapshot| self.board.grid(snapshot.label.as_str()).ok())
                .map(|grid| render_grid(grid, self.controller.pending()))
                .collect::<Vec<_>>()
                .join("\n\n"),
            Reply::Selections(rows) => reporting::render_rows(rows),
            Reply::Error(view) => format!("error: {}", view.message),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
