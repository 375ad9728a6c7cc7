//! Parsing of stdin lines into sheet requests.

use anyhow::{anyhow, bail, Context};
use chrono::Weekday;
use serde::Deserialize;
use shared::protocol::{SheetCommand, SheetQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Command(SheetCommand),
    Query(SheetQuery),
    Help,
    Quit,
}

/// Wire shape of a JSON-lines request: either tagged enum, tried in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRequest {
    Command(SheetCommand),
    Query(SheetQuery),
}

impl From<JsonRequest> for Request {
    fn from(value: JsonRequest) -> Self {
        match value {
            JsonRequest::Command(command) => Request::Command(command),
            JsonRequest::Query(query) => Request::Query(query),
        }
    }
}

pub const HELP: &str = "\
commands:
  select <grid> <week 1-5> <day sun-sat>   open an empty cell for sign-up
  name <text>                              claim the open cell (1-15 characters)
  cancel                                   close the open cell without claiming
  show [grid]                              print grid occupancy
  report                                   list every claimed cell
  help                                     show this message
  quit                                     exit";

/// Parses one line of the text interface. Blank lines yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Request>> {
    let line = line.trim();
    let Some((verb, rest)) = split_verb(line) else {
        return Ok(None);
    };

    let request = match verb.to_ascii_lowercase().as_str() {
        "select" | "s" => parse_select(rest)?,
        "name" | "n" => Request::Command(SheetCommand::SubmitName {
            name: rest.to_string(),
        }),
        "cancel" | "c" => Request::Command(SheetCommand::Cancel),
        "show" => Request::Query(SheetQuery::ShowGrid {
            grid: Some(rest.trim())
                .filter(|grid| !grid.is_empty())
                .map(str::to_string),
        }),
        "report" | "r" => Request::Query(SheetQuery::ListSelections),
        "help" | "?" => Request::Help,
        "quit" | "exit" | "q" => Request::Quit,
        other => bail!("unknown command '{other}', type 'help' for a list"),
    };
    Ok(Some(request))
}

/// Parses one line of the JSON-lines interface.
pub fn parse_json_line(line: &str) -> anyhow::Result<Option<Request>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let request: JsonRequest = serde_json::from_str(line).context("malformed request")?;
    Ok(Some(request.into()))
}

fn split_verb(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    })
}

fn parse_select(rest: &str) -> anyhow::Result<Request> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let [grid, week, day] = parts.as_slice() else {
        bail!("usage: select <grid> <week 1-5> <day sun-sat>");
    };

    let week: usize = week
        .parse()
        .with_context(|| format!("week '{week}' is not a number"))?;
    let row = week
        .checked_sub(1)
        .ok_or_else(|| anyhow!("weeks are numbered from 1"))?;

    let weekday: Weekday = day
        .parse()
        .map_err(|_| anyhow!("'{day}' is not a day of the week"))?;
    let col = weekday.num_days_from_sunday() as usize;

    Ok(Request::Command(SheetCommand::SelectCell {
        grid: grid.to_string(),
        row,
        col,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_uses_one_based_weeks_and_day_names() {
        assert_eq!(
            parse_line("select A 1 sun").expect("parse"),
            Some(Request::Command(SheetCommand::SelectCell {
                grid: "A".into(),
                row: 0,
                col: 0
            }))
        );
        assert_eq!(
            parse_line("  S b 5 Saturday ").expect("parse"),
            Some(Request::Command(SheetCommand::SelectCell {
                grid: "b".into(),
                row: 4,
                col: 6
            }))
        );
    }

    #[test]
    fn week_past_the_grid_is_left_for_the_store_to_reject() {
        assert_eq!(
            parse_line("select A 9 mon").expect("parse"),
            Some(Request::Command(SheetCommand::SelectCell {
                grid: "A".into(),
                row: 8,
                col: 1
            }))
        );
    }

    #[test]
    fn select_rejects_malformed_arguments() {
        assert!(parse_line("select A 0 mon").is_err());
        assert!(parse_line("select A one mon").is_err());
        assert!(parse_line("select A 1 someday").is_err());
        assert!(parse_line("select A 1").is_err());
    }

    #[test]
    fn name_keeps_inner_spaces() {
        assert_eq!(
            parse_line("name Mary Ann").expect("parse"),
            Some(Request::Command(SheetCommand::SubmitName {
                name: "Mary Ann".into()
            }))
        );
        assert_eq!(
            parse_line("name").expect("parse"),
            Some(Request::Command(SheetCommand::SubmitName { name: "".into() }))
        );
    }

    #[test]
    fn queries_and_control_words() {
        assert_eq!(
            parse_line("show").expect("parse"),
            Some(Request::Query(SheetQuery::ShowGrid { grid: None }))
        );
        assert_eq!(
            parse_line("show B").expect("parse"),
            Some(Request::Query(SheetQuery::ShowGrid {
                grid: Some("B".into())
            }))
        );
        assert_eq!(
            parse_line("report").expect("parse"),
            Some(Request::Query(SheetQuery::ListSelections))
        );
        assert_eq!(parse_line("quit").expect("parse"), Some(Request::Quit));
        assert_eq!(parse_line("   ").expect("parse"), None);
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn json_lines_accept_commands_and_queries() {
        assert_eq!(
            parse_json_line(r#"{"type":"submit_name","payload":{"name":"Ivy"}}"#)
                .expect("parse"),
            Some(Request::Command(SheetCommand::SubmitName {
                name: "Ivy".into()
            }))
        );
        assert_eq!(
            parse_json_line(r#"{"type":"list_selections"}"#).expect("parse"),
            Some(Request::Query(SheetQuery::ListSelections))
        );
        assert!(parse_json_line(r#"{"type":"launch"}"#).is_err());
        assert_eq!(parse_json_line("").expect("parse"), None);
    }
}
