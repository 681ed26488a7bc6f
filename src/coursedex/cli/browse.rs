//! Line commands for `coursedex browse`.
//!
//! Each stdin line becomes at most one [`CriteriaEvent`]:
//!
//! ```text
//! search <text>     set the search text (`search` alone clears it)
//! /<text>           shorthand for search
//! dept <name|any>   select a department
//! level <n|any>     select a level bucket
//! help              list commands
//! quit              leave (also `q`, `exit`, or end of input)
//! ```

use coursedex::error::{CatalogError, Result};
use coursedex::session::CriteriaEvent;

pub const HELP: &str = "\
Commands:
  search <text>     set the search text (`search` alone clears it)
  /<text>           shorthand for search
  dept <name|any>   select a department
  level <n|any>     select a level bucket, e.g. `level 200`
  help              show this list
  quit              leave";

#[derive(Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    Filter(CriteriaEvent),
    Help,
    Quit,
    Nothing,
}

pub fn parse_command(line: &str) -> Result<BrowseCommand> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Ok(BrowseCommand::Nothing);
    }

    if let Some(text) = line.strip_prefix('/') {
        return Ok(BrowseCommand::Filter(CriteriaEvent::SearchChanged(
            text.to_string(),
        )));
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match word {
        "search" | "s" => Ok(BrowseCommand::Filter(CriteriaEvent::SearchChanged(
            rest.to_string(),
        ))),
        "dept" | "department" | "d" => Ok(BrowseCommand::Filter(
            CriteriaEvent::DepartmentChanged(rest.trim().parse()?),
        )),
        "level" | "l" => Ok(BrowseCommand::Filter(CriteriaEvent::LevelChanged(
            rest.trim().parse()?,
        ))),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(CatalogError::Input(format!(
            "Unknown command: {} (type `help`)",
            other
        ))),
    }
}
