use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::debug;

use crate::error::TravelError;

/// Whitespace-split tokens of one input line.
pub type CommandLine = Vec<String>;

/// Splits each line into whitespace-delimited tokens, preserving line order.
///
/// Blank lines become empty token arrays so that the index of a command is
/// always its line number minus one.
pub fn read_commands(reader: impl BufRead) -> Result<Vec<CommandLine>, TravelError> {
    reader
        .lines()
        .map(|line| {
            line.map(|line| line.split_whitespace().map(str::to_string).collect::<CommandLine>())
                .map_err(|error| TravelError::Io(format!("Error reading input: {error}")))
        })
        .collect()
}

pub fn read_command_file(path: impl AsRef<Path>) -> Result<Vec<CommandLine>, TravelError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => TravelError::Io(format!(
            "Input file is not found at location: {}",
            path.display()
        )),
        _ => TravelError::Io(format!(
            "Error reading from file {}: {error}",
            path.display()
        )),
    })?;
    let commands = read_commands(BufReader::new(file))?;
    debug!("read {} commands from {}", commands.len(), path.display());
    Ok(commands)
}
