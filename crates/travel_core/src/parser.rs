//! Command interpretation against a [`Registry`].
//!
//! Commands are whitespace-split token arrays whose first token names the
//! command. Two commands are understood:
//!
//! - `DRIVER <name tokens...>` registers a driver.
//! - `TRIP <name tokens...> <HH:MM> <HH:MM> <distance>` records a trip for a
//!   previously registered driver.
//!
//! Name tokens of a TRIP run until the first token containing `:`, so a name
//! containing a colon cannot be referenced by a TRIP.

use chrono::NaiveTime;
use log::debug;

use crate::acceptability::AcceptabilityRanges;
use crate::error::TravelError;
use crate::registry::Registry;
use crate::trip::Trip;

const TIME_FORMAT: &str = "%H:%M";
const TIME_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandType {
    Driver,
    Trip,
}

impl CommandType {
    fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("driver") {
            Some(CommandType::Driver)
        } else if word.eq_ignore_ascii_case("trip") {
            Some(CommandType::Trip)
        } else {
            None
        }
    }
}

/// What applying a single command did to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    DriverRegistered { name: String, replaced: bool },
    TripAccepted { driver: String },
    /// The trip was valid but fell outside the acceptability ranges.
    TripRejected { driver: String },
    /// Empty line or unrecognized command word.
    Ignored,
}

/// Applies each command in order, stopping at the first failure.
pub fn parse_commands<S: AsRef<str>>(
    lines: &[Vec<S>],
    registry: &mut Registry,
    ranges: &AcceptabilityRanges,
) -> Result<Vec<CommandOutcome>, TravelError> {
    lines
        .iter()
        .map(|tokens| parse_command(tokens.as_slice(), registry, ranges))
        .collect()
}

pub fn parse_command<S: AsRef<str>>(
    tokens: &[S],
    registry: &mut Registry,
    ranges: &AcceptabilityRanges,
) -> Result<CommandOutcome, TravelError> {
    let Some(word) = tokens.first() else {
        return Ok(CommandOutcome::Ignored);
    };

    match CommandType::parse(word.as_ref()) {
        Some(CommandType::Driver) => parse_driver(tokens, registry),
        Some(CommandType::Trip) => parse_trip(tokens, registry, ranges),
        None => {
            debug!("ignoring unrecognized command '{}'", word.as_ref());
            Ok(CommandOutcome::Ignored)
        }
    }
}

fn parse_driver<S: AsRef<str>>(
    tokens: &[S],
    registry: &mut Registry,
) -> Result<CommandOutcome, TravelError> {
    if tokens.len() < 2 {
        return Err(TravelError::MissingParameter {
            command: "DRIVER".to_string(),
            expected: 2,
            found: tokens.len(),
        });
    }

    let mut parts = Vec::with_capacity(tokens.len() - 1);
    for token in &tokens[1..] {
        let token = token.as_ref();
        if !is_name_token(token) {
            return Err(TravelError::InvalidName(token.to_string()));
        }
        parts.push(token);
    }

    let name = parts.join(" ");
    let replaced = registry.register(name.clone());
    debug!("registered driver '{name}' (replaced: {replaced})");
    Ok(CommandOutcome::DriverRegistered { name, replaced })
}

fn parse_trip<S: AsRef<str>>(
    tokens: &[S],
    registry: &mut Registry,
    ranges: &AcceptabilityRanges,
) -> Result<CommandOutcome, TravelError> {
    let time_index = tokens[1..]
        .iter()
        .position(|token| token.as_ref().contains(TIME_SEPARATOR))
        .map_or(tokens.len(), |offset| offset + 1);

    let expected = time_index + 3;
    if tokens.len() < expected {
        return Err(TravelError::MissingParameter {
            command: "TRIP".to_string(),
            expected,
            found: tokens.len(),
        });
    }

    let name = tokens[1..time_index]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let start = parse_time(tokens[time_index].as_ref())?;
    let end = parse_time(tokens[time_index + 1].as_ref())?;
    let distance = parse_distance(tokens[time_index + 2].as_ref())?;

    let trip = Trip::new(start, end, distance)?;
    let driver = registry
        .get_mut(&name)
        .ok_or_else(|| TravelError::UnknownDriver(name.clone()))?;

    if driver.add_trip(trip, ranges) {
        debug!("accepted trip for '{name}' ({start} to {end}, {distance})");
        Ok(CommandOutcome::TripAccepted { driver: name })
    } else {
        debug!("trip for '{name}' ({start} to {end}, {distance}) is outside acceptability ranges");
        Ok(CommandOutcome::TripRejected { driver: name })
    }
}

fn is_name_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}

/// Parses a strict 24-hour `HH:MM` time of day.
pub fn parse_time(token: &str) -> Result<NaiveTime, TravelError> {
    let bytes = token.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return Err(TravelError::MalformedTime(token.to_string()));
    }
    NaiveTime::parse_from_str(token, TIME_FORMAT)
        .map_err(|_| TravelError::MalformedTime(token.to_string()))
}

fn parse_distance(token: &str) -> Result<f64, TravelError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|distance| distance.is_finite())
        .ok_or_else(|| TravelError::MalformedDistance(token.to_string()))
}
