use std::fmt;

/// Errors raised while converting units, building trips or applying commands.
#[derive(Debug, Clone, PartialEq)]
pub enum TravelError {
    /// A conversion was requested for a unit with no table entry.
    UnsupportedUnit(String),
    /// A DRIVER name token contains characters other than letters or whitespace.
    InvalidName(String),
    /// A trip time token is not `HH:MM`.
    MalformedTime(String),
    /// A trip distance token is not a finite number.
    MalformedDistance(String),
    /// A command has fewer tokens than it requires.
    MissingParameter { command: String, expected: usize, found: usize },
    /// Trip inputs that cannot describe a real trip. Holds every violated rule.
    PhysicalImpossibility(Vec<String>),
    /// A TRIP references a driver that was never declared.
    UnknownDriver(String),
    /// Reading command input failed.
    Io(String),
    /// Acceptability configuration could not be loaded.
    Config(String),
}

impl TravelError {
    /// Short stable identifier, used in logs and skipped-command summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            TravelError::UnsupportedUnit(_) => "unsupported_unit",
            TravelError::InvalidName(_) => "invalid_name",
            TravelError::MalformedTime(_) => "malformed_time",
            TravelError::MalformedDistance(_) => "malformed_distance",
            TravelError::MissingParameter { .. } => "missing_parameter",
            TravelError::PhysicalImpossibility(_) => "physical_impossibility",
            TravelError::UnknownDriver(_) => "unknown_driver",
            TravelError::Io(_) => "io",
            TravelError::Config(_) => "config",
        }
    }
}

impl fmt::Display for TravelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelError::UnsupportedUnit(unit) => {
                write!(f, "Conversion value for unit {unit} does not exist")
            }
            TravelError::InvalidName(token) => {
                write!(f, "Unexpected characters in name: {token}")
            }
            TravelError::MalformedTime(token) => {
                write!(f, "Time '{token}' is not in HH:MM format")
            }
            TravelError::MalformedDistance(token) => {
                write!(f, "Distance '{token}' is not a number")
            }
            TravelError::MissingParameter {
                command,
                expected,
                found,
            } => write!(
                f,
                "{command} command requires at least {expected} tokens, found {found}"
            ),
            TravelError::PhysicalImpossibility(violations) => {
                write!(f, "Invalid input: {}", violations.join("; "))
            }
            TravelError::UnknownDriver(name) => {
                write!(f, "No driver named '{name}' has been declared")
            }
            TravelError::Io(message) => write!(f, "{message}"),
            TravelError::Config(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for TravelError {}
