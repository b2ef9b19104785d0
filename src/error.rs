use std::{error::Error, fmt::Display, io};

/// Errors surfaced to the binary
///
/// The simulation itself cannot fail; these all come from the terminal,
/// the filesystem or the settings file.
#[derive(Debug)]
pub enum PongError {
    Io(io::Error),
    Settings(serde_json::Error),
    InvalidSettings(String),
    TerminalTooSmall {
        needed: (u16, u16),
        actual: (u16, u16),
    },
}

impl Display for PongError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PongError::Io(err) => Display::fmt(err, f),
            PongError::Settings(err) => write!(f, "malformed settings: {err}"),
            PongError::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
            PongError::TerminalTooSmall { needed, actual } => write!(
                f,
                "terminal is {}x{} but the board needs at least {}x{}",
                actual.0, actual.1, needed.0, needed.1
            ),
        }
    }
}

impl Error for PongError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PongError::Io(source) => Some(source),
            PongError::Settings(source) => Some(source),
            PongError::InvalidSettings(_) | PongError::TerminalTooSmall { .. } => None,
        }
    }
}

impl From<io::Error> for PongError {
    fn from(err: io::Error) -> Self {
        PongError::Io(err)
    }
}

impl From<serde_json::Error> for PongError {
    fn from(err: serde_json::Error) -> Self {
        PongError::Settings(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_terminal_too_small() {
        let err = PongError::TerminalTooSmall {
            needed: (82, 35),
            actual: (80, 24),
        };
        assert_eq!(
            err.to_string(),
            "terminal is 80x24 but the board needs at least 82x35"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = PongError::from(io::Error::other("tty gone"));
        assert_eq!(err.to_string(), "tty gone");
        assert!(err.source().is_some());
    }
}
