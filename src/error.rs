use std::io;

/// Errors raised while setting up the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Why a URL could not be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenError {
    #[error("opening links is disabled")]
    Blocked,
}

pub type Result<T> = std::result::Result<T, TermfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = TermfolioError::Config("bad interval".into());
        assert_eq!(format!("{e}"), "config error: bad interval");
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermfolioError = io_err.into();
        assert!(format!("{e}").starts_with("I/O error:"));
    }

    #[test]
    fn open_error_display() {
        assert_eq!(OpenError::Blocked.to_string(), "opening links is disabled");
    }
}
