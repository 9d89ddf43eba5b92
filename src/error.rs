//! Error types for USWDS-GPUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// A component part was used without the container that owns its state
    /// (an accordion trigger outside an accordion, a handle whose accordion
    /// has been released, ...). This is an integration mistake, not a
    /// recoverable runtime condition.
    #[snafu(display("{component} must be used within {container}"))]
    OutsideContainer {
        component: &'static str,
        container: &'static str,
    },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings and navigation files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_container_names_expected_container() {
        let err = Error::OutsideContainer {
            component: "AccordionTrigger",
            container: "an Accordion",
        };
        assert_eq!(
            err.to_string(),
            "AccordionTrigger must be used within an Accordion"
        );
    }
}
