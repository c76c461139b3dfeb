//! Validation utilities.

use std::fmt::Write;

use revassign_config::{Config, DatabaseDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "REVASSIGN_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "REVASSIGN_SERVER_BIND_PORT");
    }

    // Check PG configuration
    if config.database.driver == DatabaseDriver::Postgres && config.database.pg.url.is_empty() {
        _missing(&mut error, "REVASSIGN_DATABASE_PG_URL");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_configuration() {
        let config = Config::for_tests();
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn lists_every_missing_variable() {
        let mut config = Config::for_tests();
        config.server.bind_ip = String::new();
        config.server.bind_port = 0;
        config.database.driver = DatabaseDriver::Postgres;
        config.database.pg.url = String::new();

        let ValidationError::EnvVarsError { errors } =
            validate_configuration(&config).unwrap_err();
        assert_eq!(
            errors,
            "\n  - Missing env. var.: REVASSIGN_SERVER_BIND_IP\
             \n  - Missing env. var.: REVASSIGN_SERVER_BIND_PORT\
             \n  - Missing env. var.: REVASSIGN_DATABASE_PG_URL"
        );
    }

    #[test]
    fn memory_driver_needs_no_url() {
        let mut config = Config::for_tests();
        config.database.pg.url = String::new();
        assert!(validate_configuration(&config).is_ok());
    }
}
