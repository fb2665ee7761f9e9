//! `HOTEL_*` environment overrides.
//!
//! These sit between `config.yaml` and the command-line flags. An unset
//! variable leaves the field alone; a set but unreadable one is an error
//! rather than being silently skipped.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Lock wait override, in seconds.
pub const ENV_BUSY_TIMEOUT: &str = "HOTEL_BUSY_TIMEOUT";
/// Auto-initialization override.
pub const ENV_DISABLE_AUTOINIT: &str = "HOTEL_DISABLE_AUTOINIT";
/// Table cell width override.
pub const ENV_COLUMN_WIDTH: &str = "HOTEL_COLUMN_WIDTH";

/// Reads the `HOTEL_*` variables into a [`Config`] layer.
///
/// ```no_run
/// use hotel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Overwrites every field whose variable is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable when its value is
    /// not a whole number (timeout, width) or not a recognizable switch.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(seconds) = read_number(ENV_BUSY_TIMEOUT)? {
            config.maximum_lock_wait_seconds = Some(seconds);
        }
        if let Ok(raw) = env::var(ENV_DISABLE_AUTOINIT) {
            config.disable_autoinit = Some(parse_switch(ENV_DISABLE_AUTOINIT, &raw)?);
        }
        if let Some(width) = read_number(ENV_COLUMN_WIDTH)? {
            config.column_width = Some(width);
        }
        Ok(())
    }
}

fn read_number<T: FromStr>(var: &str) -> Result<Option<T>> {
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };
    raw.trim().parse().map(Some).map_err(|_| Error::Validation {
        field: var.into(),
        message: format!("'{}' is not a whole number", raw.trim()),
    })
}

/// `1/true/yes/on` and `0/false/no/off`, any case.
fn parse_switch(var: &str, raw: &str) -> Result<bool> {
    const ON: [&str; 4] = ["1", "true", "yes", "on"];
    const OFF: [&str; 4] = ["0", "false", "no", "off"];

    let value = raw.trim();
    if ON.iter().any(|w| w.eq_ignore_ascii_case(value)) {
        Ok(true)
    } else if OFF.iter().any(|w| w.eq_ignore_ascii_case(value)) {
        Ok(false)
    } else {
        Err(Error::Validation {
            field: var.into(),
            message: format!("'{value}' is neither on nor off"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [ENV_BUSY_TIMEOUT, ENV_DISABLE_AUTOINIT, ENV_COLUMN_WIDTH] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_switch_spellings() {
        for on in ["true", "TRUE", "1", "yes", "on", " On "] {
            assert!(parse_switch("x", on).unwrap(), "{on}");
        }
        for off in ["false", "0", "no", "OFF"] {
            assert!(!parse_switch("x", off).unwrap(), "{off}");
        }
        assert!(parse_switch("x", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_unset_variables_change_nothing() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_every_variable_is_read() {
        clear_env();
        env::set_var(ENV_BUSY_TIMEOUT, " 12 ");
        env::set_var(ENV_DISABLE_AUTOINIT, "yes");
        env::set_var(ENV_COLUMN_WIDTH, "30");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.maximum_lock_wait_seconds, Some(12));
        assert_eq!(config.disable_autoinit, Some(true));
        assert_eq!(config.column_width, Some(30));
    }

    #[test]
    #[serial]
    fn test_unreadable_value_names_the_variable() {
        clear_env();
        env::set_var(ENV_COLUMN_WIDTH, "wide");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::Validation { field, .. }) if field == ENV_COLUMN_WIDTH));
    }
}
