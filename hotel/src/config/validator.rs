//! Configuration validation.

use crate::config::schema::{Config, MAX_COLUMN_WIDTH};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { column_width: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(width) = config.column_width {
            if width == 0 || width > MAX_COLUMN_WIDTH {
                return Err(Error::Validation {
                    field: "column_width".into(),
                    message: format!("Must be between 1 and {MAX_COLUMN_WIDTH}, got {width}"),
                });
            }
        }

        Ok(())
    }
}
