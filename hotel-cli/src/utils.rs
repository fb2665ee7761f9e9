//! Startup helpers: option validation, configuration and the connection.

use std::path::PathBuf;

use hotel::database::resolve_database_path;
use hotel::{Config, ConfigBuilder, Database, DatabaseConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Global CLI options shared across the client.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Database name.
    pub dbname: String,

    /// Database port, recorded for the operator.
    pub port: u16,

    /// Database user, recorded for the operator.
    pub user: String,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Directory of CSV files to load at startup.
    pub import: Option<PathBuf>,
}

impl GlobalOptions {
    /// Validates the connection parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` for port 0 or an empty user name.
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        if cli.port == 0 {
            return Err(CliError::InvalidArguments(
                "port must be between 1 and 65535".into(),
            ));
        }
        let user = cli.user.trim().to_string();
        if user.is_empty() {
            return Err(CliError::InvalidArguments("user must not be empty".into()));
        }

        Ok(Self {
            dbname: cli.dbname,
            port: cli.port,
            user,
            data_dir: cli.data_dir,
            busy_timeout: cli.busy_timeout,
            disable_autoinit: cli.disable_autoinit,
            import: cli.import,
        })
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The data directory's `config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    let flags = Config {
        maximum_lock_wait_seconds: global.busy_timeout,
        disable_autoinit: global.disable_autoinit.then_some(true),
        column_width: None,
    };

    builder
        .with_config(flags)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database named on the command line.
///
/// # Errors
///
/// Returns `NoDatabase` if the database doesn't exist and auto-init is
/// disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global.data_dir.as_deref(), &global.dbname)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    log::info!(
        "connecting to {} as {} (port {})",
        db_path.display(),
        global.user,
        global.port
    );

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(config.busy_timeout())
        .with_auto_create(!config.autoinit_disabled());

    Database::open(db_config).map_err(CliError::from)
}
