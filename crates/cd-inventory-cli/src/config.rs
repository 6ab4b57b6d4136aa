use std::env;
use std::path::PathBuf;

/// Default backing file name, resolved in the working directory.
const DEFAULT_STORE_FILE: &str = "inventory.dat";

/// Runtime configuration for the CLI.
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Builds the configuration from the process argument list.
    ///
    /// The only supported argument is an optional path to the backing store
    /// file; anything past it is ignored.
    pub fn from_args() -> Self {
        Self::from_store_arg(env::args_os().nth(1).map(PathBuf::from))
    }

    fn from_store_arg(store_arg: Option<PathBuf>) -> Self {
        Self {
            store_path: store_arg.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
        }
    }
}
