//! Runtime configuration for the contact book binary.
//!
//! Values come from the environment (optionally a `.env` file) and can be
//! overridden by command-line flags.

use std::env;
use std::path::PathBuf;

use crate::error::{BookError, BookResult};

pub const DEFAULT_DATA_FILE: &str = "data.csv";
pub const DATA_FILE_VAR: &str = "CONTACT_BOOK_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the book is loaded from at startup and saved to on exit.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Load configuration from `CONTACT_BOOK_FILE`, falling back to `data.csv`.
    pub fn from_env() -> BookResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> BookResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(DATA_FILE_VAR) {
            Some(value) if value.trim().is_empty() => Err(BookError::Config(format!(
                "{} cannot be empty",
                DATA_FILE_VAR
            ))),
            Some(value) => Ok(Self {
                data_file: PathBuf::from(value),
            }),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line flags on top of this configuration.
    pub fn apply_args<I>(mut self, args: I) -> BookResult<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => match args.next() {
                    Some(path) => self.data_file = PathBuf::from(path),
                    None => {
                        return Err(BookError::Config("--file requires a path argument".into()))
                    }
                },
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(BookError::Config(format!("Unknown argument: {}", other)));
                }
            }
        }
        Ok(Invocation::Run(self))
    }
}
