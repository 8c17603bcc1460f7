use async_trait::async_trait;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::path::{Path, PathBuf};

pub mod calldata;
pub mod placeholder;
pub mod substitute;

use thiserror::Error;

/// Errors raised while loading or saving session files.
#[derive(Debug, Error)]
pub enum SessionError {
    /// File read/write error.
    #[error("could not access '{path}': {source}")]
    File {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file does not hold the expected JSON document.
    #[error("could not parse '{path}': {source}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Placeholder or substitution failure.
    #[error(transparent)]
    Replacer(#[from] proposer_core::Error),
}

/// CLI subcommands for the proposer.
#[derive(Subcommand)]
pub enum Cmd {
    /// Generate placeholders for ids and optionally record the session.
    Placeholder(placeholder::PlaceholderArgs),
    /// Substitute placeholders in every transaction of a proposal steps file.
    Substitute(substitute::SubstituteArgs),
    /// Substitute placeholders in a single calldata blob.
    Calldata(calldata::CalldataArgs),
}

/// Trait for executing CLI subcommands.
///
/// Implementors read their inputs, run the replacer and print or write the result.
#[async_trait]
pub trait Command {
    /// Executes the subcommand.
    ///
    /// # Returns
    /// A `Result` indicating success or an error if execution fails.
    async fn execute(self) -> Result<(), Box<dyn Error>>;
}

#[async_trait]
impl Command for Cmd {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Placeholder(args) => args.execute().await,
            Cmd::Substitute(args) => args.execute().await,
            Cmd::Calldata(args) => args.execute().await,
        }
    }
}

/// Read and deserialize a JSON file.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SessionError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SessionError::File {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| SessionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, or print it when no path is given.
pub async fn write_output(path: Option<&Path>, contents: &str) -> Result<(), SessionError> {
    match path {
        Some(path) => tokio::fs::write(path, contents)
            .await
            .map_err(|source| SessionError::File {
                path: path.to_path_buf(),
                source,
            }),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
