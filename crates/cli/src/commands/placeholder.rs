//! Module for the `placeholder` subcommand, which generates the numbers to ABI-encode in place
//! of values that are not known yet.

use super::{write_output, SessionError};
use async_trait::async_trait;
use clap::Args;
use proposer_core::Session;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `placeholder` subcommand.
#[derive(Args)]
pub struct PlaceholderArgs {
    /// Ids to generate placeholders for, in order. Each id may appear once.
    #[arg(required = true)]
    pub ids: Vec<String>,
    /// Seed phrase. A random phrase is used (and recorded in the session) when omitted.
    #[arg(long)]
    seed: Option<String>,
    /// Path to write the session manifest to, for a later `substitute` run.
    #[arg(long, value_name = "PATH")]
    emit: Option<PathBuf>,
}

#[derive(Serialize)]
struct PlaceholderOutput<'a> {
    id: &'a str,
    decimal: String,
    hex: String,
}

/// Executes the `placeholder` subcommand.
#[async_trait]
impl super::Command for PlaceholderArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let PlaceholderArgs { ids, seed, emit } = self;

        let mut session = Session::new(seed);
        session.ids = ids;
        let replacer = session.replacer()?;

        let output: Vec<PlaceholderOutput<'_>> = session
            .ids
            .iter()
            .filter_map(|id| replacer.placeholder(id))
            .map(|placeholder| PlaceholderOutput {
                id: placeholder.id(),
                decimal: placeholder.value().to_string(),
                hex: format!("0x{}", placeholder.fragment()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);

        if let Some(path) = emit {
            let manifest = serde_json::to_string_pretty(&session).map_err(SessionError::from)?;
            write_output(Some(path.as_path()), &manifest).await?;
            info!(path = %path.display(), ids = session.ids.len(), "session written");
        }
        Ok(())
    }
}
