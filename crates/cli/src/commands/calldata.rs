//! Module for the `calldata` subcommand, which substitutes placeholders in one calldata blob.

use super::read_json;
use async_trait::async_trait;
use clap::Args;
use proposer_core::{Replacements, Session, StringReplacements};
use std::error::Error;
use std::path::PathBuf;

/// Arguments for the `calldata` subcommand.
#[derive(Args)]
pub struct CalldataArgs {
    /// Hex calldata (0x...) containing placeholders.
    pub calldata: String,
    /// Session manifest written by `placeholder --emit`.
    #[arg(long, value_name = "PATH")]
    session: PathBuf,
    /// JSON object mapping each id to its final value.
    #[arg(long, value_name = "PATH")]
    replacements: PathBuf,
    /// Treat replacement values as literal 64-character hex text instead of numbers.
    #[arg(long)]
    strings: bool,
}

/// Executes the `calldata` subcommand.
#[async_trait]
impl super::Command for CalldataArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let session: Session = read_json(&self.session).await?;
        let replacer = session.replacer()?;

        let substituted = if self.strings {
            let replacements: StringReplacements = read_json(&self.replacements).await?;
            replacer.substitute_with_strings(&self.calldata, &replacements)?
        } else {
            let replacements: Replacements = read_json(&self.replacements).await?;
            replacer.substitute(&self.calldata, &replacements)?
        };
        println!("{substituted}");
        Ok(())
    }
}
