//! Module for the `substitute` subcommand, which resolves the placeholders of a proposal steps
//! file once the final values are known, or fills them with visible filler for review.

use super::{read_json, write_output, SessionError};
use async_trait::async_trait;
use clap::Args;
use proposer_core::{
    encode_replacements, ProposalSteps, Replacements, Session, StringReplacements,
};
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Arguments for the `substitute` subcommand.
#[derive(Args)]
pub struct SubstituteArgs {
    /// Session manifest written by `placeholder --emit`.
    #[arg(long, value_name = "PATH")]
    session: PathBuf,
    /// JSON file with the proposal steps (groups of transactions) containing placeholders.
    #[arg(long, value_name = "PATH")]
    steps: PathBuf,
    /// JSON object mapping each id to its final value.
    #[arg(long, value_name = "PATH")]
    replacements: Option<PathBuf>,
    /// Treat replacement values as literal 64-character hex text instead of numbers.
    #[arg(long)]
    strings: bool,
    /// Fill ids without a replacement with a character repeated 64 times. `CHAR` applies to
    /// every id, `ID=CHAR` to one id. Repeatable.
    #[arg(long, value_name = "[ID=]CHAR")]
    fill: Vec<FillRule>,
    /// Path to write the resulting steps to instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Executes the `substitute` subcommand.
#[async_trait]
impl super::Command for SubstituteArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let session: Session = read_json(&self.session).await?;
        let steps: ProposalSteps = read_json(&self.steps).await?;
        let replacer = session.replacer()?;

        let substituted = if !self.strings && self.fill.is_empty() {
            let replacements: Replacements = match &self.replacements {
                Some(path) => read_json(path).await?,
                None => Replacements::new(),
            };
            replacer.substitute_in_proposal(&steps, &replacements)?
        } else {
            let mut replacements: StringReplacements = match &self.replacements {
                Some(path) if self.strings => read_json(path).await?,
                Some(path) => {
                    let numeric: Replacements = read_json(path).await?;
                    encode_replacements(&numeric)?
                }
                None => StringReplacements::new(),
            };
            let fill = FillSpec::new(&self.fill);
            replacer.fill_missing_with(&mut replacements, |id| fill.char_for(id));
            replacer.substitute_with_strings_in_proposal(&steps, &replacements)?
        };

        info!(
            groups = substituted.len(),
            placeholders = replacer.len(),
            "proposal steps substituted"
        );
        let json = serde_json::to_string_pretty(&substituted).map_err(SessionError::from)?;
        write_output(self.output.as_deref(), &json).await?;
        Ok(())
    }
}

/// One `--fill` argument: a default filler character or one for a specific id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillRule {
    Default(char),
    Id(String, char),
}

impl FromStr for FillRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let single = |text: &str| {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(format!("expected a single filler character, got {text:?}")),
            }
        };
        match s.rsplit_once('=') {
            Some((id, ch)) if !id.is_empty() => Ok(FillRule::Id(id.to_string(), single(ch)?)),
            _ => single(s).map(FillRule::Default),
        }
    }
}

/// Filler characters resolved per id; the last matching rule wins.
#[derive(Debug, Default)]
pub struct FillSpec {
    default: Option<char>,
    per_id: HashMap<String, char>,
}

impl FillSpec {
    pub fn new(rules: &[FillRule]) -> Self {
        let mut spec = Self::default();
        for rule in rules {
            match rule {
                FillRule::Default(ch) => spec.default = Some(*ch),
                FillRule::Id(id, ch) => {
                    spec.per_id.insert(id.clone(), *ch);
                }
            }
        }
        spec
    }

    pub fn char_for(&self, id: &str) -> Option<char> {
        self.per_id.get(id).copied().or(self.default)
    }
}
