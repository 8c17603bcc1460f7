//! Session manifests, so that a later process can rebuild the same placeholder registry.

use crate::replacer::CalldataReplacer;
use crate::result::Result;
use crate::seed::random_phrase;
use serde::{Deserialize, Serialize};

/// The seed phrase and generated ids of one proposal-generation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub seed: String,
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Session {
    /// Start a session, drawing a random seed phrase when none is given.
    pub fn new(seed: Option<String>) -> Self {
        Self {
            seed: seed.unwrap_or_else(random_phrase),
            ids: Vec::new(),
        }
    }

    /// Regenerate every placeholder of the session, in order, on a fresh replacer.
    pub fn replacer(&self) -> Result<CalldataReplacer> {
        let mut replacer = CalldataReplacer::new(Some(&self.seed));
        for id in &self.ids {
            replacer.generate_placeholder(id)?;
        }
        Ok(replacer)
    }
}
