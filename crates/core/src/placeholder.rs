//! Registry of generated placeholders, keyed by caller-chosen ids.

use crate::result::{Error, Result};
use alloy_primitives::U256;
use std::collections::HashMap;

/// Length in hex characters of a placeholder fragment inside calldata.
pub const FRAGMENT_LEN: usize = 64;

/// A generated placeholder: the number handed to the ABI encoder and the hex text it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    id: String,
    value: U256,
    /// Lowercase hex of `value`, without `0x`
    fragment: String,
}

impl Placeholder {
    fn new(id: &str, digest: [u8; 32]) -> Self {
        Self {
            id: id.to_string(),
            value: U256::from_be_bytes(digest),
            fragment: hex::encode(digest),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> U256 {
        self.value
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// Insertion-ordered map from id to placeholder. Entries are only ever added.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Placeholder>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Record the placeholder for `id`, refusing ids that are already registered.
    pub fn insert(&mut self, id: &str, digest: [u8; 32]) -> Result<&Placeholder> {
        if self.index.contains_key(id) {
            return Err(Error::DuplicateIdentifier(id.to_string()));
        }
        self.index.insert(id.to_string(), self.entries.len());
        self.entries.push(Placeholder::new(id, digest));
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn get(&self, id: &str) -> Option<&Placeholder> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Placeholder::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
