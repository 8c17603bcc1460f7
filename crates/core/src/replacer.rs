//! Generation of deterministic placeholders and their substitution inside calldata.
//!
//! A [`CalldataReplacer`] hands out 256-bit placeholder numbers while proposal transactions are
//! being encoded. Once the real values are known (or deliberately left as visible filler), every
//! occurrence of each placeholder's hex fragment is replaced in the encoded calldata.

use crate::numeric::Numeric;
use crate::placeholder::{Placeholder, Registry, FRAGMENT_LEN};
use crate::proposal::{MetaTransaction, ProposalSteps};
use crate::result::{Error, Result};
use crate::seed::Seed;
use alloy_primitives::U256;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Final textual values keyed by placeholder id: 64 lowercase hex characters without `0x`.
pub type StringReplacements = BTreeMap<String, String>;

/// Final numeric values keyed by placeholder id.
pub type Replacements = BTreeMap<String, Numeric>;

/// Placeholder generator and substitution engine for one proposal-generation session.
#[derive(Debug, Clone)]
pub struct CalldataReplacer {
    seed: Seed,
    registry: Registry,
}

impl Default for CalldataReplacer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CalldataReplacer {
    /// Create a replacer seeded from `seed`, or from a random phrase when `None`.
    ///
    /// Two replacers built from the same phrase generate identical placeholders for identical
    /// ids.
    pub fn new(seed: Option<&str>) -> Self {
        Self {
            seed: seed.map_or_else(Seed::generate, Seed::from_phrase),
            registry: Registry::default(),
        }
    }

    /// Generate the placeholder number for `id`.
    ///
    /// The returned value is meant to be ABI-encoded wherever the final number will go. Fails
    /// with [`Error::DuplicateIdentifier`] if `id` was already used on this replacer.
    pub fn generate_placeholder(&mut self, id: &str) -> Result<U256> {
        let digest = self.seed.derive(id);
        let placeholder = self.registry.insert(id, digest)?;
        debug!(id, fragment = placeholder.fragment(), "registered placeholder");
        Ok(placeholder.value())
    }

    /// Registered placeholder for `id`, if any.
    pub fn placeholder(&self, id: &str) -> Option<&Placeholder> {
        self.registry.get(id)
    }

    /// Registered ids, in generation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.registry.ids()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Replace every placeholder in `calldata` with the matching textual value.
    ///
    /// `replacements` must cover exactly the registered ids. The calldata is lower-cased before
    /// substitution, so the result is a canonical lowercase hex blob.
    pub fn substitute_with_strings(
        &self,
        calldata: &str,
        replacements: &StringReplacements,
    ) -> Result<String> {
        let table = self.lookup_table(replacements)?;
        Ok(substitute_fragments(calldata, &table))
    }

    /// Replace every placeholder in `calldata` with the 32-byte word of its numeric value.
    pub fn substitute(&self, calldata: &str, replacements: &Replacements) -> Result<String> {
        self.substitute_with_strings(calldata, &encode_replacements(replacements)?)
    }

    /// Apply [`Self::substitute`] to the calldata of every transaction of every group.
    pub fn substitute_in_proposal(
        &self,
        steps: &[Vec<MetaTransaction>],
        replacements: &Replacements,
    ) -> Result<ProposalSteps> {
        self.substitute_with_strings_in_proposal(steps, &encode_replacements(replacements)?)
    }

    /// Apply [`Self::substitute_with_strings`] to the calldata of every transaction of every
    /// group. The input steps are left untouched; a new structure is returned.
    pub fn substitute_with_strings_in_proposal(
        &self,
        steps: &[Vec<MetaTransaction>],
        replacements: &StringReplacements,
    ) -> Result<ProposalSteps> {
        let table = self.lookup_table(replacements)?;
        let substituted: ProposalSteps = steps
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|tx| tx.with_data(substitute_fragments(&tx.data, &table)))
                    .collect()
            })
            .collect();
        debug!(
            groups = substituted.len(),
            transactions = substituted.iter().map(Vec::len).sum::<usize>(),
            "substituted placeholders in proposal"
        );
        Ok(substituted)
    }

    /// Add a `filler(ch)` value for every registered id that `replacements` does not cover.
    ///
    /// Used to render steps for review before the deferred values are known.
    pub fn fill_missing(&self, replacements: &mut StringReplacements, ch: char) {
        self.fill_missing_with(replacements, |_| Some(ch));
    }

    /// Like [`Self::fill_missing`], with the filler character chosen per id.
    ///
    /// Ids for which `fill` returns `None` stay uncovered, so substitution still reports them.
    pub fn fill_missing_with<F>(&self, replacements: &mut StringReplacements, fill: F)
    where
        F: Fn(&str) -> Option<char>,
    {
        for id in self.registry.ids() {
            if replacements.contains_key(id) {
                continue;
            }
            if let Some(ch) = fill(id) {
                replacements.insert(id.to_string(), filler(ch));
            }
        }
    }

    /// Check that `replacements` covers exactly the registry and map fragments to their values.
    fn lookup_table<'a>(
        &'a self,
        replacements: &'a StringReplacements,
    ) -> Result<HashMap<&'a str, &'a str>> {
        let missing: Vec<String> = self
            .registry
            .ids()
            .filter(|id| !replacements.contains_key(*id))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingReplacement(missing));
        }

        let unknown: Vec<String> = replacements
            .keys()
            .filter(|id| !self.registry.contains(id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(Error::UnknownReplacement(unknown));
        }

        let mut table = HashMap::with_capacity(replacements.len());
        for placeholder in self.registry.iter() {
            if let Some(value) = replacements.get(placeholder.id()) {
                if value.len() != FRAGMENT_LEN {
                    warn!(
                        id = placeholder.id(),
                        len = value.len(),
                        "replacement is not a 32-byte word, calldata length will change"
                    );
                }
                table.insert(placeholder.fragment(), value.as_str());
            }
        }
        Ok(table)
    }
}

/// Human-visible stand-in for a value that is still unknown, e.g. `xxxx…` (64 characters).
pub fn filler(ch: char) -> String {
    std::iter::repeat_n(ch, FRAGMENT_LEN).collect()
}

/// Encode each numeric replacement as a 32-byte word.
///
/// Fails on the first value that does not fit in 256 bits or is not a number.
pub fn encode_replacements(replacements: &Replacements) -> Result<StringReplacements> {
    replacements
        .iter()
        .map(|(id, value)| Ok((id.clone(), value.to_word()?)))
        .collect()
}

/// Lower-case `calldata` and rewrite each fragment found in `table`.
///
/// One left-to-right pass: at each position the next `FRAGMENT_LEN` characters are looked up,
/// and on a hit the replacement is emitted and the window skipped. Emitted text is never
/// rescanned, so the result does not depend on the order of ids.
fn substitute_fragments(calldata: &str, table: &HashMap<&str, &str>) -> String {
    let calldata = calldata.to_lowercase();
    if table.is_empty() {
        return calldata;
    }

    let mut out = String::with_capacity(calldata.len());
    let mut rest = calldata.as_str();
    while !rest.is_empty() {
        if let Some(value) = rest.get(..FRAGMENT_LEN).and_then(|window| table.get(window)) {
            out.push_str(value);
            rest = &rest[FRAGMENT_LEN..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}
