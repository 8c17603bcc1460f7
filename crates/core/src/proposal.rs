//! Proposal steps: execution groups of meta transactions carrying hex calldata.

use crate::result::{Error, Result};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize};

/// How the executing account dispatches a meta transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Operation {
    #[default]
    Call = 0,
    DelegateCall = 1,
}

impl TryFrom<u8> for Operation {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Operation::Call),
            1 => Ok(Operation::DelegateCall),
            other => Err(Error::InvalidOperation(other)),
        }
    }
}

impl From<Operation> for u8 {
    fn from(operation: Operation) -> Self {
        operation as u8
    }
}

/// A single transaction of a proposal. Only `data` is ever rewritten by substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTransaction {
    pub to: Address,
    pub value: U256,
    /// Hex-encoded calldata, `0x`-prefixed
    #[serde(deserialize_with = "deserialize_calldata")]
    pub data: String,
    #[serde(default)]
    pub operation: Operation,
}

impl MetaTransaction {
    /// A plain call without value transfer.
    pub fn call(to: Address, data: impl Into<String>) -> Self {
        Self {
            to,
            value: U256::ZERO,
            data: data.into(),
            operation: Operation::Call,
        }
    }

    /// Copy of this transaction carrying different calldata.
    pub fn with_data(&self, data: String) -> Self {
        Self { data, ..self.clone() }
    }
}

/// Check that `calldata` is hexadecimal with an even number of digits, after an optional `0x`.
///
/// The text itself is kept as written; case is only normalized by substitution.
pub fn validate_calldata(calldata: &str) -> Result<()> {
    let digits = calldata
        .strip_prefix("0x")
        .or_else(|| calldata.strip_prefix("0X"))
        .unwrap_or(calldata);
    hex::decode(digits)
        .map(|_| ())
        .map_err(|_| Error::InvalidHex(calldata.to_string()))
}

fn deserialize_calldata<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let calldata = String::deserialize(deserializer)?;
    validate_calldata(&calldata).map_err(serde::de::Error::custom)?;
    Ok(calldata)
}

/// Outer vector: execution groups, in order. Inner vector: transactions of one group.
pub type ProposalSteps = Vec<Vec<MetaTransaction>>;
