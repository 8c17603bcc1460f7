//! Deterministic placeholders for values that are only known when a proposal is executed.
//!
//! A [`CalldataReplacer`] generates 256-bit placeholder numbers which the caller ABI-encodes into
//! transaction calldata as if they were the real arguments. Later, every occurrence of each
//! placeholder is substituted with its final value, in a single calldata blob or across all the
//! transactions of a set of [`ProposalSteps`].
//!
//! # Example
//! ```
//! use proposer_core::{CalldataReplacer, Numeric, Replacements};
//!
//! let mut replacer = CalldataReplacer::new(Some("test"));
//! let placeholder = replacer.generate_placeholder("amount").unwrap();
//! let calldata = format!("0xa9059cbb{}", proposer_core::encode_word(placeholder));
//!
//! let replacements = Replacements::from([("amount".to_string(), Numeric::from(1337u64))]);
//! let substituted = replacer.substitute(&calldata, &replacements).unwrap();
//! assert_eq!(substituted, format!("0xa9059cbb{:0>64}", "539"));
//! ```

pub mod numeric;
pub mod placeholder;
pub mod proposal;
pub mod replacer;
pub mod result;
pub mod seed;
pub mod session;

pub use numeric::{encode_word, Numeric};
pub use placeholder::{Placeholder, FRAGMENT_LEN};
pub use proposal::{validate_calldata, MetaTransaction, Operation, ProposalSteps};
pub use replacer::{
    encode_replacements, filler, CalldataReplacer, Replacements, StringReplacements,
};
pub use result::{Error, Result};
pub use session::Session;
