use alloy_primitives::U256;
use proposer_core::{CalldataReplacer, Error, Numeric, Replacements, StringReplacements};
use proposer_tests::abi::{encode_call, ONE_INPUT, THREE_INPUTS, TWO_INPUTS};

const MAX_DECIMAL: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";
const OVERFLOW_DECIMAL: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639936";

fn numeric(pairs: &[(&str, Numeric)]) -> Replacements {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

fn strings(pairs: &[(&str, &str)]) -> StringReplacements {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

fn uint(value: u64) -> U256 {
    U256::from(value)
}

#[test]
fn test_replaces_calldata() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("key").unwrap();

    let calldata = encode_call(ONE_INPUT, &[placeholder]);
    let replaced = replacer
        .substitute(&calldata, &numeric(&[("key", 1337u64.into())]))
        .unwrap();
    assert_eq!(replaced, encode_call(ONE_INPUT, &[uint(1337)]));
}

#[test]
fn test_replaces_repeating_calldata() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("key").unwrap();

    let calldata = encode_call(TWO_INPUTS, &[placeholder, placeholder]);
    let replaced = replacer
        .substitute(&calldata, &numeric(&[("key", 1337u64.into())]))
        .unwrap();
    assert_eq!(replaced, encode_call(TWO_INPUTS, &[uint(1337), uint(1337)]));
}

#[test]
fn test_replaces_multiple_values() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let ph1 = replacer.generate_placeholder("key1").unwrap();
    let ph2 = replacer.generate_placeholder("key2").unwrap();
    let ph3 = replacer.generate_placeholder("key3").unwrap();

    // Encoding order differs from generation order.
    let calldata = encode_call(THREE_INPUTS, &[ph1, ph3, ph2]);
    let replacements = numeric(&[
        ("key1", 1337u64.into()),
        ("key2", 31337u64.into()),
        ("key3", 42u64.into()),
    ]);
    assert_eq!(
        replacer.substitute(&calldata, &replacements).unwrap(),
        encode_call(THREE_INPUTS, &[uint(1337), uint(42), uint(31337)])
    );
}

#[test]
fn test_generation_order_does_not_matter() {
    let orders = [
        ["key1", "key2", "key3"],
        ["key3", "key1", "key2"],
        ["key2", "key3", "key1"],
    ];
    let replacements = numeric(&[
        ("key1", 1u64.into()),
        ("key2", 2u64.into()),
        ("key3", 3u64.into()),
    ]);

    let results: Vec<String> = orders
        .iter()
        .map(|order| {
            let mut replacer = CalldataReplacer::new(Some("test"));
            for id in order {
                replacer.generate_placeholder(id).unwrap();
            }
            let args: Vec<U256> = ["key1", "key2", "key3"]
                .iter()
                .map(|id| replacer.placeholder(id).unwrap().value())
                .collect();
            replacer
                .substitute(&encode_call(THREE_INPUTS, &args), &replacements)
                .unwrap()
        })
        .collect();

    assert_eq!(results[0], encode_call(THREE_INPUTS, &[uint(1), uint(2), uint(3)]));
    assert!(results.iter().all(|result| result == &results[0]));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let first = replacer.generate_placeholder("key").unwrap();

    let err = replacer.generate_placeholder("key").unwrap_err();
    assert_eq!(err, Error::DuplicateIdentifier("key".to_string()));
    assert!(err.to_string().contains("\"key\""));

    // The original entry is kept.
    assert_eq!(replacer.len(), 1);
    assert_eq!(replacer.placeholder("key").unwrap().value(), first);
}

#[test]
fn test_throws_if_key_is_missing() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    replacer.generate_placeholder("key").unwrap();

    let err = replacer.substitute("", &Replacements::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the following keys should be replaced and are missing: key"
    );
}

#[test]
fn test_missing_keys_are_listed_exactly() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    for id in ["key1", "key2", "key3"] {
        replacer.generate_placeholder(id).unwrap();
    }

    let err = replacer
        .substitute("", &numeric(&[("key2", 2u64.into())]))
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingReplacement(vec!["key1".to_string(), "key3".to_string()])
    );
}

#[test]
fn test_throws_if_there_are_extra_keys() {
    let replacer = CalldataReplacer::new(Some("test"));

    let err = replacer
        .substitute("", &numeric(&[("key", "1337".into())]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the following keys were specified to be replaced but the corresponding placeholder \
         was not found: key"
    );
}

#[test]
fn test_extra_keys_are_listed_exactly() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    replacer.generate_placeholder("key").unwrap();

    let err = replacer
        .substitute_with_strings(
            "",
            &strings(&[("key", "00"), ("other", "00"), ("another", "00")]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnknownReplacement(vec!["another".to_string(), "other".to_string()])
    );
}

#[test]
fn test_max_value_is_accepted() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("key").unwrap();
    let calldata = encode_call(ONE_INPUT, &[placeholder]);

    let expected = encode_call(ONE_INPUT, &[U256::MAX]);
    for value in [Numeric::from(U256::MAX), Numeric::from(MAX_DECIMAL)] {
        let replaced = replacer
            .substitute(&calldata, &numeric(&[("key", value)]))
            .unwrap();
        assert_eq!(replaced, expected);
    }
}

#[test]
fn test_throws_if_number_is_too_large() {
    let replacer = CalldataReplacer::new(Some("test"));

    let err = replacer
        .substitute("", &numeric(&[("key", OVERFLOW_DECIMAL.into())]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("number is too large to represent in 32 bytes: {OVERFLOW_DECIMAL}")
    );
}

#[test]
fn test_substitution_with_strings() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("amount").unwrap();
    let calldata = encode_call(TWO_INPUTS, &[uint(7), placeholder]);

    let filler = "x".repeat(64);
    let replaced = replacer
        .substitute_with_strings(&calldata, &strings(&[("amount", filler.as_str())]))
        .unwrap();

    let untouched = encode_call(TWO_INPUTS, &[uint(7), uint(0)]);
    assert_eq!(replaced, format!("{}{filler}", &untouched[..untouched.len() - 64]));
}

#[test]
fn test_uppercase_calldata_is_normalized() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("key").unwrap();
    let calldata = encode_call(ONE_INPUT, &[placeholder]).to_uppercase();

    let replaced = replacer
        .substitute(&calldata, &numeric(&[("key", 1337u64.into())]))
        .unwrap();
    assert_eq!(replaced, encode_call(ONE_INPUT, &[uint(1337)]));
}

#[test]
fn test_substitution_can_be_repeated() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let placeholder = replacer.generate_placeholder("key").unwrap();
    let calldata = encode_call(ONE_INPUT, &[placeholder]);

    let first = replacer
        .substitute(&calldata, &numeric(&[("key", 1u64.into())]))
        .unwrap();
    let second = replacer
        .substitute(&calldata, &numeric(&[("key", 2u64.into())]))
        .unwrap();
    assert_eq!(first, encode_call(ONE_INPUT, &[uint(1)]));
    assert_eq!(second, encode_call(ONE_INPUT, &[uint(2)]));
    assert_eq!(replacer.len(), 1);
}

#[test]
fn test_generation_after_substitution() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let ph1 = replacer.generate_placeholder("key1").unwrap();
    replacer
        .substitute("", &numeric(&[("key1", 1u64.into())]))
        .unwrap();

    let ph2 = replacer.generate_placeholder("key2").unwrap();
    let calldata = encode_call(TWO_INPUTS, &[ph1, ph2]);

    assert!(matches!(
        replacer.substitute(&calldata, &numeric(&[("key1", 1u64.into())])),
        Err(Error::MissingReplacement(ids)) if ids == vec!["key2".to_string()]
    ));
    let replaced = replacer
        .substitute(
            &calldata,
            &numeric(&[("key1", 1u64.into()), ("key2", 2u64.into())]),
        )
        .unwrap();
    assert_eq!(replaced, encode_call(TWO_INPUTS, &[uint(1), uint(2)]));
}

#[test]
fn test_fill_missing() {
    let mut replacer = CalldataReplacer::new(Some("test"));
    let transfer = replacer.generate_placeholder("atomsToTransfer").unwrap();
    let bridge = replacer.generate_placeholder("atomsToBridge").unwrap();

    let mut replacements = strings(&[("atomsToTransfer", "0".repeat(64).as_str())]);
    replacer.fill_missing(&mut replacements, 'y');
    assert_eq!(replacements["atomsToBridge"], "y".repeat(64));
    assert_eq!(replacements["atomsToTransfer"], "0".repeat(64));

    let calldata = encode_call(TWO_INPUTS, &[transfer, bridge]);
    let replaced = replacer.substitute_with_strings(&calldata, &replacements).unwrap();
    assert!(replaced.ends_with(&format!("{}{}", "0".repeat(64), "y".repeat(64))));
}

#[test]
fn test_empty_registry_only_normalizes() {
    let replacer = CalldataReplacer::new(Some("test"));
    assert!(replacer.is_empty());
    assert_eq!(
        replacer
            .substitute("0xABCDEF", &Replacements::new())
            .unwrap(),
        "0xabcdef"
    );
}
