//! Default derivation parameters

use saslmech_helpers::{
    binary_to_bytes, bytes_to_binary, decode_salt, extend, DerivationParams, ErrorKind, Prf,
    Record, Shared, Value, DEFAULT_ITERATIONS, DEFAULT_PRF, DEFAULT_SALT, DEFAULT_SALT_B64,
    DEFAULT_SALT_BYTES,
};

#[test]
fn test_constants() {
    assert_eq!(DEFAULT_PRF, "sha1");
    assert_eq!(DEFAULT_ITERATIONS, 4096);
}

#[test]
fn test_default_salt_decodes() {
    assert_eq!(DEFAULT_SALT_BYTES.len(), 64);
    assert_eq!(
        hex::encode(&DEFAULT_SALT_BYTES[..8]),
        "5c92ebde5665e6e2"
    );
    assert_eq!(DEFAULT_SALT.chars().count(), 64);
    assert_eq!(binary_to_bytes(&DEFAULT_SALT), *DEFAULT_SALT_BYTES);
    assert_eq!(bytes_to_binary(&DEFAULT_SALT_BYTES), *DEFAULT_SALT);
}

#[test]
fn test_default_salt_is_stable() {
    let first: &'static str = DEFAULT_SALT.as_str();
    let second: &'static str = DEFAULT_SALT.as_str();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_prf_names() -> saslmech_helpers::Result<()> {
    assert_eq!(Prf::default().as_str(), DEFAULT_PRF);
    assert_eq!("SHA-256".parse::<Prf>()?, Prf::Sha256);
    assert_eq!("sha512".parse::<Prf>()?, Prf::Sha512);
    assert_eq!(Prf::Sha1.to_string(), "sha1");

    let error = "md5".parse::<Prf>().err();
    assert_eq!(error.as_ref().map(|e| e.kind()), Some(&ErrorKind::Configuration));
    Ok(())
}

#[test]
fn test_params_default_from_constants() {
    let params = DerivationParams::default();
    assert_eq!(params.prf, Prf::Sha1);
    assert_eq!(params.salt, *DEFAULT_SALT_BYTES);
    assert_eq!(params.iterations, DEFAULT_ITERATIONS);
}

#[test]
fn test_params_builder() {
    let params = DerivationParams::default()
        .with_prf(Prf::Sha256)
        .with_salt(b"QSXCR+Q6sek8bf92".to_vec())
        .with_iterations(10_000);
    assert_eq!(params.prf, Prf::Sha256);
    assert_eq!(params.salt, b"QSXCR+Q6sek8bf92");
    assert_eq!(params.iterations, 10_000);
}

#[test]
fn test_salt_from_base64() -> saslmech_helpers::Result<()> {
    assert_eq!(decode_salt(DEFAULT_SALT_B64)?, *DEFAULT_SALT_BYTES);

    let params = DerivationParams::default().with_salt_b64("AQID")?;
    assert_eq!(params.salt, vec![1, 2, 3]);

    let error = DerivationParams::default().with_salt_b64("not base64!").err();
    assert_eq!(error.as_ref().map(|e| e.kind()), Some(&ErrorKind::Encoding));
    assert_eq!(
        error.as_ref().and_then(|e| e.get_context()),
        Some("salt is not valid base64")
    );
    Ok(())
}

#[test]
fn test_params_from_layered_record() -> saslmech_helpers::Result<()> {
    let defaults = Shared::new(DerivationParams::default().to_record());
    let overrides = Shared::new(Record::from_iter([
        ("iterations", Value::from(8192)),
        ("salt", Value::from("\u{1}\u{2}")),
    ]));
    let config = extend(Some(defaults), Some(&overrides));

    let params = DerivationParams::from_record(&config.read())?;
    assert_eq!(params.prf, Prf::Sha1);
    assert_eq!(params.salt, vec![1, 2]);
    assert_eq!(params.iterations, 8192);
    Ok(())
}

#[test]
fn test_params_from_empty_record_is_default() -> saslmech_helpers::Result<()> {
    assert_eq!(
        DerivationParams::from_record(&Record::new())?,
        DerivationParams::default()
    );
    Ok(())
}

#[test]
fn test_params_reject_bad_values() {
    let cases = [
        ("iterations", Value::from(0)),
        ("iterations", Value::from(1.5)),
        ("iterations", Value::from("4096")),
        ("prf", Value::from("md5")),
        ("prf", Value::from(1)),
        ("salt", Value::from(12)),
    ];
    for (key, value) in cases {
        let record = Record::from_iter([(key, value)]);
        let error = DerivationParams::from_record(&record).err();
        assert_eq!(
            error.as_ref().map(|e| e.kind()),
            Some(&ErrorKind::Configuration),
            "{key}"
        );
        assert!(error.as_ref().and_then(|e| e.location()).is_some(), "{key}");
    }
}

#[test]
fn test_params_serde_defaults() -> Result<(), serde_json::Error> {
    let params: DerivationParams = serde_json::from_str(r#"{"prf":"sha256"}"#)?;
    assert_eq!(params.prf, Prf::Sha256);
    assert_eq!(params.salt, *DEFAULT_SALT_BYTES);
    assert_eq!(params.iterations, DEFAULT_ITERATIONS);

    let json = serde_json::to_string(&params.clone().with_iterations(1))?;
    let back: DerivationParams = serde_json::from_str(&json)?;
    assert_eq!(back.iterations, 1);
    assert_eq!(back.prf, Prf::Sha256);
    Ok(())
}
