//! Error construction, display and macro behavior

use saslmech_common::{bail, ensure, err, Error, ErrorKind, Result};
use std::error::Error as _;

#[test]
fn test_other_displays_message_verbatim() {
    let error = Error::other("boom");
    assert_eq!(error.to_string(), "boom");
    assert_eq!(error.kind(), &ErrorKind::Other("boom".to_string()));
    assert!(error.get_context().is_none());
}

#[test]
fn test_context_is_appended_to_kind() {
    let error = Error::type_error().context("s1 must be a buffer");
    assert_eq!(error.to_string(), "Type error: s1 must be a buffer");
    assert_eq!(error.kind(), &ErrorKind::Type);
    assert_eq!(error.get_context(), Some("s1 must be a buffer"));
}

#[test]
fn test_context_on_context_keeps_chain() {
    let error = Error::configuration()
        .context("iterations must be positive")
        .context("loading derivation params");

    assert_eq!(error.get_context(), Some("loading derivation params"));
    let source = error.source().map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("Configuration error: iterations must be positive")
    );
}

#[test]
fn test_with_source_exposes_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    let error = Error::with_source(ErrorKind::Resolver, io);

    assert_eq!(error.kind(), &ErrorKind::Resolver);
    assert_eq!(error.to_string(), "Resolver error (caused by: disk gone)");
    assert!(error.source().is_some());
}

#[test]
fn test_clone_shares_error() {
    let error = Error::other("shared");
    let copy = error.clone();
    assert_eq!(error.to_string(), copy.to_string());
}

#[test]
fn test_other_with_context_leads_with_context() {
    let error = Error::other("boom").context("resolving `password`");
    assert_eq!(error.to_string(), "resolving `password`: boom");
}

fn check_positive(n: i64) -> Result<i64> {
    ensure!(n > 0, configuration, "value {n} is not positive");
    Ok(n)
}

fn always_fails() -> Result<()> {
    bail!(internal, "unreachable state");
}

#[test]
fn test_macros_keep_message_and_record_location() {
    let error = err!(pattern);
    assert_eq!(error.kind(), &ErrorKind::Pattern);
    assert!(error.get_context().is_none());
    assert!(error.location().is_some_and(|at| at.file.ends_with("error_tests.rs")));

    assert_eq!(check_positive(3).ok(), Some(3));
    let failure = check_positive(-1).err();
    assert_eq!(
        failure.as_ref().and_then(Error::get_context),
        Some("value -1 is not positive")
    );
    assert_eq!(
        failure.as_ref().map(ToString::to_string).as_deref(),
        Some("Configuration error: value -1 is not positive")
    );

    let failure = always_fails().err();
    assert_eq!(failure.as_ref().map(Error::kind), Some(&ErrorKind::Internal));
}

#[test]
fn test_alternate_display_names_location() {
    let message = String::from("salt is not base64");
    let error = err!(encoding, message);
    let line = error.location().map(|at| at.line);

    let rendered = format!("{error:#}");
    assert!(rendered.starts_with("Encoding error: salt is not base64 ["));
    assert!(line.is_some_and(|line| rendered.ends_with(&format!("error_tests.rs:{line}]"))));
    assert!(!error.to_string().contains("error_tests.rs"));
}

#[test]
fn test_context_keeps_location_of_fresh_error() {
    let error = err!(type_error).context("s2 must be a buffer");
    assert_eq!(error.get_context(), Some("s2 must be a buffer"));
    assert!(error.location().is_some());
    assert!(error.source().is_none());
}
