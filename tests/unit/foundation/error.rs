use super::*;

#[test]
fn each_category_has_its_own_prefix() {
    let cases = [
        (ProkitError::validation("width 0"), "validation error: width 0"),
        (ProkitError::evaluation("parse svg"), "evaluation error: parse svg"),
        (ProkitError::synthesis("no candidates"), "synthesis error: no candidates"),
        (ProkitError::serde("bad json"), "serialization error: bad json"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn io_context_keeps_the_underlying_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = ProkitError::from(anyhow::Error::new(io).context("open design configuration 'x'"));

    assert!(matches!(err, ProkitError::Other(_)));
    assert_eq!(err.to_string(), "open design configuration 'x'");
    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("no such file"));
}
