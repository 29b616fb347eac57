use super::*;

#[test]
fn error_codes_are_distinct() {
    let codes = [
        ThemeError::EmptyPalette.error_code(),
        ThemeError::TargetMissing("body").error_code(),
        ThemeError::Dom("x".into()).error_code(),
    ];
    assert_eq!(codes, ["E_EMPTY_PALETTE", "E_TARGET_MISSING", "E_DOM"]);
}

#[test]
fn target_missing_names_the_element() {
    assert_eq!(
        ThemeError::TargetMissing("body").to_string(),
        "target element not found: body"
    );
}

#[test]
fn json_errors_convert_into_config_errors() {
    let err: ThemeError = serde_json::from_str::<u8>("nope").unwrap_err().into();
    assert_eq!(err.error_code(), "E_CONFIG");
    assert!(err.to_string().starts_with("invalid theme config:"));
}
