use std::str::FromStr;

use notedown::domain::LanguageCode;

#[test]
fn given_no_language_when_defaulting_then_auto_is_used() {
    assert_eq!(LanguageCode::default(), LanguageCode::Auto);
}

#[test]
fn given_every_supported_tag_when_parsing_then_round_trips() {
    let tags = [
        "auto", "en-US", "en-GB", "fr-FR", "es-ES", "de-DE", "es", "fr", "de",
    ];

    for tag in tags {
        let code = LanguageCode::from_str(tag).unwrap();
        assert_eq!(code.as_str(), tag);
    }
}

#[test]
fn given_unknown_tag_when_parsing_then_rejected_with_hint() {
    let err = LanguageCode::from_str("pt-BR").unwrap_err();
    assert!(err.contains("pt-BR"));
    assert!(err.contains("en-US"));
}

#[test]
fn given_language_code_when_serializing_then_uses_locale_string() {
    let json = serde_json::to_string(&LanguageCode::EnUs).unwrap();
    assert_eq!(json, "\"en-US\"");

    let back: LanguageCode = serde_json::from_str("\"de-DE\"").unwrap();
    assert_eq!(back, LanguageCode::DeDe);
}
