use super::*;

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn toggled_flips_between_the_two_states() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
}

#[test]
fn is_dark_matches_variant() {
    assert!(ThemePreference::Dark.is_dark());
    assert!(!ThemePreference::Light.is_dark());
    assert_eq!(ThemePreference::from_dark(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_dark(false), ThemePreference::Light);
}

#[test]
fn parse_accepts_names_case_insensitively() {
    assert_eq!(" Dark ".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("LIGHT".parse::<ThemePreference>(), Ok(ThemePreference::Light));
}

#[test]
fn parse_accepts_legacy_boolean_encoding() {
    assert_eq!("true".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("false".parse::<ThemePreference>(), Ok(ThemePreference::Light));
}

#[test]
fn parse_rejects_garbage() {
    let err = "purple".parse::<ThemePreference>().unwrap_err();
    assert_eq!(err, ParseThemeError("purple".to_owned()));
    assert!("".parse::<ThemePreference>().is_err());
}

#[test]
fn display_matches_storage_encoding() {
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
    assert_eq!(ThemePreference::Light.to_string(), ThemePreference::Light.as_str());
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
    let parsed: ThemePreference = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, ThemePreference::Light);
}
