use anuvadakah::presentation::config::Environment;

#[test]
fn given_mixed_case_name_when_parsing_environment_then_accepts_it() {
    assert_eq!(Environment::try_from("Test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from(" production ".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_formatting_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Local.to_string(), "local");
    assert_eq!(Environment::default(), Environment::Local);
}
