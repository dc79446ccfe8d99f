/*!
 * Tests for application configuration functionality
 */

use std::path::Path;
use std::time::Duration;

use winupdate_docs::app_config::{Config, LogLevel, TranslationTarget};
use winupdate_docs::TargetLanguage;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output_dir, ".");
    assert_eq!(config.changelog.input, "Changelog.html");
    assert_eq!(config.changelog.output, "Changelog.odt");
    assert_eq!(config.logo.size, 96);
    assert_eq!(config.logo.output, "winupdate_logo.png");
    assert_eq!(config.logo.frame_input, "GnuLogo.png");
    assert_eq!(config.logo.frame_output, "GnuLogo.bmp");
    assert_eq!(config.logo.frame_width, 5);
    assert_eq!(config.manual.output, "WinUpdate_Brukermanual_NO.odt");
    assert_eq!(config.manual.translations.len(), 2);
    assert_eq!(config.pdf.timeout(), Duration::from_secs(60));
    assert_eq!(config.pdf.delay(), Duration::from_secs(1));
    assert_eq!(
        config.pdf.files,
        vec![
            "WinUpdate_Brukermanual_NO.odt",
            "WinUpdate_User_Manual_UK.odt",
            "WinUpdate_Användarmanual_SE.odt",
        ]
    );
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.logo.size = 8;
    assert!(config.validate().is_err());
    config.logo.size = 96;

    config.logo.frame_width = 0;
    assert!(config.validate().is_err());
    config.logo.frame_width = 5;

    config.pdf.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.pdf.timeout_secs = 60;

    // A translation must not overwrite its source
    config.manual.translations[0].output = config.manual.output.clone();
    assert!(config.validate().is_err());
    config.manual.translations[0].output = "en.odt".to_string();

    config.manual.translations.push(TranslationTarget::new(TargetLanguage::English));
    assert!(config.validate().is_err());
}

/// Test that a partial config file is completed with defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "output_dir": "build",
        "logo": { "size": 128 },
        "manual": {
            "translations": [
                { "language": "swedish", "output": "sv.odt", "dictionary": "no_sv.json" }
            ]
        },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.logo.size, 128);
    assert_eq!(config.logo.output, "winupdate_logo.png");
    assert_eq!(config.changelog.input, "Changelog.html");
    assert_eq!(config.manual.translations.len(), 1);
    assert_eq!(config.manual.translations[0].language, TargetLanguage::Swedish);
    assert_eq!(config.manual.translations[0].dictionary.as_deref(), Some("no_sv.json"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.output_path("GnuLogo.png"), Path::new("build").join("GnuLogo.png"));
    assert!(config.validate().is_ok());
}

/// Test that a serialized default config reads back unchanged
#[test]
fn test_config_serialize_withDefaults_shouldReadBackEqual() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

/// Test that a language without a configured entry falls back to defaults
#[test]
fn test_translation_for_withMissingEntry_shouldUseDefaultFile() {
    let mut config = Config::default();
    config.manual.translations.retain(|t| t.language == TargetLanguage::Swedish);

    let english = config.manual.translation_for(TargetLanguage::English);
    assert_eq!(english.output, "WinUpdate_User_Manual_UK.odt");
    assert!(english.dictionary.is_none());
}

/// Test that translation languages accept the same short codes as the CLI
#[test]
fn test_config_deserialize_withLanguageCodes_shouldMatchCliNames() {
    let json = r#"{
        "manual": {
            "translations": [
                { "language": "en", "output": "en.odt" },
                { "language": "sv", "output": "sv.odt" }
            ]
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.manual.translations[0].language, TargetLanguage::English);
    assert_eq!(config.manual.translations[1].language, TargetLanguage::Swedish);

    // Serialization keeps the long names
    let written = serde_json::to_string(&config).unwrap();
    assert!(written.contains(r#""language":"english""#));
}
