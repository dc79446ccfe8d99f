use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;
use std::time::Duration;

use crate::manual::MANUAL_NO_FILE;
use crate::translation::TargetLanguage;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory that relative output paths are resolved against
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Changelog conversion
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Logo assets
    #[serde(default)]
    pub logo: LogoConfig,

    /// User manual and its translations
    #[serde(default)]
    pub manual: ManualConfig,

    /// PDF export
    #[serde(default)]
    pub pdf: PdfConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Changelog conversion settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    // @field: HTML changelog to read
    #[serde(default = "default_changelog_input")]
    pub input: String,

    // @field: ODT document to write
    #[serde(default = "default_changelog_output")]
    pub output: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            input: default_changelog_input(),
            output: default_changelog_output(),
        }
    }
}

/// Logo rendering settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogoConfig {
    // @field: PNG logo to write
    #[serde(default = "default_logo_output")]
    pub output: String,

    // @field: Logo edge length in pixels
    #[serde(default = "default_logo_size")]
    pub size: u32,

    // @field: Existing image to frame
    #[serde(default = "default_frame_input")]
    pub frame_input: String,

    // @field: Framed BMP to write
    #[serde(default = "default_frame_output")]
    pub frame_output: String,

    // @field: Frame width in pixels
    #[serde(default = "default_frame_width")]
    pub frame_width: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            output: default_logo_output(),
            size: default_logo_size(),
            frame_input: default_frame_input(),
            frame_output: default_frame_output(),
            frame_width: default_frame_width(),
        }
    }
}

/// One translated edition of the manual
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationTarget {
    // @field: Target language
    pub language: TargetLanguage,

    // @field: ODT document to write
    pub output: String,

    // @field: Dictionary JSON replacing the built-in table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<String>,
}

impl TranslationTarget {
    pub fn new(language: TargetLanguage) -> Self {
        Self {
            language,
            output: language.default_manual_file().to_string(),
            dictionary: None,
        }
    }
}

/// Manual generation settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ManualConfig {
    // @field: Norwegian manual to write, and the source of translations
    #[serde(default = "default_manual_output")]
    pub output: String,

    // @field: JSON content replacing the built-in manual text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    // @field: Editions produced by the translate command
    #[serde(default = "default_translations")]
    pub translations: Vec<TranslationTarget>,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            output: default_manual_output(),
            content: None,
            translations: default_translations(),
        }
    }
}

impl ManualConfig {
    // @returns: Configured edition for a language, or the default one
    pub fn translation_for(&self, language: TargetLanguage) -> TranslationTarget {
        self.translations
            .iter()
            .find(|t| t.language == language)
            .cloned()
            .unwrap_or_else(|| TranslationTarget::new(language))
    }
}

/// PDF export settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PdfConfig {
    // @field: LibreOffice soffice binary
    #[serde(default = "default_office_path")]
    pub office_path: String,

    // @field: Per-file conversion timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Pause between conversions
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    // @field: Documents converted by default
    #[serde(default = "default_pdf_files")]
    pub files: Vec<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            office_path: default_office_path(),
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
            files: default_pdf_files(),
        }
    }
}

impl PdfConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_changelog_input() -> String {
    "Changelog.html".to_string()
}

fn default_changelog_output() -> String {
    "Changelog.odt".to_string()
}

fn default_logo_output() -> String {
    "winupdate_logo.png".to_string()
}

fn default_logo_size() -> u32 {
    96
}

fn default_frame_input() -> String {
    "GnuLogo.png".to_string()
}

fn default_frame_output() -> String {
    "GnuLogo.bmp".to_string()
}

fn default_frame_width() -> u32 {
    5
}

fn default_manual_output() -> String {
    MANUAL_NO_FILE.to_string()
}

fn default_translations() -> Vec<TranslationTarget> {
    TargetLanguage::ALL.iter().copied().map(TranslationTarget::new).collect()
}

fn default_office_path() -> String {
    crate::pdf::DEFAULT_OFFICE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    crate::pdf::DEFAULT_TIMEOUT_SECS
}

fn default_delay_ms() -> u64 {
    crate::pdf::DEFAULT_DELAY_MS
}

fn default_pdf_files() -> Vec<String> {
    let mut files = vec![MANUAL_NO_FILE.to_string()];
    files.extend(TargetLanguage::ALL.iter().map(|l| l.default_manual_file().to_string()));
    files
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !(32..=4096).contains(&self.logo.size) {
            return Err(anyhow!("Logo size must be between 32 and 4096, got {}", self.logo.size));
        }

        if self.logo.frame_width == 0 || self.logo.frame_width > 256 {
            return Err(anyhow!("Frame width must be between 1 and 256, got {}", self.logo.frame_width));
        }

        if self.manual.output.trim().is_empty() {
            return Err(anyhow!("Manual output file name is required"));
        }

        for (index, target) in self.manual.translations.iter().enumerate() {
            if target.output.trim().is_empty() {
                return Err(anyhow!("Translation for {} has no output file", target.language.display_name()));
            }
            if target.output == self.manual.output {
                return Err(anyhow!(
                    "Translation for {} would overwrite the source manual {}",
                    target.language.display_name(),
                    self.manual.output
                ));
            }
            if self.manual.translations[..index].iter().any(|t| t.language == target.language) {
                return Err(anyhow!("Duplicate translation entry for {}", target.language.display_name()));
            }
        }

        if self.pdf.timeout_secs == 0 {
            return Err(anyhow!("PDF conversion timeout must be greater than zero"));
        }

        Ok(())
    }

    // @resolves: A configured path against output_dir
    pub fn output_path(&self, path: &str) -> PathBuf {
        crate::file_utils::FileManager::resolve(&self.output_dir, path)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            changelog: ChangelogConfig::default(),
            logo: LogoConfig::default(),
            manual: ManualConfig::default(),
            pdf: PdfConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
