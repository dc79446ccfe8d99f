/*!
 * Built-in phrase dictionaries for the user manual.
 *
 * The Norwegian manual is the source; English (UK) and Swedish are derived
 * from it. The phrase tables live in `resources/dictionaries` and are embedded
 * at compile time.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::errors::DictionaryError;
use crate::translation::phrase::PhraseDictionary;

const NO_TO_EN_JSON: &str = include_str!("../../resources/dictionaries/no_en.json");
const NO_TO_SV_JSON: &str = include_str!("../../resources/dictionaries/no_sv.json");

/// Languages the Norwegian manual can be translated into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// UK English
    #[serde(alias = "en")]
    English,
    /// Swedish
    #[serde(alias = "sv")]
    Swedish,
}

impl TargetLanguage {
    /// All languages with a built-in dictionary.
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::English, TargetLanguage::Swedish];

    // @returns: ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swedish => "sv",
        }
    }

    // @returns: Human readable name used in log messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "UK English",
            Self::Swedish => "Swedish",
        }
    }

    // @returns: Default file name of the translated manual
    pub fn default_manual_file(&self) -> &'static str {
        match self {
            Self::English => "WinUpdate_User_Manual_UK.odt",
            Self::Swedish => "WinUpdate_Användarmanual_SE.odt",
        }
    }

    /// Parse the embedded Norwegian to `self` dictionary.
    pub fn builtin_dictionary(&self) -> Result<PhraseDictionary, DictionaryError> {
        match self {
            Self::English => PhraseDictionary::from_json_str(NO_TO_EN_JSON),
            Self::Swedish => PhraseDictionary::from_json_str(NO_TO_SV_JSON),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "en-gb" | "uk" | "english" => Ok(Self::English),
            "sv" | "swe" | "se" | "sv-se" | "swedish" => Ok(Self::Swedish),
            _ => Err(anyhow!("Unsupported target language: {}", s)),
        }
    }
}
