use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Locale tags the grammar engine accepts. `Auto` is the sentinel that lets
/// the engine infer the language from the content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageCode {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Auto => "auto",
            LanguageCode::EnUs => "en-US",
            LanguageCode::EnGb => "en-GB",
            LanguageCode::FrFr => "fr-FR",
            LanguageCode::EsEs => "es-ES",
            LanguageCode::DeDe => "de-DE",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "en-US" => Ok(Self::EnUs),
            "en-GB" => Ok(Self::EnGb),
            "fr-FR" => Ok(Self::FrFr),
            "es-ES" => Ok(Self::EsEs),
            "de-DE" => Ok(Self::DeDe),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            other => Err(format!(
                "Unsupported language code: {}. Expected one of: auto, en-US, en-GB, fr-FR, es-ES, de-DE, es, fr, de",
                other
            )),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
