//! Locales and their translation tables.

pub mod catalog;
mod en;
mod ja;
mod ko;
mod zh;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::LqoError;

pub use catalog::{TranslationTable, lookup, resolve, verify_catalog};

/// Supported UI locale. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
    Ja,
    Zh,
}

impl Locale {
    /// All locales in switcher order.
    pub const ALL: [Self; 4] = [Self::En, Self::Ko, Self::Ja, Self::Zh];

    /// Storage and wire code (`en`, `ko`, `ja`, `zh`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::Zh => "zh",
        }
    }

    /// Language name written in the language itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "한국어",
            Self::Ja => "日本語",
            Self::Zh => "中文",
        }
    }

    /// Exact code match, as persisted by [`Locale::code`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Lenient parse for user input: trimmed, case-insensitive. Unknown codes
    /// yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(raw))
    }

    /// Translation table for this locale.
    #[must_use]
    pub fn table(self) -> &'static TranslationTable {
        resolve(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LqoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LqoError::InvalidConfig {
            details: format!("unsupported locale {s:?} (expected one of en, ko, ja, zh)"),
        })
    }
}
