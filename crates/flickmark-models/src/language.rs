use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading direction for a display language. Derived from the language,
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Fr,
    Zh,
}

impl Language {
    /// Stable order for language-switch menus.
    pub const ALL: [Language; 4] = [Language::En, Language::Ar, Language::Fr, Language::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::Zh => "zh",
        }
    }

    /// Name of the language in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::Fr => "Français",
            Language::Zh => "中文",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En | Language::Fr | Language::Zh => Direction::Ltr,
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            "fr" => Some(Language::Fr),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        for lang in Language::ALL {
            let expected = if lang == Language::Ar {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(lang.direction(), expected);
        }
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
