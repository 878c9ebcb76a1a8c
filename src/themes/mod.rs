//! Themed word lists
//!
//! A theme names a category and carries the ordered word list daily
//! selection indexes into. The catalog validates every list at startup;
//! unknown theme ids are an error, never a silent default.

mod embedded;

pub use embedded::{ANIMALS, FOODS, MLB, SPORTS};

use crate::core::{Word, WordError};
use std::fmt;

/// Static definition of a built-in theme
struct ThemeDef {
    id: &'static str,
    name: &'static str,
    words: &'static [&'static str],
}

const BUILTIN: &[ThemeDef] = &[
    ThemeDef {
        id: "mlb",
        name: "MLB",
        words: MLB,
    },
    ThemeDef {
        id: "sports",
        name: "Sports",
        words: SPORTS,
    },
    ThemeDef {
        id: "foods",
        name: "Foods",
        words: FOODS,
    },
    ThemeDef {
        id: "animals",
        name: "Animals",
        words: ANIMALS,
    },
];

/// A validated theme: id, display name, parsed word list
#[derive(Debug, Clone)]
pub struct Theme {
    id: String,
    name: String,
    words: Vec<Word>,
}

impl Theme {
    /// Build a theme from raw entries, validating each word
    ///
    /// # Errors
    /// Returns `ThemeError::InvalidWord` for any malformed entry and
    /// `ThemeError::EmptyList` for a list with no entries.
    pub fn new<S: AsRef<str>>(id: &str, name: &str, entries: &[S]) -> Result<Self, ThemeError> {
        if entries.is_empty() {
            return Err(ThemeError::EmptyList {
                theme: id.to_string(),
            });
        }

        let words = entries
            .iter()
            .map(|entry| {
                Word::new(entry.as_ref()).map_err(|source| ThemeError::InvalidWord {
                    theme: id.to_string(),
                    word: entry.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<Word>, ThemeError>>()?;

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            words,
        })
    }

    /// Stable identifier ("mlb", "foods", ...)
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered word list
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// All themes available to the game
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: Vec<Theme>,
}

impl Catalog {
    /// Load and validate the built-in themes
    ///
    /// # Errors
    /// Returns `ThemeError` if any built-in list contains an invalid entry.
    /// With the shipped lists this cannot happen; validation still runs so a
    /// bad edit fails at startup rather than mid-game.
    pub fn builtin() -> Result<Self, ThemeError> {
        let themes = BUILTIN
            .iter()
            .map(|def| Theme::new(def.id, def.name, def.words))
            .collect::<Result<Vec<Theme>, ThemeError>>()?;

        Ok(Self { themes })
    }

    /// Look up a theme by id
    ///
    /// # Errors
    /// Returns `ThemeError::Unknown` for an id not in the catalog.
    pub fn get(&self, id: &str) -> Result<&Theme, ThemeError> {
        self.themes
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ThemeError::Unknown { id: id.to_string() })
    }

    /// All themes, in registration order
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

/// Error type for theme lookup and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    Unknown {
        id: String,
    },
    EmptyList {
        theme: String,
    },
    InvalidWord {
        theme: String,
        word: String,
        source: WordError,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { id } => write!(f, "Unknown theme '{id}'"),
            Self::EmptyList { theme } => write!(f, "Theme '{theme}' has an empty word list"),
            Self::InvalidWord {
                theme,
                word,
                source,
            } => write!(f, "Theme '{theme}' has invalid word '{word}': {source}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}
