use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonIdError {
    #[error("lesson id cannot be empty")]
    Empty,

    #[error("lesson id cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

//
// ─── LESSON ID ─────────────────────────────────────────────────────────────────
//

/// Durable identity of a lesson, used as the key of the persisted completion map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonId(String);

impl LessonId {
    /// Validate and wrap an explicit lesson slug.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError` if the slug is empty or contains whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, LessonIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(LessonIdError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(LessonIdError::Whitespace(raw));
        }
        Ok(Self(raw))
    }

    /// Id derived from the 1-indexed week and lesson positions
    /// (`week-<W>-lesson-<L>`). Used for lessons without an explicit slug.
    #[must_use]
    pub fn positional(week: usize, lesson: usize) -> Self {
        Self(format!("week-{week}-lesson-{lesson}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LessonId {
    type Err = LessonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LessonId {
    type Error = LessonIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LessonId> for String {
    fn from(id: LessonId) -> Self {
        id.0
    }
}

impl AsRef<str> for LessonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
