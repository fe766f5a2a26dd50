use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowercase words of letters, digits, apostrophes or hyphens, single-spaced.
const TERM_SHAPE: &str = r"^[\p{Ll}\p{Nd}'\-]+( [\p{Ll}\p{Nd}'\-]+)*$";

static TERM_PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn term_pattern() -> Result<&'static Regex, ValidationError> {
    TERM_PATTERN
        .get_or_init(|| Regex::new(TERM_SHAPE))
        .as_ref()
        .map_err(|e| ValidationError::InvalidTermPattern {
            reason: format!("invalid regex '{TERM_SHAPE}': {e}"),
        })
}

/// A recognized cultural term and its canonical explanation.
///
/// Terms are stored lowercase so matching against a lowercased query is a
/// plain substring test.
///
/// # Examples
///
/// ```
/// use ivola::KnowledgeEntry;
///
/// let entry = KnowledgeEntry::new("Lovo", "An earth oven.").unwrap();
/// assert_eq!(entry.term(), "lovo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct KnowledgeEntry {
    term: String,
    explanation: String,
}

#[derive(Deserialize)]
struct RawEntry {
    term: String,
    explanation: String,
}

impl TryFrom<RawEntry> for KnowledgeEntry {
    type Error = ValidationError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        Self::new(raw.term, raw.explanation)
    }
}

impl KnowledgeEntry {
    /// Creates a validated entry.
    ///
    /// # Validation
    /// - The term is trimmed and lowercased, then must be non-empty and made
    ///   of letters, digits, apostrophes or hyphens separated by single spaces.
    /// - The explanation must contain non-whitespace text.
    pub fn new(
        term: impl AsRef<str>,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let term = term.as_ref().trim().to_lowercase();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        if !term_pattern()?.is_match(&term) {
            return Err(ValidationError::InvalidTerm { term });
        }

        let explanation = explanation.into();
        if explanation.trim().is_empty() {
            return Err(ValidationError::EmptyExplanation { term });
        }

        Ok(Self { term, explanation })
    }

    /// Builds an entry from the built-in glossary without re-validating it.
    pub(crate) fn from_static(term: &str, explanation: &str) -> Self {
        Self {
            term: term.to_string(),
            explanation: explanation.to_string(),
        }
    }

    /// The lowercase term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The canonical explanation.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// True when the term occurs anywhere in `lowered_query`.
    ///
    /// The query must already be lowercase. This is a substring test, so
    /// "savanua" contains "vanua".
    #[must_use]
    pub fn occurs_in(&self, lowered_query: &str) -> bool {
        lowered_query.contains(self.term.as_str())
    }
}
