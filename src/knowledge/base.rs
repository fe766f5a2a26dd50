use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ValidationError;

use super::entry::KnowledgeEntry;
use super::glossary::{ITAUKEI_FALLBACK, ITAUKEI_GLOSSARY};

static SHARED: OnceLock<KnowledgeBase> = OnceLock::new();

/// Ordered set of recognized terms plus the message returned when none match.
///
/// The base is immutable once built and is safe to share across threads.
///
/// # Examples
///
/// ```
/// use ivola::KnowledgeBase;
///
/// let kb = KnowledgeBase::itaukei();
/// assert!(kb.resolve("Bula everyone!").starts_with("Bula!"));
/// assert_eq!(kb.resolve("what is a koro"), kb.fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    fallback: String,
}

impl KnowledgeBase {
    /// Starts a validating builder.
    #[must_use]
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    /// The built-in iTaukei glossary: bula, vanua, matanitu, solesolevaki, tabua.
    #[must_use]
    pub fn itaukei() -> Self {
        Self {
            entries: ITAUKEI_GLOSSARY
                .iter()
                .map(|(term, explanation)| KnowledgeEntry::from_static(term, explanation))
                .collect(),
            fallback: ITAUKEI_FALLBACK.to_string(),
        }
    }

    /// Process-wide read-only instance of [`KnowledgeBase::itaukei`].
    #[must_use]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::itaukei)
    }

    /// First entry, in declaration order, whose term occurs in `query`.
    ///
    /// Matching is case-insensitive and substring based.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&KnowledgeEntry> {
        let lowered = query.to_lowercase();
        let hit = self.entries.iter().find(|entry| entry.occurs_in(&lowered));
        tracing::trace!(matched = hit.map(KnowledgeEntry::term), "knowledge lookup");
        hit
    }

    /// Explanation for `query`, or the fallback message when nothing matches.
    ///
    /// Total over any input, including the empty string.
    #[must_use]
    pub fn resolve(&self, query: &str) -> &str {
        self.lookup(query)
            .map_or(self.fallback.as_str(), KnowledgeEntry::explanation)
    }

    /// Entry with exactly this term (case-insensitive).
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&KnowledgeEntry> {
        let term = term.trim().to_lowercase();
        self.entries.iter().find(|entry| entry.term() == term)
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Terms in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(KnowledgeEntry::term)
    }

    /// Message returned when no term matches.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the base has no entries (every query gets the fallback).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::itaukei()
    }
}

/// Builder for a custom [`KnowledgeBase`].
///
/// # Example
/// ```
/// use ivola::KnowledgeBase;
///
/// let kb = KnowledgeBase::builder()
///     .entry("lovo", "An earth oven used for feasts.")
///     .entry("masi", "Tapa cloth made from mulberry bark.")
///     .fallback("Ask about lovo or masi.")
///     .build()
///     .unwrap();
/// assert_eq!(kb.terms().collect::<Vec<_>>(), vec!["lovo", "masi"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseBuilder {
    entries: Vec<(String, String)>,
    fallback: Option<String>,
}

impl KnowledgeBaseBuilder {
    /// Appends an entry. Order of calls is the tie-break order.
    #[must_use]
    pub fn entry(mut self, term: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.entries.push((term.into(), explanation.into()));
        self
    }

    /// Sets the fallback message (required).
    #[must_use]
    pub fn fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = Some(message.into());
        self
    }

    /// Validate and build.
    ///
    /// Returns `ValidationError` if:
    /// - any entry fails [`KnowledgeEntry::new`] validation
    /// - two terms are equal after normalization
    /// - the fallback is missing or blank
    pub fn build(self) -> Result<KnowledgeBase, ValidationError> {
        let fallback = self
            .fallback
            .filter(|f| !f.trim().is_empty())
            .ok_or(ValidationError::EmptyFallback)?;

        let mut seen: HashSet<String> = HashSet::with_capacity(self.entries.len());
        let mut entries = Vec::with_capacity(self.entries.len());
        for (term, explanation) in self.entries {
            let entry = KnowledgeEntry::new(term, explanation)?;
            if !seen.insert(entry.term().to_string()) {
                return Err(ValidationError::DuplicateTerm {
                    term: entry.term().to_string(),
                });
            }
            entries.push(entry);
        }

        Ok(KnowledgeBase { entries, fallback })
    }
}
