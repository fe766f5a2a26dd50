use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Open label naming a category of restricted cultural knowledge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionTag(String);

impl RestrictionTag {
    /// Sacred ceremonies and their recordings.
    pub const SACRED_CEREMONIES: &'static str = "sacred_ceremonies";
    /// Genealogical records.
    pub const GENEALOGY: &'static str = "genealogy";
    /// Everything.
    pub const ALL: &'static str = "all";

    /// Creates a tag from any label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The `sacred_ceremonies` tag.
    #[must_use]
    pub fn sacred_ceremonies() -> Self {
        Self::new(Self::SACRED_CEREMONIES)
    }

    /// The `genealogy` tag.
    #[must_use]
    pub fn genealogy() -> Self {
        Self::new(Self::GENEALOGY)
    }

    /// The `all` tag.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestrictionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RestrictionTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Access decision for a role plus its advisory restriction labels.
///
/// # Examples
///
/// ```
/// use ivola::{permission_for, Role};
///
/// let permission = permission_for(Role::Youth);
/// assert!(permission.can_access());
/// assert!(permission.is_restricted("genealogy"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    can_access: bool,
    restrictions: BTreeSet<RestrictionTag>,
}

impl Permission {
    /// Access granted with the given restriction labels.
    #[must_use]
    pub fn granted<I, T>(restrictions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RestrictionTag>,
    {
        Self {
            can_access: true,
            restrictions: restrictions.into_iter().map(Into::into).collect(),
        }
    }

    /// Access denied across the board (`{all}`).
    #[must_use]
    pub fn denied() -> Self {
        Self {
            can_access: false,
            restrictions: BTreeSet::from([RestrictionTag::all()]),
        }
    }

    /// Whether the caller may query the knowledge base at all.
    #[must_use]
    pub const fn can_access(&self) -> bool {
        self.can_access
    }

    /// Restriction labels, sorted.
    #[must_use]
    pub const fn restrictions(&self) -> &BTreeSet<RestrictionTag> {
        &self.restrictions
    }

    /// True when `tag` (or `all`) is among the restrictions.
    #[must_use]
    pub fn is_restricted(&self, tag: &str) -> bool {
        self.restrictions
            .iter()
            .any(|t| t.as_str() == tag || t.as_str() == RestrictionTag::ALL)
    }

    /// True when access is granted with no restriction labels.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.can_access && self.restrictions.is_empty()
    }
}
