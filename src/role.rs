//! Caller roles.
//!
//! A role is the caller's declared identity class. There is no session: the
//! shell passes a role with every query and the core re-evaluates it each time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identity class of the caller.
///
/// # Examples
///
/// ```
/// use ivola::Role;
///
/// let role: Role = "Elder".parse().unwrap();
/// assert_eq!(role, Role::Elder);
/// assert_eq!(role.title(), "Traditional Elder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Role {
    /// Teacher of cultural and language materials.
    Educator,
    /// Traditional elder; holds full access.
    Elder,
    /// Youth learner.
    Youth,
    /// Researcher from outside the community.
    Researcher,
}

impl Role {
    /// Every role, in selector order.
    pub const ALL: [Self; 4] = [Self::Educator, Self::Elder, Self::Youth, Self::Researcher];

    /// Stable lowercase label used on the wire and in config.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Educator => "educator",
            Self::Elder => "elder",
            Self::Youth => "youth",
            Self::Researcher => "researcher",
        }
    }

    /// Display title shown by the role selector.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Educator => "Educator",
            Self::Elder => "Traditional Elder",
            Self::Youth => "Youth Learner",
            Self::Researcher => "External Researcher",
        }
    }

    /// Parse a label, falling back to [`Role::Researcher`] when it is not recognized.
    ///
    /// The fallback is the most restrictive role, so an unknown caller is denied.
    #[must_use]
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::debug!(label, "unrecognized role label, defaulting to researcher");
            Self::Researcher
        })
    }
}

impl Default for Role {
    /// The role selected when the shell starts.
    fn default() -> Self {
        Self::Educator
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.label() == normalized)
            .ok_or_else(|| ValidationError::UnknownRole {
                label: s.to_string(),
            })
    }
}

impl TryFrom<String> for Role {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!("ELDER".parse::<Role>().unwrap(), Role::Elder);
        assert_eq!("  youth ".parse::<Role>().unwrap(), Role::Youth);
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownRole {
                label: "admin".to_string()
            }
        );
    }

    #[test]
    fn unknown_label_defaults_to_researcher() {
        assert_eq!(Role::from_label_or_default("admin"), Role::Researcher);
        assert_eq!(Role::from_label_or_default(""), Role::Researcher);
        assert_eq!(Role::from_label_or_default("educator"), Role::Educator);
    }

    #[test]
    fn labels_round_trip_through_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn deserializes_with_the_same_leniency_as_parse() {
        let role: Role = serde_json::from_str("\"Elder\"").unwrap();
        assert_eq!(role, Role::Elder);
        let role: Role = serde_json::from_str("\" youth \"").unwrap();
        assert_eq!(role, Role::Youth);
        let err = serde_json::from_str::<Role>("\"chief\"").unwrap_err();
        assert!(err.to_string().contains("chief"));
    }

    #[test]
    fn serializes_as_lowercase_label() {
        let json = serde_json::to_string(&Role::Researcher).unwrap();
        assert_eq!(json, "\"researcher\"");
        let role: Role = serde_json::from_str("\"youth\"").unwrap();
        assert_eq!(role, Role::Youth);
    }

    #[test]
    fn default_is_educator() {
        assert_eq!(Role::default(), Role::Educator);
    }
}
