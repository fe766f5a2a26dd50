//! Access-controlled resolution: the single entry point the shell calls.
//!
//! `ask(role, query)` moves through one of three terminal states:
//! `EmptyQueryRejected`, `PermissionDenied` or `Resolved`. Every call is
//! independent; nothing is remembered between calls.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::access::{AccessPolicy, Permission, StaticAccessPolicy};
use crate::knowledge::KnowledgeBase;
use crate::role::Role;

/// Shown when a role without access asks a question.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied: You do not have cultural permissions to access this information. Please contact a traditional authority or cultural educator.";

/// Shown when the query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question about iTaukei culture.";

/// Why a query was rejected before any permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The query was empty or whitespace only.
    EmptyQuery,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "empty query"),
        }
    }
}

/// A resolved explanation, or the fallback when no term matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Explanation text (the fallback message when `matched_term` is `None`).
    pub explanation: String,

    /// Term that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_term: Option<String>,
}

impl Answer {
    /// True when no term matched and `explanation` is the fallback message.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.matched_term.is_none()
    }
}

/// Outcome of one `ask` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    /// Blank input; a user-input error, not a permission failure.
    Rejected {
        /// Why the query was rejected.
        reason: RejectReason,
    },

    /// The role may not query the knowledge base.
    Denied {
        /// Advisory message naming the escalation path.
        message: String,
        /// The permission that caused the denial.
        permission: Permission,
    },

    /// Access was granted and the knowledge base answered.
    Resolved(Answer),
}

/// Terminal state reached by an `ask` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Blank query.
    EmptyQueryRejected,
    /// Role lacks access.
    PermissionDenied,
    /// Explanation or fallback returned.
    Resolved,
}

impl Resolution {
    /// Terminal state of this resolution.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::Rejected { .. } => Outcome::EmptyQueryRejected,
            Self::Denied { .. } => Outcome::PermissionDenied,
            Self::Resolved(_) => Outcome::Resolved,
        }
    }

    /// Text the shell should display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected {
                reason: RejectReason::EmptyQuery,
            } => EMPTY_QUERY_MESSAGE,
            Self::Denied { message, .. } => message.as_str(),
            Self::Resolved(answer) => answer.explanation.as_str(),
        }
    }

    /// The answer, when access was granted.
    #[must_use]
    pub const fn answer(&self) -> Option<&Answer> {
        match self {
            Self::Resolved(answer) => Some(answer),
            _ => None,
        }
    }

    /// Returns true if the query was rejected as blank.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns true if access was denied.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }

    /// Returns true if the knowledge base answered.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Combines an access policy with a knowledge base.
///
/// # Examples
///
/// ```
/// use ivola::{CulturalResolver, Outcome, Role};
///
/// let resolver = CulturalResolver::new();
/// assert_eq!(resolver.ask(Role::Researcher, "bula").outcome(), Outcome::PermissionDenied);
/// assert_eq!(resolver.ask(Role::Elder, "  ").outcome(), Outcome::EmptyQueryRejected);
/// ```
#[derive(Clone)]
pub struct CulturalResolver {
    policy: Arc<dyn AccessPolicy>,
    knowledge: Arc<KnowledgeBase>,
}

impl fmt::Debug for CulturalResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CulturalResolver")
            .field("policy", &self.policy.name())
            .field("terms", &self.knowledge.len())
            .finish()
    }
}

impl Default for CulturalResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CulturalResolver {
    /// The fixed access table over the built-in glossary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(StaticAccessPolicy),
            Arc::new(KnowledgeBase::itaukei()),
        )
    }

    /// A resolver over a custom policy and knowledge base.
    #[must_use]
    pub fn with_parts(policy: Arc<dyn AccessPolicy>, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { policy, knowledge }
    }

    /// The knowledge base queries are resolved against.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Resolve `query` on behalf of `role`.
    #[must_use]
    pub fn ask(&self, role: Role, query: &str) -> Resolution {
        resolve_with(self.policy.as_ref(), &self.knowledge, role, query)
    }

    /// Like [`CulturalResolver::ask`], for a raw role label.
    ///
    /// Unrecognized labels are treated as [`Role::Researcher`].
    #[must_use]
    pub fn ask_as(&self, role_label: &str, query: &str) -> Resolution {
        self.ask(Role::from_label_or_default(role_label), query)
    }
}

/// Resolve `query` for `role` against the shared built-in glossary.
///
/// # Examples
///
/// ```
/// use ivola::{ask, Role};
///
/// let resolution = ask(Role::Elder, "Bula everyone!");
/// assert_eq!(resolution.answer().unwrap().matched_term.as_deref(), Some("bula"));
/// ```
#[must_use]
pub fn ask(role: Role, query: &str) -> Resolution {
    resolve_with(&StaticAccessPolicy, KnowledgeBase::shared(), role, query)
}

/// [`ask`] for a raw role label; unrecognized labels are denied.
#[must_use]
pub fn ask_as(role_label: &str, query: &str) -> Resolution {
    ask(Role::from_label_or_default(role_label), query)
}

/// True when `query` holds nothing but whitespace or byte-order marks.
fn is_blank(query: &str) -> bool {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn resolve_with(
    policy: &dyn AccessPolicy,
    knowledge: &KnowledgeBase,
    role: Role,
    query: &str,
) -> Resolution {
    if is_blank(query) {
        tracing::debug!(%role, "rejected empty query");
        return Resolution::Rejected {
            reason: RejectReason::EmptyQuery,
        };
    }

    let permission = policy.permission_for(role);
    if !permission.can_access() {
        tracing::debug!(%role, policy = policy.name(), "access denied");
        return Resolution::Denied {
            message: ACCESS_DENIED_MESSAGE.to_string(),
            permission,
        };
    }

    let answer = match knowledge.lookup(query) {
        Some(entry) => Answer {
            explanation: entry.explanation().to_string(),
            matched_term: Some(entry.term().to_string()),
        },
        None => Answer {
            explanation: knowledge.fallback().to_string(),
            matched_term: None,
        },
    };
    tracing::debug!(%role, matched = answer.matched_term.as_deref(), "query resolved");
    Resolution::Resolved(answer)
}
