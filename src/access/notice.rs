use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Whether a notice line grants, restricts, or denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Something the role may see.
    Granted,
    /// Something withheld from the role.
    Restricted,
    /// The role has no access.
    Denied,
}

/// A human-readable line describing what a role may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessNotice {
    /// Kind of line.
    pub kind: NoticeKind,
    /// Text to display.
    pub text: String,
}

impl AccessNotice {
    fn new(kind: NoticeKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Notice lines for `role`, in display order.
#[must_use]
pub fn access_notices(role: Role) -> Vec<AccessNotice> {
    use NoticeKind::{Denied, Granted, Restricted};

    match role {
        Role::Elder => vec![AccessNotice::new(Granted, "Full access to all cultural knowledge")],
        Role::Educator => vec![
            AccessNotice::new(Granted, "Access to educational materials"),
            AccessNotice::new(Restricted, "Restricted: Sacred ceremonies"),
        ],
        Role::Youth => vec![
            AccessNotice::new(Granted, "Access to language learning materials"),
            AccessNotice::new(
                Restricted,
                "Restricted: Genealogical records, Sacred ceremonies",
            ),
        ],
        Role::Researcher => vec![AccessNotice::new(
            Denied,
            "Access denied - Cultural authority approval required",
        )],
    }
}
