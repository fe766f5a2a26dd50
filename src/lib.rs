//! # Ivola - Na iVola ni Vanua
//!
//! Cultural access-controlled knowledge retrieval for iTaukei heritage
//! safeguarding. A caller's role decides whether they may query the
//! glossary at all; if they may, the query is matched against an ordered
//! list of cultural terms.
//!
//! ## Core Concepts
//!
//! - **Role**: the caller's declared identity class (educator, elder, youth, researcher)
//! - **Permission**: access decision plus advisory restriction labels
//! - **KnowledgeBase**: ordered terms and explanations with a fallback message
//! - **Resolution**: the outcome of one `ask` call (rejected, denied, or resolved)
//!
//! ## Usage
//!
//! ```
//! use ivola::{ask, Outcome, Resolution, Role};
//!
//! match ask(Role::Elder, "tell me about vanua and tabua") {
//!     Resolution::Resolved(answer) => assert_eq!(answer.matched_term.as_deref(), Some("vanua")),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert_eq!(ask(Role::Researcher, "bula").outcome(), Outcome::PermissionDenied);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core: access control and knowledge retrieval
pub mod access;
pub mod error;
pub mod knowledge;
pub mod resolver;
pub mod role;

// Surrounding platform
#[cfg(feature = "capture")]
pub mod capture;
pub mod config;
pub mod monitor;

// Re-export primary types at crate root for convenience
pub use access::{
    access_notices, permission_for, permission_for_label, AccessNotice, AccessPolicy, NoticeKind,
    Permission, RestrictionTag, StaticAccessPolicy,
};
pub use config::IvolaConfig;
pub use error::{CaptureError, ConfigError, IvolaError, IvolaResult, ValidationError};
pub use knowledge::{KnowledgeBase, KnowledgeBaseBuilder, KnowledgeEntry};
pub use monitor::{AlertStatus, IpAlert, MatchConfidence, MonitorRegistry, Platform, Severity};
pub use resolver::{
    ask, ask_as, Answer, CulturalResolver, Outcome, RejectReason, Resolution,
    ACCESS_DENIED_MESSAGE, EMPTY_QUERY_MESSAGE,
};
pub use role::Role;
