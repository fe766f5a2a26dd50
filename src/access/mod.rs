//! Cultural access control.
//!
//! Maps a [`Role`](crate::Role) to a [`Permission`]. Access is gated solely on
//! [`Permission::can_access`]; restriction tags are advisory labels surfaced to
//! the shell and are not checked against query content.

mod notice;
mod permission;
mod policy;

pub use notice::{access_notices, AccessNotice, NoticeKind};
pub use permission::{Permission, RestrictionTag};
pub use policy::{permission_for, permission_for_label, AccessPolicy, StaticAccessPolicy};
