//! IP protection monitor.
//!
//! A fixed registry of suspected misuse of iTaukei designs on marketplaces.

mod alert;
mod registry;

pub use alert::{AlertStatus, IpAlert, MatchConfidence, Platform, Severity};
pub use registry::{MonitorRegistry, PatternCategory};
