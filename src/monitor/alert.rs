//! Alert types for the IP protection monitor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Marketplace or social platform under watch.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Etsy,
    Amazon,
    Instagram,
    Pinterest,
}

impl Platform {
    /// Every monitored platform, in display order.
    pub const ALL: [Self; 4] = [Self::Etsy, Self::Amazon, Self::Instagram, Self::Pinterest];

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Etsy => "Etsy",
            Self::Amazon => "Amazon",
            Self::Instagram => "Instagram",
            Self::Pinterest => "Pinterest",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(label))
            .ok_or_else(|| ValidationError::UnknownPlatform {
                label: s.to_string(),
            })
    }
}

/// Review state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Flagged, awaiting review.
    UnderReview,
    /// Reviewed and confirmed as misuse.
    ViolationConfirmed,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderReview => write!(f, "Under Review"),
            Self::ViolationConfirmed => write!(f, "Violation Confirmed"),
        }
    }
}

/// How closely a listing resembles protected heritage, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchConfidence(pub(super) u8);

impl MatchConfidence {
    /// Confidence above this percentage is [`Severity::High`].
    pub const HIGH_THRESHOLD: u8 = 90;

    /// Creates a confidence in `0..=100`.
    pub fn new(percent: u8) -> Result<Self, ValidationError> {
        if percent > 100 {
            return Err(ValidationError::ConfidenceOutOfRange { value: percent });
        }
        Ok(Self(percent))
    }

    /// The percentage.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Severity band for this confidence.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        if self.0 > Self::HIGH_THRESHOLD {
            Severity::High
        } else {
            Severity::Elevated
        }
    }
}

impl TryFrom<u8> for MatchConfidence {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchConfidence> for u8 {
    fn from(c: MatchConfidence) -> Self {
        c.0
    }
}

impl fmt::Display for MatchConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Severity band derived from match confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Confidence at or below the high threshold.
    Elevated,
    /// Confidence above the high threshold.
    High,
}

/// A suspected misuse of cultural IP on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAlert {
    /// Stable alert number.
    pub id: u32,
    /// Where the listing was found.
    pub platform: Platform,
    /// Listing title.
    pub item: String,
    /// Review state.
    pub status: AlertStatus,
    /// Resemblance to protected heritage.
    pub confidence: MatchConfidence,
    /// Action taken or recommended.
    pub action: String,
}

impl IpAlert {
    /// Severity of this alert.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.confidence.severity()
    }

    /// Returns true if the violation has been confirmed.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == AlertStatus::ViolationConfirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_rejects_over_100() {
        assert_eq!(
            MatchConfidence::new(101).unwrap_err(),
            ValidationError::ConfidenceOutOfRange { value: 101 }
        );
        assert!(MatchConfidence::new(100).is_ok());
        assert!(MatchConfidence::new(0).is_ok());
    }

    #[test]
    fn severity_threshold_is_strictly_above_90() {
        assert_eq!(MatchConfidence::new(90).unwrap().severity(), Severity::Elevated);
        assert_eq!(MatchConfidence::new(91).unwrap().severity(), Severity::High);
    }

    #[test]
    fn confidence_serializes_as_number_and_validates() {
        let c = MatchConfidence::new(87).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "87");
        assert!(serde_json::from_str::<MatchConfidence>("120").is_err());
    }

    #[test]
    fn status_display_matches_labels() {
        assert_eq!(AlertStatus::UnderReview.to_string(), "Under Review");
        assert_eq!(AlertStatus::ViolationConfirmed.to_string(), "Violation Confirmed");
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!(" ETSY ".parse::<Platform>().unwrap(), Platform::Etsy);
        assert_eq!("pinterest".parse::<Platform>().unwrap(), Platform::Pinterest);
        assert_eq!(
            "ebay".parse::<Platform>().unwrap_err(),
            ValidationError::UnknownPlatform {
                label: "ebay".to_string()
            }
        );
    }
}
