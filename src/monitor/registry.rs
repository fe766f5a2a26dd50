use serde::{Deserialize, Serialize};

use super::alert::{AlertStatus, IpAlert, MatchConfidence, Platform};

/// A family of heritage designs the monitor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Masi patterns on traditional tapa cloth.
    MasiPatterns,
    /// Weaving designs on traditional textiles.
    WeavingDesigns,
    /// Carving motifs in wood and stone.
    CarvingMotifs,
}

impl PatternCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::MasiPatterns, Self::WeavingDesigns, Self::CarvingMotifs];

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MasiPatterns => "Masi Patterns",
            Self::WeavingDesigns => "Weaving Designs",
            Self::CarvingMotifs => "Carving Motifs",
        }
    }

    /// What the designs appear on.
    #[must_use]
    pub const fn medium(&self) -> &'static str {
        match self {
            Self::MasiPatterns => "Traditional Tapa Cloth",
            Self::WeavingDesigns => "Traditional Textiles",
            Self::CarvingMotifs => "Wood & Stone Work",
        }
    }
}

/// Read-only registry of infringement alerts.
///
/// No detection runs here; the registry only holds and filters records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitorRegistry {
    alerts: Vec<IpAlert>,
}

impl MonitorRegistry {
    /// Registry over an explicit set of alerts, kept in the given order.
    #[must_use]
    pub fn new(alerts: Vec<IpAlert>) -> Self {
        Self { alerts }
    }

    /// The two standing alerts: the Etsy tapa listing and the Amazon pattern.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            IpAlert {
                id: 1,
                platform: Platform::Etsy,
                item: "Fiji Tapa Cloth Design".to_string(),
                status: AlertStatus::UnderReview,
                confidence: MatchConfidence(87),
                action: "Takedown Notice Sent".to_string(),
            },
            IpAlert {
                id: 2,
                platform: Platform::Amazon,
                item: "Traditional Fijian Pattern".to_string(),
                status: AlertStatus::ViolationConfirmed,
                confidence: MatchConfidence(94),
                action: "Legal Action Recommended".to_string(),
            },
        ])
    }

    /// All alerts in registry order.
    #[must_use]
    pub fn alerts(&self) -> &[IpAlert] {
        &self.alerts
    }

    /// Alert with this id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&IpAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Alerts found on `platform`.
    pub fn by_platform(&self, platform: Platform) -> impl Iterator<Item = &IpAlert> + '_ {
        self.alerts.iter().filter(move |a| a.platform == platform)
    }

    /// Alerts in `status`.
    pub fn by_status(&self, status: AlertStatus) -> impl Iterator<Item = &IpAlert> + '_ {
        self.alerts.iter().filter(move |a| a.status == status)
    }

    /// Alerts whose violation has been confirmed.
    pub fn confirmed_violations(&self) -> impl Iterator<Item = &IpAlert> + '_ {
        self.by_status(AlertStatus::ViolationConfirmed)
    }

    /// Platforms under watch.
    #[must_use]
    pub const fn monitored_platforms(&self) -> &'static [Platform] {
        &Platform::ALL
    }

    /// Design families the monitor recognizes.
    #[must_use]
    pub const fn pattern_categories(&self) -> &'static [PatternCategory] {
        &PatternCategory::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Severity;

    #[test]
    fn seeded_alerts_in_order() {
        let registry = MonitorRegistry::seeded();
        let ids: Vec<u32> = registry.alerts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let etsy = registry.get(1).unwrap();
        assert_eq!(etsy.platform, Platform::Etsy);
        assert_eq!(etsy.confidence.percent(), 87);
        assert_eq!(etsy.severity(), Severity::Elevated);

        let amazon = registry.get(2).unwrap();
        assert_eq!(amazon.action, "Legal Action Recommended");
        assert_eq!(amazon.severity(), Severity::High);
    }

    #[test]
    fn filters() {
        let registry = MonitorRegistry::seeded();
        assert_eq!(registry.by_platform(Platform::Etsy).count(), 1);
        assert_eq!(registry.by_platform(Platform::Pinterest).count(), 0);
        let confirmed: Vec<_> = registry.confirmed_violations().map(|a| a.id).collect();
        assert_eq!(confirmed, vec![2]);
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn watches_four_platforms_and_three_categories() {
        let registry = MonitorRegistry::default();
        assert_eq!(registry.monitored_platforms().len(), 4);
        assert_eq!(
            registry
                .pattern_categories()
                .iter()
                .map(PatternCategory::medium)
                .collect::<Vec<_>>(),
            vec!["Traditional Tapa Cloth", "Traditional Textiles", "Wood & Stone Work"]
        );
    }
}
