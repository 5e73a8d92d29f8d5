//! Wizard steps in their recommended order.

use serde::{Deserialize, Serialize};

/// The steps of the vendor onboarding wizard.
///
/// Ordered: Profile → Services → Documents → Notifications → Review.
/// The order is a recommendation; any step may be selected directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Profile,
    Services,
    Documents,
    Notifications,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Profile,
        WizardStep::Services,
        WizardStep::Documents,
        WizardStep::Notifications,
        WizardStep::Review,
    ];

    /// Zero-based position in the recommended order.
    pub fn index(&self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Services => 1,
            Self::Documents => 2,
            Self::Notifications => 3,
            Self::Review => 4,
        }
    }

    /// Following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::Profile)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Review)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Profile
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Profile => "profile",
            Self::Services => "services",
            Self::Documents => "documents",
            Self::Notifications => "notifications",
            Self::Review => "review",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let mut current = WizardStep::default();
        let mut seen = vec![current];
        while let Some(next) = current.next() {
            seen.push(next);
            current = next;
        }
        assert_eq!(seen, WizardStep::ALL);
        assert!(current.is_last());
    }

    #[test]
    fn previous_walks_back() {
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Notifications));
        assert_eq!(WizardStep::Services.previous(), Some(WizardStep::Profile));
        assert_eq!(WizardStep::Profile.previous(), None);
    }

    #[test]
    fn order_matches_index() {
        for pair in WizardStep::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].index() + 1, pair[1].index());
        }
    }

    #[test]
    fn display_matches_serde() {
        for step in WizardStep::ALL {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{step}\""), json, "Display and serde should match for {step:?}");
        }
    }
}
