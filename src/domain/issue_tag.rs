use std::fmt::{Display, Formatter};

/// Structured form of a known issue, as far as timeouts are concerned.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum IssueTag {
    /// Unlocking or navigating takes markedly longer than on other devices.
    SlowNavigation,
    /// Collapsed PTP panels or ambiguous per-interface locators.
    InterfaceComplexity,
}

impl IssueTag {
    pub fn timeout_multiplier(&self) -> f64 {
        match self {
            IssueTag::SlowNavigation => 2.0,
            IssueTag::InterfaceComplexity => 1.5,
        }
    }
}

impl Display for IssueTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueTag::SlowNavigation => write!(f, "slow_navigation"),
            IssueTag::InterfaceComplexity => write!(f, "interface_complexity"),
        }
    }
}
