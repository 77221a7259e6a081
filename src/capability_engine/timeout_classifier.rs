use crate::capability_engine::defaults::DEFAULT_TIMEOUT_MULTIPLIER;
use crate::domain::IssueTag;

const SLOW_NAVIGATION_KEYWORDS: [&str; 2] = ["timeout", "navigation"];
const INTERFACE_COMPLEXITY_KEYWORDS: [&str; 2] = ["ptp", "multi-interface"];

/// Tags a free-text known issue. Slow navigation wins when an issue mentions both kinds of keyword.
pub fn classify_issue(issue: &str) -> Option<IssueTag> {
    let issue = issue.to_lowercase();

    if SLOW_NAVIGATION_KEYWORDS.iter().any(|keyword| issue.contains(keyword)) {
        Some(IssueTag::SlowNavigation)
    } else if INTERFACE_COMPLEXITY_KEYWORDS.iter().any(|keyword| issue.contains(keyword)) {
        Some(IssueTag::InterfaceComplexity)
    } else {
        None
    }
}

/// Tags of all classifiable issues, in issue order.
pub fn issue_tags(issues: &[String]) -> Vec<IssueTag> {
    issues.iter().filter_map(|issue| classify_issue(issue)).collect()
}

/// The multiplier of the first issue that classifies; later issues are not consulted.
pub fn timeout_multiplier(issues: &[String]) -> f64 {
    issues
        .iter()
        .find_map(|issue| classify_issue(issue))
        .map(|tag| tag.timeout_multiplier())
        .unwrap_or(DEFAULT_TIMEOUT_MULTIPLIER)
}
