use crate::capability_engine::defaults::DEFAULT_TIME_REFERENCES;
use crate::domain::{TimeReference, TimeReferenceRule};
use tracing::trace;

/// The first rule, in declaration order, whose pattern matches `signal_type`.
pub fn matching_rule<'a>(rules: &'a [TimeReferenceRule], signal_type: &str) -> Option<&'a TimeReferenceRule> {
    rules.iter().find(|rule| rule.pattern().matches(signal_type))
}

/// Time references visible for `signal_type`, falling back to both UTC and LOCAL.
pub fn expected_time_refs<'a>(rules: &'a [TimeReferenceRule], signal_type: &str) -> &'a [TimeReference] {
    match matching_rule(rules, signal_type) {
        Some(rule) => {
            trace!(signal_type, pattern = %rule.pattern(), "Matched time reference rule");
            rule.references()
        }
        None => DEFAULT_TIME_REFERENCES,
    }
}
