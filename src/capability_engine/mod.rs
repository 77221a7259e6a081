pub mod defaults;
mod gnss;
mod path_resolver;
mod save_control_resolver;
mod sections;
mod time_reference_matcher;
mod timeout_classifier;

pub use gnss::{default_gnss_patterns, derive_gnss_patterns};
pub use path_resolver::resolve_path;
pub use save_control_resolver::resolve_save_control;
pub use sections::available_sections;
pub use time_reference_matcher::{expected_time_refs, matching_rule};
pub use timeout_classifier::{classify_issue, issue_tags, timeout_multiplier};
