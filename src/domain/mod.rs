mod behavior_data;
mod capabilities;
mod control_descriptor;
mod device_profile;
pub mod gnss_patterns;
mod issue_tag;
pub mod save_controls;
mod series;
mod time_reference;
mod timezone_data;

pub use behavior_data::BehaviorData;
pub use capabilities::Capabilities;
pub use control_descriptor::ControlDescriptor;
pub use device_profile::{DeviceInfo, DeviceProfile, NetworkConfig, PerformanceBaseline};
pub use gnss_patterns::GnssPatterns;
pub use issue_tag::IssueTag;
pub use save_controls::{ControlCategory, SaveControlCatalog, SeriesTwoControls};
pub use series::Series;
pub use time_reference::{TimeReference, TimeReferencePattern, TimeReferenceRule};
pub use timezone_data::TimezoneData;
