pub mod binding;
pub mod config;
pub mod error;
pub mod events;
pub mod source;
pub mod tracker;

pub use binding::NavBinding;
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use events::{ObserverId, ScrollEvents};
pub use source::{ScrollBehavior, ScrollMeasurement, ScrollSource, ScrollTarget};
pub use tracker::ScrollTracker;
