pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::AppConfig;
pub use crate::core::endpoints::{build_endpoint, build_endpoint_json, ApiResource};
pub use crate::core::labels::{label_of, LabelRegistry, LabelTable};
pub use crate::core::packages::remaining_lessons;
pub use crate::core::text::{normalize_string, shorten_name};
pub use crate::domain::model::{LabelDomain, PackageRecord, RemainingLessons};
pub use crate::domain::ports::LabelSource;
pub use crate::utils::error::{PlanningError, Result};
