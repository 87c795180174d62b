pub mod endpoints;
pub mod labels;
pub mod packages;
pub mod schedule;
pub mod text;

pub use crate::domain::model::{LabelDomain, PackageRecord, RemainingLessons};
pub use crate::domain::ports::LabelSource;
pub use crate::utils::error::Result;
