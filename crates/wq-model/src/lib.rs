pub mod comparison;
pub mod error;
pub mod limit;
pub mod samples;
pub mod source;

pub use comparison::{ComparisonReport, ComparisonRow};
pub use error::{Result, WqError};
pub use limit::{ComplianceStatus, Limit};
pub use samples::ParameterSamples;
pub use source::WaterSource;
