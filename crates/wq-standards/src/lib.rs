#![deny(unsafe_code)]

mod registry;

pub use registry::{GuidelineEntry, GuidelineRegistry, guidelines};
