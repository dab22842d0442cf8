mod comparator;

pub use comparator::{
    Assessment, RawSamples, assess, collect_samples, compare_samples, parse_readings,
};
