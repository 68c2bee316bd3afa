mod dataset;

pub use dataset::*;
