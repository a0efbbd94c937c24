//! State management module
//!
//! - Clock: the shared live/committed time
//! - Dataset: normalized battle records
//! - Settings: calendar layout and behavior configuration

mod clock;
mod dataset;
mod settings;

pub use clock::*;
pub use dataset::*;
pub use settings::*;
