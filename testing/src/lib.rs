#[cfg(feature = "chrono")]
pub mod chrono;
#[cfg(feature = "core")]
pub mod core;

mod utils;
pub use utils::*;
