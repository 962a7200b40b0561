pub mod ac;
pub mod content;
pub mod error;
pub mod schedule;
pub mod workflow;
