pub mod error;
pub mod handle;
pub mod platform;

pub use handle::{
    ScheduleCtrl,
    WorkflowCtrl,
};
pub use platform::Platform;


pub(crate) mod chrono {
    pub use ::chrono::*;
    #[cfg(test)]
    pub use test_cms::chrono::Utc;
}
