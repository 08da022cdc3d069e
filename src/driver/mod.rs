//! Session lifecycle: capability assembly, session creation and teardown,
//! and bounded waits against the live session

pub mod capabilities;
pub mod session;
pub mod wait;

pub use session::Session;
pub use wait::WaitPolicy;
