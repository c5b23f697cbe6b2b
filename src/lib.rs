pub mod constants;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod indicator;
pub mod report;
pub mod state;
pub mod transport;

// Re-export the core engine types for easy access
pub use dispatch::DispatchEngine;
pub use report::{Command, Report};
pub use state::TransferState;
