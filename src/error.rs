use nusb::transfer::TransferError;
use thiserror::Error;

/// The primary error type for the `generichid-rs` library.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("USB device not found. Is the reference HID device connected?")]
    DeviceNotFound,

    #[error("USB error: {0}")]
    Usb(#[from] nusb::Error),

    #[error("USB transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Timeout during USB operation: {0}")]
    Timeout(#[from] tokio::time::error::Elapsed),

    #[error("Invalid report length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("A bulk transfer is already active")]
    TransferActive,

    #[error("Protocol error: {0}")]
    Protocol(String),
}
