use crate::constants::{COMMAND_OFFSET, REPORT_SIZE};
use crate::error::DeviceError;
use bytes::Bytes;
use num_enum::{FromPrimitive, IntoPrimitive};
use strum_macros::Display;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Command selector carried in byte 0 of an inbound report while the device
/// is in command mode.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum Command {
    /// `'T'` - flip the output latch and mirror it on the status LED.
    ToggleLed = 0x54,
    /// `'B'` - drive the auxiliary port pin to its asserted level.
    PortCheck = 0x42,
    /// Echo the first ten request bytes back inside a full-size reply.
    Echo = 0x02,
    /// Reserved entry point for the 128-packet device-to-host bulk test.
    /// Present on the wire but not wired up in the command table.
    BulkSendEntry = 0x82,
    /// Reserved entry point for the 127-packet host-to-device bulk test,
    /// disabled like [`Command::BulkSendEntry`].
    BulkReceiveEntry = 0x83,

    #[num_enum(catch_all)]
    Unknown(u8),
}

/// A single fixed-size report exchanged with the host.
///
/// Every transfer in either direction is exactly [`REPORT_SIZE`] bytes; there
/// is no length field and no framing beyond the USB packet boundary.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Report(pub [u8; REPORT_SIZE]);

impl Report {
    /// Create a report with every byte set to `value`.
    pub fn filled(value: u8) -> Self {
        Report([value; REPORT_SIZE])
    }

    /// Create a zeroed report carrying `command` in the selector byte.
    pub fn for_command(command: Command) -> Self {
        let mut report = Report::default();
        report.0[COMMAND_OFFSET] = command.into();
        report
    }

    /// Command selector of this report when interpreted in command mode.
    pub fn command(&self) -> Command {
        Command::from_primitive(self.0[COMMAND_OFFSET])
    }

    /// Overwrite every byte with `value`.
    pub fn fill(&mut self, value: u8) {
        self.0 = [value; REPORT_SIZE];
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Report {
    fn default() -> Self {
        Report([0; REPORT_SIZE])
    }
}

impl TryFrom<&[u8]> for Report {
    type Error = DeviceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Report::read_from_bytes(bytes).map_err(|_| DeviceError::InvalidLength {
            expected: REPORT_SIZE,
            actual: bytes.len(),
        })
    }
}

impl TryFrom<Bytes> for Report {
    type Error = DeviceError;

    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        Report::try_from(bytes.as_ref())
    }
}
