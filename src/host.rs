use crate::constants::{ECHO_PREFIX_LEN, REPORT_SIZE};
use crate::error::DeviceError;
use crate::report::{Command, Report};
use bytes::Bytes;
use nusb::{Interface, transfer::RequestBuffer};
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;
use zerocopy::IntoBytes;

// Constants for USB device identification (Microchip generic HID demo IDs)
pub const VID: u16 = 0x04D8;
pub const PID: u16 = 0x003F;
pub const ENDPOINT_OUT: u8 = 0x01;
pub const ENDPOINT_IN: u8 = 0x81;

// Default timeout for USB operations
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Host-side driver for the reference HID device.
///
/// Speaks the same 64-byte report protocol the [`crate::DispatchEngine`]
/// implements on the device side, over the interrupt endpoint pair.
pub struct HostDevice {
    interface: Interface,
}

impl HostDevice {
    /// Create a new HostDevice instance by finding and connecting to the device
    pub async fn new() -> Result<Self, DeviceError> {
        info!("Searching for the reference HID device...");
        let device_info = nusb::list_devices()?
            .find(|d| d.vendor_id() == VID && d.product_id() == PID)
            .ok_or(DeviceError::DeviceNotFound)?;

        info!(
            "Found device on bus {} addr {}",
            device_info.bus_number(),
            device_info.device_address()
        );

        let device = device_info.open()?;
        let interface = device.detach_and_claim_interface(0)?;
        info!("Interface claimed successfully.");

        Ok(Self { interface })
    }

    /// Send one full-size report to the device
    pub async fn write_report(&mut self, report: &Report) -> Result<(), DeviceError> {
        let transfer_future = self
            .interface
            .interrupt_out(ENDPOINT_OUT, report.as_bytes().to_vec());

        let completion = timeout(DEFAULT_TIMEOUT, transfer_future).await?;
        let sent = completion.into_result()?;

        info!("Sent {} bytes", sent.actual_length());
        Ok(())
    }

    /// Receive one full-size report from the device
    pub async fn read_report(&mut self) -> Result<Report, DeviceError> {
        let buffer = RequestBuffer::new(REPORT_SIZE);
        let transfer_future = self.interface.interrupt_in(ENDPOINT_IN, buffer);

        let completion = timeout(DEFAULT_TIMEOUT, transfer_future).await?;
        let response = completion.into_result()?;

        info!("Received {} bytes", response.len());
        Report::try_from(Bytes::copy_from_slice(&response))
    }

    /// Flip the device's output latch and its status LED
    pub async fn toggle_led(&mut self) -> Result<(), DeviceError> {
        self.write_report(&Report::for_command(Command::ToggleLed))
            .await
    }

    /// Drive the device's auxiliary port pin to its asserted level
    pub async fn assert_port_pin(&mut self) -> Result<(), DeviceError> {
        self.write_report(&Report::for_command(Command::PortCheck))
            .await
    }

    /// Run the echo command and return the full 64-byte reply.
    ///
    /// `data` fills request bytes 1..10; only the first ten reply bytes are
    /// specified, the tail is leftover device buffer content.
    pub async fn echo(&mut self, data: &[u8]) -> Result<Report, DeviceError> {
        if data.len() > ECHO_PREFIX_LEN - 1 {
            return Err(DeviceError::Protocol(format!(
                "echo payload is limited to {} bytes",
                ECHO_PREFIX_LEN - 1
            )));
        }

        let mut request = Report::for_command(Command::Echo);
        request.0[1..1 + data.len()].copy_from_slice(data);

        self.write_report(&request).await?;
        self.read_report().await
    }
}
