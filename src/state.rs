use crate::error::DeviceError;

/// Progress of one direction of a bulk transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progress {
    counter: u16,
    expected: u16,
}

/// Tracks whether the device is in command mode or inside a bounded bulk
/// transfer.
///
/// The send and receive directions progress independently once armed, so each
/// direction carries its own counter; the device accepts commands only while
/// neither is active. Counters are private and only move through the
/// `advance_*` operations, one step per poll cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferState {
    send: Option<Progress>,
    receive: Option<Progress>,
}

impl TransferState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither direction has a bulk transfer in flight.
    pub fn is_idle(&self) -> bool {
        self.send.is_none() && self.receive.is_none()
    }

    pub fn send_active(&self) -> bool {
        self.send.is_some()
    }

    pub fn receive_active(&self) -> bool {
        self.receive.is_some()
    }

    /// 0-based sequence number of the next packet to submit, if sending.
    pub fn send_counter(&self) -> Option<u16> {
        self.send.map(|progress| progress.counter)
    }

    /// 0-based sequence number of the next packet to validate, if receiving.
    pub fn receive_counter(&self) -> Option<u16> {
        self.receive.map(|progress| progress.counter)
    }

    /// Arm a device-to-host bulk transfer of `expected` packets.
    ///
    /// Only valid in command mode; starting a transfer while another is in
    /// flight is protocol misuse and leaves the state untouched.
    pub fn begin_bulk_send(&mut self, expected: u16) -> Result<(), DeviceError> {
        if !self.is_idle() {
            return Err(DeviceError::TransferActive);
        }
        if expected == 0 {
            return Err(DeviceError::Protocol(
                "bulk transfer needs at least one packet".to_string(),
            ));
        }
        self.send = Some(Progress {
            counter: 0,
            expected,
        });
        Ok(())
    }

    /// Arm a host-to-device bulk transfer of `expected` packets.
    pub fn begin_bulk_receive(&mut self, expected: u16) -> Result<(), DeviceError> {
        if !self.is_idle() {
            return Err(DeviceError::TransferActive);
        }
        if expected == 0 {
            return Err(DeviceError::Protocol(
                "bulk transfer needs at least one packet".to_string(),
            ));
        }
        self.receive = Some(Progress {
            counter: 0,
            expected,
        });
        Ok(())
    }

    /// Count one submitted packet. Returns true when the send sequence just
    /// completed, resetting that direction to idle.
    pub fn advance_send(&mut self) -> bool {
        let Some(progress) = self.send.as_mut() else {
            return false;
        };
        progress.counter += 1;
        if progress.counter == progress.expected {
            self.send = None;
            true
        } else {
            false
        }
    }

    /// Count one validated packet. Returns true when the receive sequence just
    /// completed, resetting that direction to idle.
    pub fn advance_receive(&mut self) -> bool {
        let Some(progress) = self.receive.as_mut() else {
            return false;
        };
        progress.counter += 1;
        if progress.counter == progress.expected {
            self.receive = None;
            true
        } else {
            false
        }
    }
}
