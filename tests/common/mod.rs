//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#![allow(dead_code)]
#[allow(unused_imports)]
pub use bytes::Bytes;
#[allow(unused_imports)]
pub use generichid_rs::constants::*;
#[allow(unused_imports)]
pub use generichid_rs::dispatch::DispatchEngine;
#[allow(unused_imports)]
pub use generichid_rs::error::DeviceError;
#[allow(unused_imports)]
pub use generichid_rs::indicator::Indicator;
#[allow(unused_imports)]
pub use generichid_rs::report::{Command, Report};
#[allow(unused_imports)]
pub use generichid_rs::state::TransferState;
#[allow(unused_imports)]
pub use generichid_rs::transport::{EndpointTransport, OutputPins};
#[allow(unused_imports)]
pub use num_enum::FromPrimitive;

use std::collections::VecDeque;

/// Scripted endpoint pair standing in for the USB stack.
///
/// `deliver` places a report in the receive buffer as if the host had just
/// written it; `queue` stages reports that become visible one at a time as
/// the engine re-arms the OUT endpoint.
#[derive(Debug)]
pub struct MockTransport {
    pub configured: bool,
    pub suspended: bool,
    pub rx_busy: bool,
    pub tx_busy: bool,
    pub receive_buffer: Report,
    pub pending: VecDeque<Report>,
    pub submitted: Vec<Report>,
    pub rearm_count: usize,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            configured: true,
            suspended: false,
            rx_busy: true,
            tx_busy: false,
            receive_buffer: Report::default(),
            pending: VecDeque::new(),
            submitted: Vec::new(),
            rearm_count: 0,
        }
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the OUT endpoint with the given report.
    pub fn deliver(&mut self, report: Report) {
        self.receive_buffer = report;
        self.rx_busy = false;
    }

    /// Stage a report that arrives on the next re-arm.
    pub fn queue(&mut self, report: Report) {
        self.pending.push_back(report);
    }
}

impl EndpointTransport for MockTransport {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn rx_busy(&self) -> bool {
        self.rx_busy
    }

    fn received(&self) -> Report {
        self.receive_buffer
    }

    fn tx_busy(&self) -> bool {
        self.tx_busy
    }

    fn submit(&mut self, report: &Report) {
        self.submitted.push(*report);
    }

    fn arm_receive(&mut self) {
        self.rearm_count += 1;
        match self.pending.pop_front() {
            Some(report) => {
                self.receive_buffer = report;
                self.rx_busy = false;
            }
            None => {
                self.rx_busy = true;
            }
        }
    }
}

/// Records every output line the dispatch engine drives.
#[derive(Debug, Default)]
pub struct MockPins {
    /// Last level driven on the status LED, if any.
    pub status_led: Option<bool>,
    pub port_pin_asserts: usize,
    pub success_signals: usize,
    pub failure_signals: usize,
}

impl MockPins {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPins for MockPins {
    fn set_status_led(&mut self, on: bool) {
        self.status_led = Some(on);
    }

    fn assert_port_pin(&mut self) {
        self.port_pin_asserts += 1;
    }

    fn raise_success(&mut self) {
        self.success_signals += 1;
    }

    fn raise_failure(&mut self) {
        self.failure_signals += 1;
    }
}

/// A zeroed report carrying `selector` in the command byte.
#[allow(dead_code)]
pub fn command_report(selector: u8) -> Report {
    let mut report = Report::default();
    report.0[0] = selector;
    report
}
