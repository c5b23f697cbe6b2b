use crate::constants::{ECHO_PREFIX_LEN, ECHO_SENTINEL, ECHO_SENTINEL_OFFSET};
use crate::report::{Command, Report};
use crate::state::TransferState;
use crate::transport::{EndpointTransport, OutputPins};
use tracing::{debug, trace, warn};

/// The per-poll command and bulk-transfer engine.
///
/// One call to [`DispatchEngine::poll`] services at most one received report
/// and one submission. The engine owns the outbound report buffer and
/// rewrites it in place without ever clearing it, which is where the
/// unspecified tail bytes of an echo reply come from: bytes past the echoed
/// prefix keep whatever the previous operation left behind.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    send_buffer: Report,
    led_latch: bool,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the toggle latch mirrored on the status LED.
    ///
    /// The echo command can drive the LED high without going through the
    /// latch, so pin level and latch value are allowed to disagree.
    pub fn led_latch(&self) -> bool {
        self.led_latch
    }

    /// Service the endpoint pair once.
    ///
    /// Invoked once per iteration of the enclosing poll loop, after the USB
    /// stack has had a chance to run its own bus tasks. Never blocks.
    pub fn poll<T, P>(&mut self, state: &mut TransferState, transport: &mut T, pins: &mut P)
    where
        T: EndpointTransport,
        P: OutputPins,
    {
        // Nothing to do until enumeration completes; the LED is held off so
        // the not-ready state is visible.
        if !transport.is_configured() || transport.is_suspended() {
            pins.set_status_led(false);
            return;
        }

        // The OUT endpoint still owns the receive buffer. This is the sole
        // yield point of the engine: everything below retries next cycle.
        if transport.rx_busy() {
            return;
        }

        if state.is_idle() {
            self.dispatch_command(transport, pins);
        } else {
            self.continue_bulk(state, transport, pins);
        }

        // While a bulk send is in flight the receive side stays un-armed, so
        // no new command can arrive before the sequence completes.
        if !state.send_active() {
            transport.arm_receive();
        }
    }

    /// Advance whichever bulk direction is active. Both can make one step of
    /// progress in the same cycle.
    fn continue_bulk<T, P>(&mut self, state: &mut TransferState, transport: &mut T, pins: &mut P)
    where
        T: EndpointTransport,
        P: OutputPins,
    {
        if let Some(sequence) = state.send_counter() {
            if !transport.tx_busy() {
                self.send_buffer.fill(sequence as u8);
                transport.submit(&self.send_buffer);
                trace!(sequence, "submitted bulk packet");
                if state.advance_send() {
                    debug!("bulk send complete");
                    pins.raise_success();
                }
            }
        }

        if let Some(sequence) = state.receive_counter() {
            let received = transport.received();
            let expected = sequence as u8;
            // One mismatching byte fails the whole packet, but the transfer
            // keeps consuming packets until the expected count is reached.
            if received.0.iter().any(|&byte| byte != expected) {
                warn!(sequence, "bulk receive integrity mismatch");
                pins.raise_failure();
            }
            if state.advance_receive() {
                debug!("bulk receive complete");
                pins.raise_success();
            }
        }
    }

    /// Interpret the selector byte of the report sitting in the receive
    /// buffer.
    fn dispatch_command<T, P>(&mut self, transport: &mut T, pins: &mut P)
    where
        T: EndpointTransport,
        P: OutputPins,
    {
        let request = transport.received();
        let command = request.command();
        trace!(%command, "command mode dispatch");

        match command {
            Command::ToggleLed => {
                self.led_latch = !self.led_latch;
                pins.set_status_led(self.led_latch);
            }
            Command::PortCheck => {
                pins.assert_port_pin();
            }
            Command::Echo => {
                if request.0[ECHO_SENTINEL_OFFSET] == ECHO_SENTINEL {
                    pins.set_status_led(true);
                }
                self.send_buffer.0[..ECHO_PREFIX_LEN]
                    .copy_from_slice(&request.0[..ECHO_PREFIX_LEN]);
                // The reply is always a full report; a busy IN endpoint drops
                // it rather than queueing. The original command table falls
                // through to the no-op arm after this, which adds nothing.
                if !transport.tx_busy() {
                    transport.submit(&self.send_buffer);
                }
            }
            // 0x82/0x83 would arm the fixed-count bulk transfers via
            // TransferState::begin_bulk_send / begin_bulk_receive, but the
            // command table leaves them disabled.
            Command::BulkSendEntry | Command::BulkReceiveEntry => {}
            Command::Unknown(selector) => {
                trace!(selector, "unknown command ignored");
            }
        }
    }
}
