use crate::report::Report;

/// Non-blocking view of the single IN/OUT endpoint pair exposed by the USB
/// stack.
///
/// The dispatch engine never waits on any of these calls: a busy endpoint
/// simply means the corresponding action is skipped until the next poll
/// cycle. The receive buffer keeps its last contents until the endpoint is
/// re-armed and a new report lands in it.
pub trait EndpointTransport {
    /// True once enumeration has reached the configured state.
    fn is_configured(&self) -> bool;

    /// True while the bus is suspended.
    fn is_suspended(&self) -> bool;

    /// True while the OUT endpoint is armed and no new report has arrived.
    fn rx_busy(&self) -> bool;

    /// Contents of the receive buffer. Only meaningful when [`Self::rx_busy`]
    /// returns false.
    fn received(&self) -> Report;

    /// True while a previously submitted report is still being transmitted.
    fn tx_busy(&self) -> bool;

    /// Hand a report to the IN endpoint. Callers must check
    /// [`Self::tx_busy`] first.
    fn submit(&mut self, report: &Report);

    /// Make the OUT endpoint ready to accept the next inbound report.
    fn arm_receive(&mut self);
}

/// Output lines driven by the dispatch engine.
///
/// The success/failure lines are fire-and-forget: raising one latches the
/// corresponding indicator and the engine never reads it back.
pub trait OutputPins {
    /// Drive the status LED to the given level.
    fn set_status_led(&mut self, on: bool);

    /// Drive the auxiliary port pin to its asserted level.
    fn assert_port_pin(&mut self);

    /// Latch the success indicator.
    fn raise_success(&mut self);

    /// Latch the failure indicator.
    fn raise_failure(&mut self);
}
