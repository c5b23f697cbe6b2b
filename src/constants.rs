// Protocol constants for the generic HID reference device

/// Size of every report exchanged with the host (64 bytes)
pub const REPORT_SIZE: usize = 64;

/// Offset of the command selector byte in an inbound report
pub const COMMAND_OFFSET: usize = 0;

/// Number of packets in a device-to-host bulk transfer
pub const BULK_SEND_PACKETS: u16 = 128;

/// Number of packets in a host-to-device bulk transfer (one fewer than send)
pub const BULK_RECEIVE_PACKETS: u16 = 127;

/// Offset of the sentinel byte inspected by the echo command
pub const ECHO_SENTINEL_OFFSET: usize = 2;

/// Sentinel value that makes the echo command assert the status LED
pub const ECHO_SENTINEL: u8 = 0x03;

/// Number of request bytes the echo command copies into the reply
pub const ECHO_PREFIX_LEN: usize = 10;

/// Poll cycles the success/failure indicators stay lit once triggered
pub const INDICATOR_HOLD_TICKS: u32 = 20_000;
