//! Tests for report parsing and the command selector mapping

mod common;

use common::*;

#[test]
fn test_command_selector_mapping() {
    assert_eq!(Command::from_primitive(0x54), Command::ToggleLed);
    assert_eq!(Command::from_primitive(b'T'), Command::ToggleLed);
    assert_eq!(Command::from_primitive(b'B'), Command::PortCheck);
    assert_eq!(Command::from_primitive(0x02), Command::Echo);
    assert_eq!(Command::from_primitive(0x82), Command::BulkSendEntry);
    assert_eq!(Command::from_primitive(0x83), Command::BulkReceiveEntry);
    assert_eq!(Command::from_primitive(0xFF), Command::Unknown(0xFF));
    assert_eq!(Command::from_primitive(0x00), Command::Unknown(0x00));
}

#[test]
fn test_command_selector_roundtrip() {
    let selectors = [0x54u8, 0x42, 0x02, 0x82, 0x83, 0x99];
    for selector in selectors {
        let value: u8 = Command::from_primitive(selector).into();
        assert_eq!(value, selector);
    }
}

#[test]
fn test_report_parses_from_exact_64_bytes() {
    let hex_data = "54000000000000000000000000000000\
                    00000000000000000000000000000000\
                    00000000000000000000000000000000\
                    00000000000000000000000000000000";
    let bytes = Bytes::from(hex::decode(hex_data).expect("Failed to decode hex"));

    let report = Report::try_from(bytes).expect("Failed to parse report");
    assert_eq!(report.command(), Command::ToggleLed);
    assert_eq!(report.as_slice().len(), REPORT_SIZE);
}

#[test]
fn test_report_rejects_wrong_lengths() {
    for len in [0usize, 1, 63, 65, 128] {
        let bytes = Bytes::from(vec![0u8; len]);
        match Report::try_from(bytes) {
            Err(DeviceError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, REPORT_SIZE);
                assert_eq!(actual, len);
            }
            Ok(_) => panic!("{len} byte report should not parse"),
            Err(other) => panic!("Expected InvalidLength error, got: {other:?}"),
        }
    }
}

#[test]
fn test_report_fill_and_for_command() {
    let mut report = Report::for_command(Command::Echo);
    assert_eq!(report.0[0], 0x02);
    assert!(report.0[1..].iter().all(|&byte| byte == 0));

    report.fill(0xA7);
    assert_eq!(report, Report::filled(0xA7));
    assert_eq!(report.command(), Command::Unknown(0xA7));
}
