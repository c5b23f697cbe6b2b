use generichid_rs::constants::ECHO_SENTINEL;
use generichid_rs::host::HostDevice;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Connect to the device
    let mut device = HostDevice::new().await?;
    println!("Connected to the reference HID device");

    // Flip the output latch twice so the LED ends where it started
    println!("Toggling the status LED...");
    device.toggle_led().await?;
    device.toggle_led().await?;

    // Drive the auxiliary port pin
    println!("Asserting the port pin...");
    device.assert_port_pin().await?;

    // Echo with the LED sentinel in byte 2
    println!("Running the echo command...");
    let payload = [0x00, ECHO_SENTINEL, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
    let reply = device.echo(&payload).await?;
    println!("Echo reply prefix: {:02x?}", &reply.as_slice()[..10]);

    Ok(())
}
