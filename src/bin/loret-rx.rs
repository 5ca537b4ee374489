//! Receiver binary: wires a real serial port as both the byte source and the
//! host channel to the library's [`loret_fec_link::Receiver`].

use clap::Parser;
use loret_fec_link::transport::SerialHostChannel;
use loret_fec_link::{init_logger, log_info, Receiver};
use tokio::io::AsyncReadExt;
use tokio_serial::SerialPortBuilderExt;

#[derive(Parser, Debug)]
#[command(name = "loret-rx", about = "Receive and resynchronise the LORETT FEC link")]
struct Args {
    /// Serial port the radio is attached to.
    #[arg(long, default_value = "/dev/ttyUSB0")]
    port: String,

    /// Serial baud rate.
    #[arg(long, default_value_t = 115_200)]
    baud: u32,

    /// Serial port to forward decoded frames to (the host decoder).
    #[arg(long, default_value = "/dev/ttyUSB1")]
    host_port: String,

    /// Serial baud rate for the host channel.
    #[arg(long, default_value_t = 115_200)]
    host_baud: u32,

    /// Ring buffer capacity; must be a power of two.
    #[arg(long, default_value_t = 1024)]
    ring_capacity: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let mut radio_port = tokio_serial::new(&args.port, args.baud).open_native_async()?;
    let host_port = tokio_serial::new(&args.host_port, args.host_baud).open_native_async()?;
    let host_channel = SerialHostChannel::new(host_port);

    let mut receiver = Receiver::new(args.ring_capacity, host_channel)?;

    let mut byte = [0u8; 1];
    loop {
        let n = radio_port.read(&mut byte).await?;
        if n == 0 {
            continue;
        }
        if !receiver.push_byte(byte[0]) {
            log_info("ring buffer full, dropping incoming byte");
        }
        receiver.drain_to_host().await?;
    }
}
