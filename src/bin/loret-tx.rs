//! Sender binary: wires a real serial port and directory file source to the
//! library's [`loret_fec_link::Sender`].

use std::time::Duration;

use clap::Parser;
use loret_fec_link::{encode_callsign, init_logger, log_info, DirFileSource, FecRatio, Sender};
use tokio_serial::SerialPortBuilderExt;

#[derive(Parser, Debug)]
#[command(name = "loret-tx", about = "Transmit files over the LORETT FEC link")]
struct Args {
    /// Serial port the radio is attached to.
    #[arg(long, default_value = "/dev/ttyUSB0")]
    port: String,

    /// Serial baud rate.
    #[arg(long, default_value_t = 115_200)]
    baud: u32,

    /// Station callsign, up to 6 base-40 characters.
    #[arg(long, default_value = "N0CALL")]
    callsign: String,

    /// FEC ratio numerator.
    #[arg(long, default_value_t = 25)]
    ratio_num: u32,

    /// FEC ratio denominator.
    #[arg(long, default_value_t = 100)]
    ratio_den: u32,

    /// Directory to watch for JPEG/WebP files.
    #[arg(long, default_value = ".")]
    dir: String,

    /// Inter-packet delay in milliseconds.
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let port = tokio_serial::new(&args.port, args.baud).open_native_async()?;
    let transport = loret_fec_link::transport::SerialRadio::new(port);

    let ratio = FecRatio::new(args.ratio_num, args.ratio_den)?;
    let mut sender = Sender::new(
        encode_callsign(&args.callsign),
        ratio,
        Duration::from_millis(args.delay_ms),
        Duration::from_secs(2),
        65536,
        transport,
    );

    let mut source = DirFileSource::new(&args.dir);
    let report = sender.run_cycle(&mut source).await;
    log_info(&format!(
        "cycle complete: {} transmitted, {} skipped",
        report.transmitted.len(),
        report.skipped.len()
    ));
    Ok(())
}
