//! # loret-fec-link
//!
//! Reed-Solomon forward error correction framing and coding for a one-way
//! radio image-telemetry link. A sender splits a file into fixed-size data
//! blocks, plans RS group parameters from a target parity ratio, column-wise
//! encodes parity across each group, and frames every block into a fixed
//! 256-byte packet for transmission. A receiver resynchronises on the
//! packet sync bytes within a continuous byte stream and emits whole FEC
//! frames plus a derived link-quality telemetry frame.
//!
//! No RS decoder, retransmission, or encryption lives in this crate — those
//! responsibilities sit with the host-side decoder and the radio link
//! itself (see `DESIGN.md`).
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! loret-fec-link = "0.1.0"
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod fec;
pub mod logging;
pub mod receiver;
pub mod ring;
pub mod sender;
pub mod source;
pub mod transport;

pub use config::{ReceiverConfig, SenderConfig};
pub use error::{FecError, FileSourceError, PipelineError, TransportError};
pub use logging::{init_logger, log_info};
pub use receiver::{FrameEvent, Receiver, Resynchroniser};
pub use ring::RingBuffer;
pub use sender::{CycleReport, Sender, TransmitReport};
pub use source::{DirFileSource, FileSource, MockFileSource};
pub use transport::{HostChannel, InMemoryHostChannel, InMemoryTransport, RadioTransport};

pub use fec::{
    callsign_to_string, crc16_ccitt, crc32, decode_callsign, encode_callsign, FecPacket,
    FecPacketInfo, FecRatio, FileType, GfTable, GroupPlan, RsEncoder, TelemetryFrame, GF,
};
