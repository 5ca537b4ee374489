//! Forward error correction: GF(2^8) arithmetic, the Reed-Solomon encoder,
//! CRC checksums, the FEC packet/telemetry frame layouts, the callsign
//! codec, file-type detection, and the group-parameter planner.
//!
//! These are the byte-exact, symmetric pieces shared between sender and
//! receiver.

pub mod callsign;
pub mod crc;
pub mod filetype;
pub mod gf;
pub mod group_plan;
pub mod packet;
pub mod rs;
pub mod telemetry;

pub use callsign::{callsign_to_string, decode_callsign, encode_callsign};
pub use crc::{crc16_ccitt, crc32};
pub use filetype::FileType;
pub use gf::{GfTable, GF};
pub use group_plan::{FecRatio, GroupPlan};
pub use packet::{FecPacket, FecPacketInfo};
pub use rs::RsEncoder;
pub use telemetry::TelemetryFrame;
