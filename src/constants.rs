//! Protocol constants for the FEC packet and telemetry frame formats.

/// GF(2^8) primitive polynomial: p(x) = x^8 + x^4 + x^3 + x^2 + 1.
///
/// Compatible with the Python `reedsolo` library defaults
/// (`prim=0x11d, generator=2, c_exp=8`).
pub const GF_PRIM_POLY: u16 = 0x11D;

/// Maximum codeword length in GF(2^8): data + parity symbols per RS group.
pub const RS_MAX: u32 = 255;

/// Maximum parity symbols per RS group.
pub const RS_MAX_PARITY: u8 = 127;

/// Size of one data/parity block (an RS row).
pub const BLOCK_PAYLOAD: usize = 200;

/// Total size of a FEC packet on the wire.
pub const PKT_SIZE: usize = 256;

/// Size of the fixed packet header preceding the payload.
pub const HEADER_SIZE: usize = 20;

/// FEC packet sync byte.
pub const FEC_SYNC_BYTE: u8 = 0x55;

/// FEC packet type byte.
pub const FEC_TYPE_BYTE: u8 = 0x68;

/// Default file-size cap enforced by the sender's file source (64 KiB).
pub const DEFAULT_FILE_SIZE_CAP: u64 = 65536;

/// Default inter-packet delay the sender waits between transmissions.
pub const DEFAULT_INTER_PACKET_DELAY_MS: u64 = 50;

/// Default bound on how long the sender waits for the radio to report ready.
pub const DEFAULT_RADIO_READY_TIMEOUT_MS: u64 = 2000;

/// Default ring buffer capacity on the receiver (must stay a power of two).
pub const DEFAULT_RING_CAPACITY: usize = 1024;

/// Telemetry frame size on the wire.
pub const TELEM_PKT_SIZE: usize = 10;

/// Telemetry sync word, transmitted little-endian as bytes `0x5A, 0xA5`.
pub const TELEM_SYNC: u16 = 0xA55A;

/// Telemetry protocol version byte.
pub const TELEM_PROTO_VER: u8 = 0x01;

/// Telemetry frame type id byte.
pub const TELEM_TYPE_ID: u8 = 0x30;

/// File-type byte values (offset 17 of the FEC packet header).
pub const FTYPE_RAW: u8 = 0x00;
pub const FTYPE_JPEG: u8 = 0x01;
pub const FTYPE_WEBP: u8 = 0x02;

/// Base-40 callsign alphabet, in index order.
pub const CALLSIGN_ALPHABET: &[u8; 40] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-_. ";

/// Number of characters encoded into a callsign word.
pub const CALLSIGN_LEN: usize = 6;
