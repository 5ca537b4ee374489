//! Telemetry frame: a 10-byte little-endian out-of-band frame carrying
//! link-quality metrics, emitted alongside each FEC frame.

use crate::constants::{TELEM_PKT_SIZE, TELEM_PROTO_VER, TELEM_SYNC, TELEM_TYPE_ID};
use crate::fec::crc::crc16_ccitt;

/// Link-quality metrics carried in a telemetry frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryFrame {
    pub rssi_dbm: i16,
    pub snr_db: i8,
    pub tx_power: u8,
}

impl TelemetryFrame {
    /// Converts a raw RSSI byte appended by the radio (`dBm = byte - 256`)
    /// into an `rssi_dbm` value, leaving `snr_db`/`tx_power` unset.
    pub fn from_rssi_byte(rssi_byte: u8) -> TelemetryFrame {
        TelemetryFrame {
            rssi_dbm: rssi_byte as i16 - 256,
            snr_db: 0,
            tx_power: 0,
        }
    }

    /// Serializes to the exact 10-byte wire layout.
    pub fn to_bytes(self) -> [u8; TELEM_PKT_SIZE] {
        let mut buf = [0u8; TELEM_PKT_SIZE];
        buf[0..2].copy_from_slice(&TELEM_SYNC.to_le_bytes());
        buf[2] = TELEM_PROTO_VER;
        buf[3] = TELEM_TYPE_ID;
        buf[4..6].copy_from_slice(&self.rssi_dbm.to_le_bytes());
        buf[6] = self.snr_db as u8;
        buf[7] = self.tx_power;

        let crc = crc16_ccitt(&buf[2..8]);
        buf[8..10].copy_from_slice(&crc.to_le_bytes());
        buf
    }
}
