//! Sender and receiver configuration: ratios, timeouts, ports, and caps
//! gathered in one place and optionally loaded from a JSON file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FILE_SIZE_CAP, DEFAULT_INTER_PACKET_DELAY_MS, DEFAULT_RADIO_READY_TIMEOUT_MS,
    DEFAULT_RING_CAPACITY,
};
use crate::error::PipelineError;
use crate::fec::FecRatio;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    pub callsign: String,
    pub ratio_num: u32,
    pub ratio_den: u32,
    pub inter_packet_delay_ms: u64,
    pub radio_ready_timeout_ms: u64,
    pub file_size_cap: u64,
    pub serial_port: String,
    pub baud_rate: u32,
}

impl SenderConfig {
    pub fn ratio(&self) -> Result<FecRatio, PipelineError> {
        FecRatio::new(self.ratio_num, self.ratio_den).map_err(PipelineError::from)
    }

    pub fn inter_packet_delay(&self) -> Duration {
        Duration::from_millis(self.inter_packet_delay_ms)
    }

    pub fn radio_ready_timeout(&self) -> Duration {
        Duration::from_millis(self.radio_ready_timeout_ms)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::ConfigMismatch(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| PipelineError::ConfigMismatch(e.to_string()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PipelineError> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::ConfigMismatch(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| PipelineError::ConfigMismatch(e.to_string()))
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        SenderConfig {
            callsign: "N0CALL".to_string(),
            ratio_num: 25,
            ratio_den: 100,
            inter_packet_delay_ms: DEFAULT_INTER_PACKET_DELAY_MS,
            radio_ready_timeout_ms: DEFAULT_RADIO_READY_TIMEOUT_MS,
            file_size_cap: DEFAULT_FILE_SIZE_CAP,
            serial_port: "/dev/ttyUSB0".to_string(),
            baud_rate: 115_200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverConfig {
    pub serial_port: String,
    pub baud_rate: u32,
    pub ring_capacity: usize,
}

impl ReceiverConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::ConfigMismatch(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| PipelineError::ConfigMismatch(e.to_string()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PipelineError> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::ConfigMismatch(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| PipelineError::ConfigMismatch(e.to_string()))
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        ReceiverConfig {
            serial_port: "/dev/ttyUSB1".to_string(),
            baud_rate: 115_200,
            ring_capacity: DEFAULT_RING_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_config_round_trips_through_json() {
        let cfg = SenderConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx.json");
        cfg.save(&path).unwrap();
        let loaded = SenderConfig::load(&path).unwrap();
        assert_eq!(loaded.callsign, cfg.callsign);
        assert_eq!(loaded.ratio_num, cfg.ratio_num);
    }

    #[test]
    fn default_ratio_is_valid() {
        assert!(SenderConfig::default().ratio().is_ok());
    }

    #[test]
    fn receiver_config_round_trips_through_json() {
        let cfg = ReceiverConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rx.json");
        cfg.save(&path).unwrap();
        let loaded = ReceiverConfig::load(&path).unwrap();
        assert_eq!(loaded.ring_capacity, cfg.ring_capacity);
    }
}
