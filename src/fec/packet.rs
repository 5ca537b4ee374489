//! FEC packet layout: a fixed 256-byte frame with big-endian multi-byte
//! fields and a trailing CRC-32.

use crate::constants::{FEC_SYNC_BYTE, FEC_TYPE_BYTE, HEADER_SIZE, PKT_SIZE};
use crate::error::FecError;
use crate::fec::crc::crc32;
use crate::fec::filetype::FileType;

/// Metadata needed to build one FEC packet; every field the receiver-side
/// reassembler needs is carried here (spec §3: "needs no external state").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FecPacketInfo {
    pub callsign_enc: u32,
    pub image_id: u8,
    pub block_id: u16,
    pub k_data: u16,
    pub n_total: u16,
    pub file_size: u32,
    pub file_type: FileType,
    pub m_per_group: u8,
    pub num_groups: u8,
}

/// An immutable, fully-built 256-byte FEC packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FecPacket(pub [u8; PKT_SIZE]);

impl FecPacket {
    /// Assembles a packet from `info` and up to 200 bytes of `payload`.
    /// Shorter payloads are zero-padded; the builder performs no other
    /// validation of `payload`'s length (caller's responsibility, per spec).
    pub fn build(info: &FecPacketInfo, payload: &[u8]) -> FecPacket {
        let mut buf = [0u8; PKT_SIZE];

        buf[0] = FEC_SYNC_BYTE;
        buf[1] = FEC_TYPE_BYTE;
        buf[2..6].copy_from_slice(&info.callsign_enc.to_be_bytes());
        buf[6] = info.image_id;
        buf[7..9].copy_from_slice(&info.block_id.to_be_bytes());
        buf[9..11].copy_from_slice(&info.k_data.to_be_bytes());
        buf[11..13].copy_from_slice(&info.n_total.to_be_bytes());
        buf[13..17].copy_from_slice(&info.file_size.to_be_bytes());
        buf[17] = info.file_type.as_byte();
        buf[18] = info.m_per_group;
        buf[19] = info.num_groups;

        let n = payload.len().min(200);
        buf[HEADER_SIZE..HEADER_SIZE + n].copy_from_slice(&payload[..n]);

        let crc = crc32(&buf[1..220]);
        buf[220..224].copy_from_slice(&crc.to_be_bytes());

        FecPacket(buf)
    }

    /// Parses header fields out of a 256-byte wire frame, without
    /// validating the CRC (see [`Self::crc_ok`]).
    pub fn parse(bytes: &[u8]) -> Result<FecPacketInfo, FecError> {
        if bytes.len() < PKT_SIZE {
            return Err(FecError::PacketTooShort(bytes.len()));
        }
        Ok(FecPacketInfo {
            callsign_enc: u32::from_be_bytes(bytes[2..6].try_into().unwrap()),
            image_id: bytes[6],
            block_id: u16::from_be_bytes(bytes[7..9].try_into().unwrap()),
            k_data: u16::from_be_bytes(bytes[9..11].try_into().unwrap()),
            n_total: u16::from_be_bytes(bytes[11..13].try_into().unwrap()),
            file_size: u32::from_be_bytes(bytes[13..17].try_into().unwrap()),
            file_type: FileType::from_byte(bytes[17]),
            m_per_group: bytes[18],
            num_groups: bytes[19],
        })
    }

    /// The 200-byte payload region.
    pub fn payload(&self) -> &[u8] {
        &self.0[HEADER_SIZE..HEADER_SIZE + 200]
    }

    /// Whether the packet's stored CRC-32 matches a fresh computation over
    /// bytes `[1..220)`. Not called by the receiver's resync scan (which
    /// never validates CRC, per spec); provided for callers that want it.
    pub fn crc_ok(&self) -> bool {
        let stored = u32::from_be_bytes(self.0[220..224].try_into().unwrap());
        crc32(&self.0[1..220]) == stored
    }

    pub fn as_bytes(&self) -> &[u8; PKT_SIZE] {
        &self.0
    }
}

impl std::ops::Deref for FecPacket {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}
