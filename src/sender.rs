//! Sender pipeline (spec §4.6): chunk a file into K data blocks, plan group
//! parameters, column-wise RS-encode each group, and transmit the whole
//! sequence in strictly increasing block-id order.

use std::num::Wrapping;
use std::time::Duration;

use crate::constants::BLOCK_PAYLOAD;
use crate::error::{FileSourceError, PipelineError, TransportError};
use crate::fec::{FecPacket, FecPacketInfo, FecRatio, FileType, GroupPlan};
use crate::fec::gf::GF;
use crate::fec::rs::RsEncoder;
use crate::logging::{log_info, log_warn};
use crate::source::FileSource;
use crate::transport::RadioTransport;

/// Per-file summary returned after a transmission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmitReport {
    pub image_id: u8,
    pub k_data: u16,
    pub n_total: u16,
    pub file_type: FileType,
    /// Packets dropped after a `wait_ready`/`transmit` timeout (spec §7
    /// error kind 1: "log, skip packet, continue. Not fatal").
    pub packets_skipped: u16,
}

/// Summary of one `run_cycle` pass over a [`FileSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub transmitted: Vec<TransmitReport>,
    pub skipped: Vec<String>,
}

/// Drives the sender pipeline against a [`RadioTransport`].
pub struct Sender<T: RadioTransport> {
    callsign_enc: u32,
    ratio: FecRatio,
    image_id: Wrapping<u8>,
    inter_packet_delay: Duration,
    radio_ready_timeout: Duration,
    file_size_cap: u64,
    transport: T,
}

impl<T: RadioTransport> Sender<T> {
    pub fn new(
        callsign_enc: u32,
        ratio: FecRatio,
        inter_packet_delay: Duration,
        radio_ready_timeout: Duration,
        file_size_cap: u64,
        transport: T,
    ) -> Self {
        Sender {
            callsign_enc,
            ratio,
            image_id: Wrapping(0),
            inter_packet_delay,
            radio_ready_timeout,
            file_size_cap,
            transport,
        }
    }

    /// Access to the underlying transport, chiefly for tests that inspect
    /// what was sent (e.g. against an [`crate::transport::InMemoryTransport`]).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one enumeration pass: pulls every file `source` offers and
    /// transmits it, skipping files that fail to read. The image counter
    /// advances even on a transmit failure (spec: "the image counter still
    /// advances").
    pub async fn run_cycle(&mut self, source: &mut dyn FileSource) -> CycleReport {
        let mut report = CycleReport::default();
        while let Some((name, _size)) = source.next_file() {
            let bytes = match source.read_file(&name, self.file_size_cap) {
                Ok(b) => b,
                Err(FileSourceError::TooLarge { name, size, cap }) => {
                    log_warn(&format!("skipping {name}: {size} bytes exceeds cap {cap}"));
                    report.skipped.push(name);
                    continue;
                }
                Err(FileSourceError::ReadFailed { name, reason }) => {
                    log_warn(&format!("skipping {name}: {reason}"));
                    report.skipped.push(name);
                    continue;
                }
            };

            match self.transmit_file(&bytes).await {
                Ok(t) => report.transmitted.push(t),
                Err(e) => {
                    log_warn(&format!("transmit of {name} abandoned: {e}"));
                    self.image_id += Wrapping(1);
                }
            }
        }
        report
    }

    /// Transmits one file's bytes end to end, returning a summary.
    pub async fn transmit_file(&mut self, bytes: &[u8]) -> Result<TransmitReport, PipelineError> {
        let file_type = FileType::detect(bytes);
        let file_size = bytes.len() as u32;
        let k = (((bytes.len() + BLOCK_PAYLOAD - 1) / BLOCK_PAYLOAD).max(1)) as u32;
        let plan = GroupPlan::compute(k, self.ratio)?;
        let n_total = plan.total_packets(k);

        let image_id = self.image_id.0;
        self.image_id += Wrapping(1);

        let info_for = |block_id: u32| FecPacketInfo {
            callsign_enc: self.callsign_enc,
            image_id,
            block_id: block_id as u16,
            k_data: k as u16,
            n_total: n_total as u16,
            file_size,
            file_type,
            m_per_group: plan.parity_per_group as u8,
            num_groups: plan.num_groups as u8,
        };

        let mut packets_skipped: u16 = 0;

        // Data blocks, in ascending block-id order.
        for i in 0..k {
            let start = (i as usize) * BLOCK_PAYLOAD;
            let mut payload = [0u8; BLOCK_PAYLOAD];
            if start < bytes.len() {
                let end = (start + BLOCK_PAYLOAD).min(bytes.len());
                payload[..end - start].copy_from_slice(&bytes[start..end]);
            }
            if let Err(e) = self.send_packet(&info_for(i), &payload).await {
                log_warn(&format!("block {i} dropped: {e}"));
                packets_skipped += 1;
            }
        }

        // Parity blocks, one RS group at a time, row by row within a group.
        let encoder = RsEncoder::new(plan.parity_per_group as u8, &GF)?;
        for g in 0..plan.num_groups {
            let members = plan.members_of_group(k, g);
            let gk = members.len();
            let pad = (plan.group_size as usize).saturating_sub(gk);

            let mut parity_rows = vec![[0u8; BLOCK_PAYLOAD]; plan.parity_per_group as usize];
            let mut msg = vec![0u8; plan.group_size as usize];
            let mut parity_col = vec![0u8; plan.parity_per_group as usize];

            for c in 0..BLOCK_PAYLOAD {
                for (row, &i) in members.iter().enumerate() {
                    let idx = (i as usize) * BLOCK_PAYLOAD + c;
                    msg[row] = if idx < bytes.len() { bytes[idx] } else { 0 };
                }
                for b in msg[gk..].iter_mut().take(pad) {
                    *b = 0;
                }

                encoder.encode_into(&msg, &GF, &mut parity_col);
                for (p, &byte) in parity_col.iter().enumerate() {
                    parity_rows[p][c] = byte;
                }
            }

            for (p, row) in parity_rows.iter().enumerate() {
                let block_id = k + g * plan.parity_per_group + p as u32;
                if let Err(e) = self.send_packet(&info_for(block_id), row).await {
                    log_warn(&format!("block {block_id} dropped: {e}"));
                    packets_skipped += 1;
                }
            }
        }

        log_info(&format!(
            "image {image_id} sent: K={k} N={n_total} type={file_type:?} skipped={packets_skipped}"
        ));

        Ok(TransmitReport {
            image_id,
            k_data: k as u16,
            n_total: n_total as u16,
            file_type,
            packets_skipped,
        })
    }

    /// Sends one packet: waits for the radio to report ready, then
    /// transmits (spec §4.6 step 5: "Between packets: yield to radio ready
    /// signal"; §5: blocks on readiness and during transport writes, per
    /// packet, not once per file).
    async fn send_packet(
        &mut self,
        info: &FecPacketInfo,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        self.transport
            .wait_ready(self.radio_ready_timeout)
            .await?;
        let packet = FecPacket::build(info, payload);
        self.transport
            .transmit(packet.as_bytes(), self.radio_ready_timeout)
            .await?;
        if !self.inter_packet_delay.is_zero() {
            tokio::time::sleep(self.inter_packet_delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fec::encode_callsign;
    use crate::source::MockFileSource;
    use crate::transport::InMemoryTransport;

    fn small_sender() -> Sender<InMemoryTransport> {
        Sender::new(
            encode_callsign("LORETT"),
            FecRatio::default(),
            Duration::from_millis(0),
            Duration::from_millis(100),
            65536,
            InMemoryTransport::new(),
        )
    }

    #[tokio::test]
    async fn single_byte_file_produces_two_packets() {
        // Scenario 1: K=1, default ratio -> M=1, N=2.
        let mut sender = small_sender();
        let report = sender.transmit_file(&[0xAB]).await.unwrap();
        assert_eq!(report.k_data, 1);
        assert_eq!(report.n_total, 2);
        assert_eq!(sender.transport.sent.len(), 2);

        let data_packet = FecPacket::parse(&sender.transport.sent[0]).unwrap();
        assert_eq!(data_packet.block_id, 0);
        let parity_packet = FecPacket::parse(&sender.transport.sent[1]).unwrap();
        assert_eq!(parity_packet.block_id, 1);
    }

    #[tokio::test]
    async fn image_id_wraps_and_advances_per_file() {
        let mut sender = small_sender();
        let first = sender.transmit_file(&[1]).await.unwrap();
        let second = sender.transmit_file(&[2]).await.unwrap();
        assert_eq!(first.image_id, 0);
        assert_eq!(second.image_id, 1);
    }

    #[tokio::test]
    async fn data_blocks_are_emitted_in_ascending_block_id_order() {
        let mut sender = small_sender();
        let bytes = vec![0x11u8; BLOCK_PAYLOAD * 3 + 10];
        sender.transmit_file(&bytes).await.unwrap();

        let mut last_data_id = None;
        for frame in &sender.transport.sent {
            let info = FecPacket::parse(frame).unwrap();
            if info.block_id < info.k_data {
                if let Some(last) = last_data_id {
                    assert!(info.block_id as i32 > last);
                }
                last_data_id = Some(info.block_id as i32);
            }
        }
        assert_eq!(last_data_id, Some(3));
    }

    #[tokio::test]
    async fn run_cycle_skips_oversized_file_and_advances_through_rest() {
        let mut source = MockFileSource::new(vec![
            ("big.jpg".into(), vec![0u8; 100]),
            ("small.jpg".into(), vec![0xFFu8, 0xD8]),
        ]);
        let mut sender = Sender::new(
            encode_callsign("LORETT"),
            FecRatio::default(),
            Duration::from_millis(0),
            Duration::from_millis(100),
            10,
            InMemoryTransport::new(),
        );
        let report = sender.run_cycle(&mut source).await;
        assert_eq!(report.skipped, vec!["big.jpg".to_string()]);
        assert_eq!(report.transmitted.len(), 1);
        assert_eq!(report.transmitted[0].file_type, FileType::Jpeg);
    }

    #[tokio::test]
    async fn a_dropped_packet_is_skipped_not_fatal_to_the_rest_of_the_file() {
        // Scenario 1 shape (K=1, N=2): the first transmit fails, the
        // second must still go out (spec §7 error kind 1: "log, skip
        // packet, continue. Not fatal").
        let mut sender = Sender::new(
            encode_callsign("LORETT"),
            FecRatio::default(),
            Duration::from_millis(0),
            Duration::from_millis(100),
            65536,
            InMemoryTransport {
                fail_transmits_remaining: 1,
                ..InMemoryTransport::new()
            },
        );
        let report = sender.transmit_file(&[0xAB]).await.unwrap();
        assert_eq!(report.n_total, 2);
        assert_eq!(report.packets_skipped, 1);
        assert_eq!(sender.transport.sent.len(), 1);

        let parity_packet = FecPacket::parse(&sender.transport.sent[0]).unwrap();
        assert_eq!(parity_packet.block_id, 1);
    }
}
