//! End-to-end scenarios tying the sender's transmitted packets to the
//! receiver's resynchroniser, covering the spec's worked examples.

use std::time::Duration;

use loret_fec_link::constants::PKT_SIZE;
use loret_fec_link::{
    encode_callsign, FecPacket, FecRatio, InMemoryHostChannel, InMemoryTransport, Receiver,
    RingBuffer, Resynchroniser, Sender,
};

fn feed_receiver_from_sent_frames(sent: &[Vec<u8>], rssi: u8) -> Vec<FecPacket> {
    let ring = RingBuffer::new(1 << 20).unwrap();
    let mut resync = Resynchroniser::new(ring);
    for frame in sent {
        for &b in frame.iter() {
            assert!(resync.ring_mut().push(b));
        }
        assert!(resync.ring_mut().push(rssi));
    }
    resync
        .poll_all()
        .into_iter()
        .map(|ev| FecPacket(ev.fec_frame))
        .collect()
}

#[tokio::test]
async fn scenario_1_single_byte_file_round_trips_through_resync() {
    let mut sender = Sender::new(
        encode_callsign("LORETT"),
        FecRatio::default(),
        Duration::from_millis(0),
        Duration::from_millis(100),
        65536,
        InMemoryTransport::new(),
    );
    let report = sender.transmit_file(&[0xAB]).await.unwrap();
    assert_eq!(report.n_total, 2);

    let received = feed_receiver_from_sent_frames(&sender.transport().sent, 180);
    assert_eq!(received.len(), 2);
    for packet in &received {
        assert!(packet.crc_ok());
    }
}

#[tokio::test]
async fn scenario_5_boundary_file_splits_into_two_groups_and_all_packets_survive_resync() {
    let mut sender = Sender::new(
        encode_callsign("LORETT"),
        FecRatio::default(),
        Duration::from_millis(0),
        Duration::from_millis(100),
        65536,
        InMemoryTransport::new(),
    );
    // 230 data blocks worth of bytes.
    let bytes = vec![0x5Au8; 200 * 230];
    let report = sender.transmit_file(&bytes).await.unwrap();
    assert_eq!(report.k_data, 230);
    assert_eq!(report.n_total, 230 + 2 * 51);

    let received = feed_receiver_from_sent_frames(&sender.transport().sent, 100);
    assert_eq!(received.len() as u16, report.n_total);

    let mut block_ids: Vec<u16> = received
        .iter()
        .map(|p| FecPacket::parse(p.as_bytes()).unwrap().block_id)
        .collect();
    block_ids.sort_unstable();
    let expected: Vec<u16> = (0..report.n_total).collect();
    assert_eq!(block_ids, expected);
}

#[tokio::test]
async fn scenario_6_corrupted_sync_prefix_is_discarded_and_telemetry_reflects_rssi() {
    let mut receiver = Receiver::new(4096, InMemoryHostChannel::new()).unwrap();

    // A real frame, preceded by a spurious 0x55 0x33 pair the scan must
    // discard one byte at a time.
    let mut stream = vec![0x55u8, 0x33, 0x55, 0x68];
    stream.extend(vec![0u8; PKT_SIZE - 2]);
    stream.push(150); // RSSI byte -> dBm = 150 - 256 = -106

    for &b in &stream {
        receiver.push_byte(b);
    }
    let emitted = receiver.drain_to_host().await.unwrap();
    assert_eq!(emitted, 1);
    assert_eq!(receiver.host().fec_frames.len(), 1);
    assert_eq!(receiver.host().telemetry_frames.len(), 1);

    let telemetry = &receiver.host().telemetry_frames[0];
    let rssi_dbm = i16::from_le_bytes([telemetry[4], telemetry[5]]);
    assert_eq!(rssi_dbm, 150 - 256);
}
