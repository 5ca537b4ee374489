//! Receiver resynchroniser (spec §4.7): a SCAN/EMIT state machine over the
//! byte ring, producing whole FEC frames and their trailing telemetry.

use crate::constants::{FEC_SYNC_BYTE, FEC_TYPE_BYTE, PKT_SIZE};
use crate::fec::{FecPacket, TelemetryFrame};
use crate::logging::log_debug;
use crate::ring::RingBuffer;
use crate::transport::HostChannel;

const FRAME_PLUS_RSSI: usize = PKT_SIZE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scan,
}

/// One emission from the resynchroniser: a raw 256-byte FEC frame paired
/// with the RSSI byte the radio appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEvent {
    pub fec_frame: [u8; PKT_SIZE],
    pub rssi_byte: u8,
}

/// The SCAN/EMIT resynchroniser, owning the ring it scans.
pub struct Resynchroniser {
    ring: RingBuffer,
    state: ScanState,
}

impl Resynchroniser {
    pub fn new(ring: RingBuffer) -> Self {
        Resynchroniser {
            ring,
            state: ScanState::Scan,
        }
    }

    pub fn ring_mut(&mut self) -> &mut RingBuffer {
        &mut self.ring
    }

    /// Runs one step: in SCAN, either discards one byte or transitions to an
    /// emission. Returns `Some(FrameEvent)` exactly when a frame was popped.
    ///
    /// Per spec this never leaves occupancy and state both unchanged: every
    /// call that finds enough bytes either discards one or emits 257.
    pub fn poll(&mut self) -> Option<FrameEvent> {
        debug_assert_eq!(self.state, ScanState::Scan);
        while self.ring.occupancy() >= FRAME_PLUS_RSSI {
            let b0 = self.ring.peek_at(0).unwrap();
            let b1 = self.ring.peek_at(1).unwrap();
            if b0 == FEC_SYNC_BYTE && b1 == FEC_TYPE_BYTE {
                let frame_bytes = self.ring.pop_n(PKT_SIZE);
                let rssi_byte = self.ring.pop_n(1)[0];
                let mut fec_frame = [0u8; PKT_SIZE];
                fec_frame.copy_from_slice(&frame_bytes);
                return Some(FrameEvent {
                    fec_frame,
                    rssi_byte,
                });
            }
            self.ring.discard(1);
        }
        None
    }

    /// Drains every complete frame currently available.
    pub fn poll_all(&mut self) -> Vec<FrameEvent> {
        let mut out = Vec::new();
        while let Some(ev) = self.poll() {
            out.push(ev);
        }
        out
    }
}

/// Ties the resynchroniser to a byte source and a [`HostChannel`], forming
/// the receiver's full pipeline. CRC is never checked here (spec §4.7):
/// corrupted frames are forwarded to the host decoder as-is.
pub struct Receiver<H: HostChannel> {
    resync: Resynchroniser,
    host: H,
}

impl<H: HostChannel> Receiver<H> {
    pub fn new(ring_capacity: usize, host: H) -> Result<Self, crate::error::FecError> {
        Ok(Receiver {
            resync: Resynchroniser::new(RingBuffer::new(ring_capacity)?),
            host,
        })
    }

    /// Pushes one byte arriving from the radio into the ring. Intended to be
    /// called from a tight, non-blocking byte-arrival path (spec §5).
    pub fn push_byte(&mut self, byte: u8) -> bool {
        self.resync.ring_mut().push(byte)
    }

    /// Access to the underlying host channel, chiefly for tests that
    /// inspect what was forwarded (e.g. against an
    /// [`crate::transport::InMemoryHostChannel`]).
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Drains all complete frames, forwarding the FEC frame and its derived
    /// telemetry to the host channel in order.
    pub async fn drain_to_host(&mut self) -> Result<usize, crate::error::TransportError> {
        let events = self.resync.poll_all();
        let count = events.len();
        for ev in events {
            log_debug(&format!("emitting frame, rssi_byte={}", ev.rssi_byte));
            self.host.send_fec_frame(&ev.fec_frame).await?;
            let telemetry = TelemetryFrame::from_rssi_byte(ev.rssi_byte);
            self.host.send_telemetry(&telemetry.to_bytes()).await?;
        }
        Ok(count)
    }
}

/// Convenience: validates a raw frame's CRC (never called by the hot
/// scanning path, which trusts the host decoder to catch false positives).
pub fn frame_crc_ok(frame: &[u8; PKT_SIZE]) -> bool {
    FecPacket(*frame).crc_ok()
}
