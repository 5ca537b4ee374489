//! The sender's radio transport capability: `wait_ready` and `transmit`,
//! abstracted so the pipeline is testable against an in-memory transport
//! (spec §9 "Polymorphism over radio transports").

use crate::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;

/// Capability set a radio driver exposes to the sender pipeline.
#[async_trait]
pub trait RadioTransport: Send {
    /// Blocks until the radio reports ready, or `timeout` elapses.
    async fn wait_ready(&mut self, timeout: Duration) -> Result<(), TransportError>;

    /// Writes `bytes` to the radio, bounded by `timeout`.
    async fn transmit(&mut self, bytes: &[u8], timeout: Duration) -> Result<(), TransportError>;
}

/// Production transport: a `tokio_serial` port in transparent mode.
///
/// The radio's "ready" signal is modeled as always-true here — on real
/// hardware this would poll the E22-equivalent module's AUX pin; that GPIO
/// bring-up is board glue outside this crate's scope (spec §1) and is left
/// to the embedding application via [`SerialRadio::set_ready_poll`].
pub struct SerialRadio {
    port: tokio_serial::SerialStream,
    ready_poll: Option<Box<dyn FnMut() -> bool + Send>>,
}

impl SerialRadio {
    pub fn new(port: tokio_serial::SerialStream) -> Self {
        SerialRadio {
            port,
            ready_poll: None,
        }
    }

    /// Installs a closure the transport calls to poll the radio's physical
    /// ready line (e.g. an AUX GPIO read). Defaults to always-ready.
    pub fn set_ready_poll(&mut self, poll: impl FnMut() -> bool + Send + 'static) {
        self.ready_poll = Some(Box::new(poll));
    }
}

#[async_trait]
impl RadioTransport for SerialRadio {
    async fn wait_ready(&mut self, wait_timeout: Duration) -> Result<(), TransportError> {
        let deadline = tokio::time::Instant::now() + wait_timeout;
        loop {
            let ready = self.ready_poll.as_mut().map(|f| f()).unwrap_or(true);
            if ready {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(TransportError::Timeout);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    async fn transmit(&mut self, bytes: &[u8], write_timeout: Duration) -> Result<(), TransportError> {
        timeout(write_timeout, self.port.write_all(bytes))
            .await
            .map_err(|_| TransportError::Timeout)?
            .map_err(|e| TransportError::Io(e.to_string()))
    }
}

/// In-memory transport for tests and host-side simulation: records every
/// transmitted packet and can be told to fail `wait_ready` on demand.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    pub sent: Vec<Vec<u8>>,
    pub ready: bool,
    pub fail_transmits_remaining: u32,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        InMemoryTransport {
            sent: Vec::new(),
            ready: true,
            fail_transmits_remaining: 0,
        }
    }
}

#[async_trait]
impl RadioTransport for InMemoryTransport {
    async fn wait_ready(&mut self, _timeout: Duration) -> Result<(), TransportError> {
        if self.ready {
            Ok(())
        } else {
            Err(TransportError::Timeout)
        }
    }

    async fn transmit(&mut self, bytes: &[u8], _timeout: Duration) -> Result<(), TransportError> {
        if self.fail_transmits_remaining > 0 {
            self.fail_transmits_remaining -= 1;
            return Err(TransportError::Io("simulated failure".into()));
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}

/// The receiver's blocking host-forwarding capability: write the 256-byte
/// FEC frame, then the 10-byte telemetry frame (spec §6 "Host channel").
#[async_trait]
pub trait HostChannel: Send {
    async fn send_fec_frame(&mut self, frame: &[u8]) -> Result<(), TransportError>;
    async fn send_telemetry(&mut self, frame: &[u8]) -> Result<(), TransportError>;
}

/// Production host channel: a second `tokio_serial` port to the host PC.
pub struct SerialHostChannel {
    port: tokio_serial::SerialStream,
}

impl SerialHostChannel {
    pub fn new(port: tokio_serial::SerialStream) -> Self {
        SerialHostChannel { port }
    }
}

#[async_trait]
impl HostChannel for SerialHostChannel {
    async fn send_fec_frame(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.port
            .write_all(frame)
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }

    async fn send_telemetry(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.port
            .write_all(frame)
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }
}

/// In-memory host channel for tests: records forwarded frames in order.
#[derive(Debug, Default)]
pub struct InMemoryHostChannel {
    pub fec_frames: Vec<Vec<u8>>,
    pub telemetry_frames: Vec<Vec<u8>>,
}

impl InMemoryHostChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HostChannel for InMemoryHostChannel {
    async fn send_fec_frame(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.fec_frames.push(frame.to_vec());
        Ok(())
    }

    async fn send_telemetry(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.telemetry_frames.push(frame.to_vec());
        Ok(())
    }
}
