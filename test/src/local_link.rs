use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use broodlink_client::{SignalError, SignalLink};
use broodlink_shared::SIGNAL_FRAME_READY;

/// In-memory stand-in for the named-pipe signal channel.
///
/// Two byte queues, one per direction, plus a switch that simulates the
/// engine closing its end. Reads never block: a test scripts every ready
/// sentinel before the exchange that consumes it, and an empty inbound
/// queue reads as the channel having closed.
#[derive(Clone, Default)]
pub struct LocalSignalPair {
    to_client: Arc<Mutex<VecDeque<u8>>>,
    to_engine: Arc<Mutex<VecDeque<u8>>>,
    closed: Arc<AtomicBool>,
}

impl LocalSignalPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// The client half, to hand to a transport.
    pub fn client_link(&self) -> Box<dyn SignalLink> {
        Box::new(ClientHalf {
            inbound: self.to_client.clone(),
            outbound: self.to_engine.clone(),
            closed: self.closed.clone(),
        })
    }

    /// Queues one frame-ready sentinel for the client to consume.
    pub fn push_ready(&self) {
        self.push_byte(SIGNAL_FRAME_READY);
    }

    /// Queues an arbitrary byte, for exercising the unknown-signal path.
    pub fn push_byte(&self, byte: u8) {
        self.to_client.lock().unwrap().push_back(byte);
    }

    /// Every byte the client has written so far, oldest first.
    pub fn sent_by_client(&self) -> Vec<u8> {
        self.to_engine.lock().unwrap().iter().copied().collect()
    }

    /// Simulates the engine process going away; every subsequent read and
    /// write on the client half fails.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

struct ClientHalf {
    inbound: Arc<Mutex<VecDeque<u8>>>,
    outbound: Arc<Mutex<VecDeque<u8>>>,
    closed: Arc<AtomicBool>,
}

impl SignalLink for ClientHalf {
    fn write_signal(&mut self, byte: u8) -> Result<(), SignalError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SignalError::Closed);
        }
        self.outbound.lock().unwrap().push_back(byte);
        Ok(())
    }

    fn read_signal(&mut self) -> Result<u8, SignalError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SignalError::Closed);
        }
        self.inbound
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(SignalError::Closed)
    }
}
