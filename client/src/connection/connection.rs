use std::thread;

use log::{info, warn};

use broodlink_shared::CLIENT_VERSION;

use crate::config::ClientConfig;
use crate::connection::frame_sync::{await_ready, exchange_frame};
use crate::connection::{ConnectError, SyncError};
use crate::link::GameLink;
use crate::transport::{SignalLink, Transport};

/// One attached engine session.
pub struct Session<L: GameLink> {
    pub link: L,
    pub signal: Box<dyn SignalLink>,
}

/// Connection lifecycle against the discovery table: connect, retry with
/// fixed backoff, exchange frames, disconnect.
///
/// Transport faults never escape past this boundary; they become boolean
/// outcomes, retry loops, or a forced disconnect.
pub struct Connection<L: GameLink> {
    config: ClientConfig,
    transport: Box<dyn Transport<L>>,
    session: Option<Session<L>>,
    last_error: Option<ConnectError>,
}

impl<L: GameLink> Connection<L> {
    pub fn new(config: ClientConfig, transport: Box<dyn Transport<L>>) -> Self {
        Self {
            config,
            transport,
            session: None,
            last_error: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session<L>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session<L>> {
        self.session.as_mut()
    }

    /// The error that failed the most recent `connect` attempt.
    pub fn last_error(&self) -> Option<&ConnectError> {
        self.last_error.as_ref()
    }

    /// One connection attempt. Idempotent: returns `true` immediately when
    /// already connected, without reattaching any resources.
    pub fn connect(&mut self) -> bool {
        if self.session.is_some() {
            return true;
        }
        match self.try_connect() {
            Ok(()) => {
                info!("Connected to engine session");
                self.last_error = None;
                true
            }
            Err(error) => {
                warn!("Connection attempt failed: {}", error);
                self.last_error = Some(error);
                false
            }
        }
    }

    /// Retries `connect` with a fixed backoff until it succeeds. Recoverable
    /// failures retry indefinitely (long pre-match waits are expected); a
    /// protocol version mismatch is fatal and returned immediately.
    pub fn reconnect(&mut self) -> Result<(), ConnectError> {
        loop {
            if self.connect() {
                return Ok(());
            }
            if let Some(error) = self.last_error.take() {
                if error.is_fatal() {
                    return Err(error);
                }
            }
            thread::sleep(self.config.reconnect_backoff);
        }
    }

    /// Releases the session. Safe to call repeatedly or when never
    /// connected.
    pub fn disconnect(&mut self) {
        if self.session.take().is_some() {
            info!("Disconnected from engine session");
        }
    }

    /// Drives one blocking request/response cycle: one "done" signal out,
    /// one "ready" sentinel in. An I/O error in either half disconnects;
    /// the caller must `reconnect` before the next exchange.
    pub fn exchange_frame(&mut self) -> Result<(), SyncError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SyncError::NotConnected);
        };
        match exchange_frame(session.signal.as_mut()) {
            Ok(()) => Ok(()),
            Err(error) => {
                warn!("Frame exchange failed, disconnecting: {}", error);
                self.disconnect();
                Err(error)
            }
        }
    }

    fn try_connect(&mut self) -> Result<(), ConnectError> {
        let (link, mut signal) = self.transport.attach(&self.config)?;

        let engine = link.engine_version();
        if engine != CLIENT_VERSION {
            return Err(ConnectError::VersionMismatch {
                engine,
                client: CLIENT_VERSION,
            });
        }

        // The session is live only once the engine reports its first ready
        // frame; a failure here is a failed attempt, not a crash.
        await_ready(signal.as_mut())?;

        self.session = Some(Session { link, signal });
        Ok(())
    }
}
