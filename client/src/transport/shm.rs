use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use log::{info, warn};
use memmap2::MmapMut;

use broodlink_shared::{SessionSlot, SessionTable};

use crate::config::ClientConfig;
use crate::connection::ConnectError;
use crate::link::GameLink;
use crate::transport::{RegionMap, SignalError, SignalLink, Transport};

/// A session's game-data region, memory-mapped read/write.
pub struct MappedRegion {
    map: MmapMut,
}

impl MappedRegion {
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        // Exclusive access is the session protocol's job; the map itself
        // is plain shared memory.
        let map = unsafe { MmapMut::map_mut(&file)? };
        Ok(Self { map })
    }
}

impl RegionMap for MappedRegion {
    fn bytes(&self) -> &[u8] {
        &self.map
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.map
    }
}

/// Signal channel over a pair of FIFOs created by the engine, one per
/// direction. A single shared FIFO would let the client read back its own
/// just-written done byte.
///
/// Both ends are opened read+write so the opens themselves never block
/// waiting for the peer; each file is then used in one direction only.
pub struct FifoSignalLink {
    inbound: File,
    outbound: File,
}

impl FifoSignalLink {
    pub fn open(inbound: &Path, outbound: &Path) -> std::io::Result<Self> {
        let inbound = OpenOptions::new().read(true).write(true).open(inbound)?;
        let outbound = OpenOptions::new().read(true).write(true).open(outbound)?;
        Ok(Self { inbound, outbound })
    }
}

impl SignalLink for FifoSignalLink {
    fn write_signal(&mut self, byte: u8) -> Result<(), SignalError> {
        self.outbound.write_all(&[byte])?;
        Ok(())
    }

    fn read_signal(&mut self) -> Result<u8, SignalError> {
        let mut buffer = [0u8; 1];
        let read = self.inbound.read(&mut buffer)?;
        if read == 0 {
            return Err(SignalError::Closed);
        }
        Ok(buffer[0])
    }
}

/// Shared-memory transport: snapshots the discovery table, picks the
/// longest-waiting open session, maps its region and opens its FIFO pair.
///
/// The caller supplies the factory that interprets the opaque region as a
/// [`GameLink`]; this transport never reads into the blob itself.
pub struct ShmTransport<L: GameLink> {
    build_link: Box<dyn Fn(Box<dyn RegionMap>) -> Result<L, ConnectError> + Send>,
}

impl<L: GameLink> ShmTransport<L> {
    pub fn new(
        build_link: Box<dyn Fn(Box<dyn RegionMap>) -> Result<L, ConnectError> + Send>,
    ) -> Self {
        Self { build_link }
    }

    fn snapshot_table(config: &ClientConfig) -> Result<SessionTable, ConnectError> {
        let bytes = std::fs::read(&config.table_path)
            .map_err(|source| ConnectError::TableUnavailable { source })?;
        SessionTable::from_bytes(&bytes).map_err(ConnectError::TableMalformed)
    }
}

impl<L: GameLink> Transport<L> for ShmTransport<L> {
    fn attach(&mut self, config: &ClientConfig) -> Result<(L, Box<dyn SignalLink>), ConnectError> {
        let table = Self::snapshot_table(config)?;
        let index = table.pick_oldest_open().ok_or(ConnectError::NoSession)?;
        let slot: &SessionSlot = table.slot(index).ok_or(ConnectError::NoSession)?;
        info!(
            "Attaching to session slot {} (engine pid {})",
            index, slot.process_id
        );

        let region = MappedRegion::open(&config.region_path(slot.process_id)).map_err(|source| {
            warn!("Session region unavailable: {}", source);
            ConnectError::RegionUnavailable { source }
        })?;
        let signal = FifoSignalLink::open(
            &config.ready_path(slot.process_id),
            &config.done_path(slot.process_id),
        )
        .map_err(|source| {
            warn!("Session signal channel unavailable: {}", source);
            ConnectError::SignalUnavailable { source }
        })?;

        let link = (self.build_link)(Box::new(region))?;
        Ok((link, Box::new(signal)))
    }
}
