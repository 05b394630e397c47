use std::path::PathBuf;
use std::time::Duration;

/// Connection and prediction settings, all with sensible defaults.
///
/// The `{pid}` marker in the path templates is replaced with the selected
/// session's process id at attach time.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Location of the fixed eight-slot discovery table.
    pub table_path: PathBuf,
    /// Template for a session's game-data region file.
    pub region_path_template: String,
    /// Template for the client-to-engine signal FIFO (the done byte).
    pub done_path_template: String,
    /// Template for the engine-to-client signal FIFO (the ready byte).
    pub ready_path_template: String,
    /// Fixed delay between `reconnect` attempts.
    pub reconnect_backoff: Duration,
    /// Whether issued commands are predicted into the speculative cache.
    pub latency_compensation: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from("/dev/shm/broodlink_game_list"),
            region_path_template: "/dev/shm/broodlink_region_{pid}".to_string(),
            done_path_template: "/tmp/broodlink_done_{pid}".to_string(),
            ready_path_template: "/tmp/broodlink_ready_{pid}".to_string(),
            reconnect_backoff: Duration::from_secs(1),
            latency_compensation: true,
        }
    }
}

impl ClientConfig {
    pub fn region_path(&self, process_id: u32) -> PathBuf {
        PathBuf::from(
            self.region_path_template
                .replace("{pid}", &process_id.to_string()),
        )
    }

    pub fn done_path(&self, process_id: u32) -> PathBuf {
        PathBuf::from(
            self.done_path_template
                .replace("{pid}", &process_id.to_string()),
        )
    }

    pub fn ready_path(&self, process_id: u32) -> PathBuf {
        PathBuf::from(
            self.ready_path_template
                .replace("{pid}", &process_id.to_string()),
        )
    }
}
