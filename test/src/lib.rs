//! In-memory harnesses for exercising the client runtime end to end
//! without a live engine process: a scripted engine link, a loopback
//! signal channel, and a char-map placement oracle.

pub mod fake_engine;
pub mod harness;
pub mod local_link;
pub mod oracle;

pub use fake_engine::{EngineState, FakeGameLink, SharedEngineState};
pub use harness::{player, unit, CollectingListener, EngineHarness, LocalTransport};
pub use local_link::LocalSignalPair;
pub use oracle::GridOracle;
