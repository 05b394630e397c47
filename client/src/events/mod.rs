mod dispatch;
mod listener;

pub use dispatch::{dispatch_batch, BatchOutcome, FrameTiming};
pub use listener::EventListener;
