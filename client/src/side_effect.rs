use broodlink_shared::Position;

/// Draw/announce color index into the engine's palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8);

/// A deferred draw directive or chat line, queued locally and flushed to
/// the outbound shared buffer once per frame exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    DrawText { at: Position, text: String },
    DrawLine { from: Position, to: Position, color: Color },
    DrawBox { top_left: Position, bottom_right: Position, color: Color },
    DrawCircle { center: Position, radius: i32, color: Color },
    SendText { text: String },
}

/// Side effects buffered for the next exchange.
#[derive(Default)]
pub struct SideEffectQueue {
    pending: Vec<SideEffect>,
}

impl SideEffectQueue {
    pub fn push(&mut self, effect: SideEffect) {
        self.pending.push(effect);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<SideEffect> {
        std::mem::take(&mut self.pending)
    }
}
