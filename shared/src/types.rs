pub type Frame = u32;
pub type UnitId = u16;
pub type PlayerId = u8;
pub type SlotIndex = usize;
