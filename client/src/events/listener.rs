use broodlink_shared::{PlayerId, Position, UnitId};

use crate::client::GameCtx;

/// Bot-side event capability set.
///
/// Every method has a no-op default; bots override what they care about.
/// Callbacks run synchronously on the frame-cycle thread, exactly once per
/// occurrence and in engine-reported order. A callback that blocks stalls
/// the session, which mirrors the engine's own wait.
#[allow(unused_variables)]
pub trait EventListener {
    fn on_start(&mut self, ctx: &mut GameCtx<'_>) {}

    fn on_frame(&mut self, ctx: &mut GameCtx<'_>) {}

    fn on_end(&mut self, ctx: &mut GameCtx<'_>, winner: bool) {}

    fn on_unit_discover(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_show(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_hide(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_create(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_destroy(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_morph(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_renegade(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_unit_complete(&mut self, ctx: &mut GameCtx<'_>, unit: UnitId) {}

    fn on_send_text(&mut self, ctx: &mut GameCtx<'_>, text: &str) {}

    fn on_receive_text(&mut self, ctx: &mut GameCtx<'_>, player: PlayerId, text: &str) {}

    fn on_player_left(&mut self, ctx: &mut GameCtx<'_>, player: PlayerId) {}

    fn on_player_dropped(&mut self, ctx: &mut GameCtx<'_>, player: PlayerId) {}

    fn on_nuke_detect(&mut self, ctx: &mut GameCtx<'_>, target: Option<Position>) {}

    fn on_save_game(&mut self, ctx: &mut GameCtx<'_>, name: &str) {}
}
