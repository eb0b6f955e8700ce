use crate::domain::{Glyph, Viewport};
use crate::letters::images::ImageLoader;
use crate::letters::KeyOutcome;

use super::step::tick;
use super::LetterfallCore;

/// Decoded `KeyboardEvent.key`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Letter(Glyph),
    Submit,
    Ignored,
}

impl KeyCommand {
    /// Single letters (either case) type; exactly `"Enter"` submits.
    pub fn from_key(key: &str) -> Self {
        if key == "Enter" {
            return KeyCommand::Submit;
        }
        match Glyph::from_key(key) {
            Some(glyph) => KeyCommand::Letter(glyph),
            None => KeyCommand::Ignored,
        }
    }
}

pub(super) fn key_down<L: ImageLoader>(core: &mut LetterfallCore<L>, key: &str, now_ms: f64) -> KeyOutcome {
    // A release that came due before this key lands first.
    tick(core, now_ms);
    match KeyCommand::from_key(key) {
        KeyCommand::Letter(glyph) => core.choreographer.push_letter(&mut stage!(core), glyph),
        KeyCommand::Submit => {
            let now = core.clock_ms;
            core.choreographer.submit(&mut stage!(core), now)
        }
        KeyCommand::Ignored => KeyOutcome::Ignored,
    }
}

pub(super) fn resize<L: ImageLoader>(core: &mut LetterfallCore<L>, width: f32, height: f32) {
    core.viewport = Viewport::new(width, height);
    install_boundaries(core);
}

/// Rebuild the boundary set, then put the ceiling back where the current
/// word needs it (a rebuild always leaves it pass-through).
pub(super) fn install_boundaries<L: ImageLoader>(core: &mut LetterfallCore<L>) {
    core.boundaries.rebuild(&mut core.world, core.viewport, &core.config);
    let open = core.choreographer.wants_open_ceiling();
    core.boundaries.set_ceiling_pass_through(&mut core.world, open);
}
