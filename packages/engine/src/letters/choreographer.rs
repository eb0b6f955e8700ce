//! Word Choreographer
//!
//! Lifecycle of one word:
//!
//! ```text
//! Idle --letter--> Collecting --submit--> Holding --hold elapsed--> Releasing --> Idle
//! ```
//!
//! Submitting schedules a one-shot release task keyed by the word's id. Tasks
//! are never cancelled. If a letter is typed while a word is still holding,
//! that word is detached (its task keeps its own bodies) and a new word starts
//! collecting, so overlapping words never share state.

use serde::Serialize;

use crate::domain::Glyph;
use crate::rigid_body::{BodyId, Vec2};

use super::images::ImageLoader;
use super::spawner::spawn_letter;
use super::{uniform, Stage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WordId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordState {
    Idle,
    Collecting,
    Holding,
    Releasing,
}

impl WordState {
    pub fn as_str(self) -> &'static str {
        match self {
            WordState::Idle => "idle",
            WordState::Collecting => "collecting",
            WordState::Holding => "holding",
            WordState::Releasing => "releasing",
        }
    }
}

/// What a keystroke did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Spawned(BodyId),
    Submitted(WordId),
    Ignored,
}

#[derive(Clone, Debug)]
struct PendingRelease {
    word: WordId,
    due_ms: f64,
    letters: Vec<BodyId>,
}

pub struct WordChoreographer {
    buffer: String,
    /// One body per buffered character, same order
    letters: Vec<BodyId>,
    state: WordState,
    current: WordId,
    next_word: u64,
    pending: Vec<PendingRelease>,
}

impl WordChoreographer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            letters: Vec::new(),
            state: WordState::Idle,
            current: WordId(0),
            next_word: 1,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> WordState {
        self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn letters(&self) -> &[BodyId] {
        &self.letters
    }

    pub fn current_word(&self) -> WordId {
        self.current
    }

    pub fn pending_releases(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the earliest scheduled release, if any.
    pub fn next_release_ms(&self) -> Option<f64> {
        self.pending.iter().map(|p| p.due_ms).reduce(f64::min)
    }

    /// Ceiling must let letters in while a word is being typed or held.
    pub fn wants_open_ceiling(&self) -> bool {
        matches!(self.state, WordState::Collecting | WordState::Holding)
    }

    /// Append a letter and drop its body, up to the maximum word length.
    pub fn push_letter<L: ImageLoader>(&mut self, stage: &mut Stage<'_, L>, glyph: Glyph) -> KeyOutcome {
        if self.state == WordState::Holding {
            self.detach_held();
        }

        if self.buffer.is_empty() {
            stage.boundaries.set_ceiling_pass_through(stage.world, true);
            if self.state == WordState::Idle {
                self.current = WordId(self.next_word);
                self.next_word += 1;
                self.state = WordState::Collecting;
            }
        }

        if self.letters.len() >= stage.config.max_word_len {
            return KeyOutcome::Ignored;
        }

        let id = spawn_letter(stage, glyph);
        self.buffer.push(glyph.as_char());
        self.letters.push(id);
        debug_assert_eq!(self.buffer.len(), self.letters.len());
        KeyOutcome::Spawned(id)
    }

    /// Freeze the collected letters into a centered row and schedule their release.
    pub fn submit<L: ImageLoader>(&mut self, stage: &mut Stage<'_, L>, now_ms: f64) -> KeyOutcome {
        if self.state != WordState::Collecting || self.letters.is_empty() {
            return KeyOutcome::Ignored;
        }

        align_row(stage, &self.letters);
        self.state = WordState::Holding;

        let due_ms = now_ms + stage.config.hold_ms;
        self.pending.push(PendingRelease {
            word: self.current,
            due_ms,
            letters: self.letters.clone(),
        });

        log_info!("word {:?} \"{}\" held until {:.0}ms", self.current, self.buffer, due_ms);
        KeyOutcome::Submitted(self.current)
    }

    /// Fire every release task due at `now_ms`, in scheduling order.
    pub fn release_due<L: ImageLoader>(&mut self, stage: &mut Stage<'_, L>, now_ms: f64) -> Vec<WordId> {
        let mut released = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms > now_ms {
                i += 1;
                continue;
            }
            let task = self.pending.remove(i);
            released.push(task.word);
            self.release(stage, task);
        }
        released
    }

    fn release<L: ImageLoader>(&mut self, stage: &mut Stage<'_, L>, task: PendingRelease) {
        let owns_buffer = task.word == self.current && self.state == WordState::Holding;
        if owns_buffer {
            self.state = WordState::Releasing;
        }
        stage.boundaries.set_ceiling_pass_through(stage.world, self.wants_open_ceiling());

        let force = stage.config.release_force;
        for id in task.letters.iter() {
            let Some(body) = stage.world.get_mut(*id) else {
                continue;
            };
            body.set_static(false);
            body.friction_air = 0.0;
            body.plugin.anti_gravity = true;
            // Biased upward: y lands in [-0.8, 0.2) x force, and -y is up.
            let fx = uniform(&mut *stage.rng, -0.5 * force, 0.5 * force);
            let fy = uniform(&mut *stage.rng, -0.8 * force, 0.2 * force);
            body.apply_force(Vec2::new(fx, fy));
        }

        if owns_buffer {
            self.buffer.clear();
            self.letters.clear();
            self.state = WordState::Idle;
        }
        log_info!("word {:?} released ({} letters)", task.word, task.letters.len());
    }

    /// Let the held word finish on its own task and free the buffer.
    fn detach_held(&mut self) {
        self.buffer.clear();
        self.letters.clear();
        self.state = WordState::Idle;
    }
}

impl Default for WordChoreographer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop every letter and line them up, centered, at mid-height.
fn align_row<L: ImageLoader>(stage: &mut Stage<'_, L>, letters: &[BodyId]) {
    let spacing = stage.config.letter_spacing();
    let total = letters.len() as f32 * spacing;
    let first_x = stage.viewport.center_x() - total * 0.5 + spacing * 0.5;
    let y = stage.viewport.center_y();

    for (i, id) in letters.iter().enumerate() {
        let Some(body) = stage.world.get_mut(*id) else {
            continue;
        };
        body.set_velocity(Vec2::zero());
        body.set_angular_velocity(0.0);
        body.set_position(Vec2::new(first_x + i as f32 * spacing, y));
        body.set_angle(0.0);
        body.set_static(true);
    }
}
