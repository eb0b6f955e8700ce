use super::*;
use crate::letters::StaticImageLoader;
use crate::rigid_body::{BodyId, Vec2};

/// Drives a core the way a browser frame loop does: one fixed step per
/// animation frame, stamped with the frame's host time.
struct Host {
    core: LetterfallCore<StaticImageLoader>,
    now: f64,
    frame_ms: f64,
}

impl Host {
    fn new() -> Self {
        Self::with_core(LetterfallCore::new(900.0, 600.0, StaticImageLoader::new(), 42))
    }

    fn with_core(core: LetterfallCore<StaticImageLoader>) -> Self {
        Self { core, now: 0.0, frame_ms: 1000.0 / 60.0 }
    }

    fn key(&mut self, key: &str) -> KeyOutcome {
        self.core.key_down(key, self.now)
    }

    fn keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.key(key);
        }
    }

    fn frame(&mut self) {
        self.now += self.frame_ms;
        self.core.step(self.now);
    }

    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            self.frame();
        }
    }

    fn run_until(&mut self, host_ms: f64) {
        while self.now < host_ms {
            self.frame();
        }
    }
}

#[test]
fn fresh_core_is_idle_with_solid_ceiling() {
    let host = Host::new();
    assert_eq!(host.core.state(), WordState::Idle);
    assert_eq!(host.core.world().body_count(), 4);
    assert_eq!(host.core.ceiling_pass_through(), Some(false));
}

#[test]
fn each_letter_adds_one_body_and_one_buffer_char() {
    let mut host = Host::new();
    for (i, key) in ["w", "O", "r", "d"].iter().enumerate() {
        let outcome = host.key(key);
        assert!(matches!(outcome, KeyOutcome::Spawned(_)));
        assert_eq!(host.core.buffer().len(), i + 1);
        assert_eq!(host.core.choreographer().letters().len(), i + 1);
        assert_eq!(host.core.world().body_count(), 4 + i + 1);
    }
    assert_eq!(host.core.buffer(), "word");
    assert_eq!(host.core.state(), WordState::Collecting);
    assert_eq!(host.core.ceiling_pass_through(), Some(true));
}

#[test]
fn non_letter_keys_change_nothing() {
    let mut host = Host::new();
    for key in ["1", "Shift", " ", "ArrowUp", "Enter", "enter"] {
        assert_eq!(host.key(key), KeyOutcome::Ignored);
    }
    assert_eq!(host.core.world().body_count(), 4);
    assert_eq!(host.core.state(), WordState::Idle);
}

#[test]
fn letters_past_max_word_len_are_dropped() {
    let mut host = Host::new();
    let keys: Vec<String> = (0..12).map(|i| ((b'a' + i) as char).to_string()).collect();
    for key in &keys {
        host.key(key);
    }
    let bodies = host.core.world().body_count();

    assert_eq!(host.key("z"), KeyOutcome::Ignored);
    assert_eq!(host.core.buffer().len(), 12);
    assert_eq!(host.core.choreographer().letters().len(), 12);
    assert_eq!(host.core.world().body_count(), bodies);
}

#[test]
fn held_word_stays_put_until_release() {
    let mut host = Host::new();
    host.keys(&["a", "b", "c"]);
    host.frames(30);
    assert!(matches!(host.key("Enter"), KeyOutcome::Submitted(_)));
    let letters = host.core.choreographer().letters().to_vec();

    let positions = |core: &LetterfallCore<StaticImageLoader>| -> Vec<Vec2> {
        letters.iter().map(|id| core.world().get(*id).unwrap().pos).collect()
    };
    let held = positions(&host.core);
    assert_eq!(held, vec![Vec2::new(378.0, 300.0), Vec2::new(450.0, 300.0), Vec2::new(522.0, 300.0)]);

    let due = host.now + 2000.0;
    while host.now + host.frame_ms < due {
        host.frame();
        assert_eq!(host.core.state(), WordState::Holding);
        assert_eq!(host.core.ceiling_pass_through(), Some(true));
        assert_eq!(positions(&host.core), held);
    }
}

#[test]
fn submit_then_hold_then_release_scenario() {
    let mut host = Host::new();
    host.keys(&["a", "b"]);
    host.key("Enter");

    let letters = host.core.choreographer().letters().to_vec();
    assert_eq!(letters.len(), 2);
    assert_eq!(host.core.buffer(), "ab");
    assert_eq!(host.core.state(), WordState::Holding);

    host.run_until(2000.0);

    assert_eq!(host.core.state(), WordState::Idle);
    assert_eq!(host.core.buffer(), "");
    assert!(host.core.choreographer().letters().is_empty());
    assert_eq!(host.core.ceiling_pass_through(), Some(false));
    for id in &letters {
        let body = host.core.world().get(*id).unwrap();
        assert!(!body.is_static);
        assert!(body.plugin.anti_gravity);
        assert_eq!(body.friction_air, 0.0);
    }
}

#[test]
fn hold_lasts_two_seconds_of_host_time_at_any_frame_rate() {
    for hz in [30.0, 60.0, 120.0, 144.0, 240.0] {
        let mut host = Host::new();
        host.frame_ms = 1000.0 / hz;
        host.now = 5000.0;
        host.keys(&["h", "z", "Enter"]);
        assert_eq!(host.core.next_release_ms(), Some(7000.0));

        let mut steps = 0;
        while host.core.state() == WordState::Holding {
            host.frame();
            steps += 1;
        }

        assert!(host.now >= 7000.0, "{} Hz released early at {} ms", hz, host.now);
        assert!(host.now <= 7000.0 + host.frame_ms, "{} Hz released late at {} ms", hz, host.now);
        let expected = 2000.0 / host.frame_ms;
        assert!((steps as f64 - expected).abs() <= 1.0, "{} Hz took {} steps", hz, steps);
        assert_eq!(host.core.next_release_ms(), None);
    }
}

#[test]
fn release_fires_while_the_frame_loop_is_stalled() {
    let mut host = Host::new();
    host.keys(&["s", "t", "Enter"]);

    host.core.tick(1999.0);
    assert_eq!(host.core.state(), WordState::Holding);

    host.core.tick(2000.0);
    assert_eq!(host.core.state(), WordState::Idle);
    assert_eq!(host.core.frame(), 0);
}

#[test]
fn late_key_lands_after_the_due_release() {
    let mut host = Host::new();
    host.keys(&["o", "k", "Enter"]);
    let first = host.core.choreographer().letters().to_vec();

    // No frames at all; the next keystroke arrives after the hold ended.
    host.now = 2500.0;
    host.key("n");

    assert!(first.iter().all(|id| host.core.world().get(*id).unwrap().plugin.anti_gravity));
    assert_eq!(host.core.buffer(), "n");
    assert_eq!(host.core.state(), WordState::Collecting);
}

#[test]
fn host_clock_never_runs_backwards() {
    let mut host = Host::new();
    host.core.step(100.0);
    host.core.step(50.0);
    host.core.step(f64::NAN);
    assert_eq!(host.core.clock_ms(), 100.0);
    assert_eq!(host.core.frame(), 3);
}

#[test]
fn released_letters_float_instead_of_falling() {
    let mut host = Host::new();
    host.keys(&["u", "p", "Enter"]);
    host.run_until(2000.0);
    let letters: Vec<BodyId> = host
        .core
        .world()
        .bodies()
        .iter()
        .filter(|b| b.plugin.anti_gravity)
        .map(|b| b.id)
        .collect();
    assert_eq!(letters.len(), 2);

    // One second of free fall would carry a letter from the row to the floor.
    host.frames(60);

    for id in letters {
        let body = host.core.world().get(id).unwrap();
        assert!(body.pos.y < 450.0, "letter sank to y = {}", body.pos.y);
    }
}

#[test]
fn new_word_during_hold_does_not_disturb_either_word() {
    let mut host = Host::new();
    host.keys(&["o", "n", "e", "Enter"]);
    let first = host.core.choreographer().letters().to_vec();

    host.frame();
    host.keys(&["t", "w", "o"]);
    assert_eq!(host.core.buffer(), "two");
    assert_eq!(host.core.state(), WordState::Collecting);
    let second = host.core.choreographer().letters().to_vec();

    host.run_until(2000.0);

    let core = &host.core;
    assert!(first.iter().all(|id| core.world().get(*id).unwrap().plugin.anti_gravity));
    assert!(second.iter().all(|id| !core.world().get(*id).unwrap().plugin.anti_gravity));
    assert_eq!(core.buffer(), "two");
    assert_eq!(core.ceiling_pass_through(), Some(true));
    assert_eq!(core.choreographer().pending_releases(), 0);
}

#[test]
fn overfilled_narrow_viewport_keeps_letters_inside() {
    let mut host = Host::with_core(LetterfallCore::new(150.0, 400.0, StaticImageLoader::new(), 7));
    for key in "abcdefghijkl".chars() {
        host.key(&key.to_string());
        host.frames(20);
    }
    host.frames(600);

    for id in host.core.choreographer().letters() {
        let body = host.core.world().get(*id).unwrap();
        assert!(body.pos.y < 400.0, "letter pushed through the ground, y = {}", body.pos.y);
        assert!(body.pos.x > 0.0 && body.pos.x < 150.0, "letter pushed through a wall, x = {}", body.pos.x);
    }
}

#[test]
fn resize_rebuilds_boundaries_and_keeps_ceiling_state() {
    let mut host = Host::new();
    let before = host.core.boundaries().unwrap();

    host.core.resize(1200.0, 800.0);
    let after = host.core.boundaries().unwrap();
    assert_ne!(before, after);
    assert_eq!(host.core.world().body_count(), 4);
    assert_eq!(host.core.ceiling_pass_through(), Some(false));
    assert_eq!(host.core.world().get(after.ground).unwrap().pos, Vec2::new(600.0, 840.0));

    host.key("k");
    let letter = host.core.choreographer().letters()[0];
    let pos = host.core.world().get(letter).unwrap().pos;
    host.core.resize(640.0, 480.0);
    assert_eq!(host.core.ceiling_pass_through(), Some(true));
    assert_eq!(host.core.world().get(letter).unwrap().pos, pos);
}

#[test]
fn rebuild_with_same_viewport_is_idempotent() {
    let mut host = Host::new();
    host.core.resize(800.0, 500.0);
    let geometry = |core: &LetterfallCore<StaticImageLoader>| {
        let set = core.boundaries().unwrap();
        set.ids()
            .iter()
            .map(|id| {
                let b = core.world().get(*id).unwrap();
                (b.pos, b.shape)
            })
            .collect::<Vec<_>>()
    };
    let first = geometry(&host.core);
    host.core.resize(800.0, 500.0);
    assert_eq!(geometry(&host.core), first);
}

#[test]
fn clear_restores_initial_state() {
    let mut host = Host::new();
    host.keys(&["x", "y", "Enter"]);
    host.frame();
    host.key("z");

    host.core.clear();

    assert_eq!(host.core.world().body_count(), 4);
    assert_eq!(host.core.state(), WordState::Idle);
    assert_eq!(host.core.buffer(), "");
    assert_eq!(host.core.clock_ms(), 0.0);
    assert_eq!(host.core.choreographer().pending_releases(), 0);
    assert_eq!(host.core.next_release_ms(), None);
    assert!(host.core.images().is_empty());
    assert_eq!(host.core.ceiling_pass_through(), Some(false));
}

#[test]
fn late_images_fix_sprite_scale_on_next_step() {
    let loader = StaticImageLoader::new().with_pending("images/m.png", 72, 72);
    let mut host = Host::with_core(LetterfallCore::new(900.0, 600.0, loader, 1));
    let id = match host.key("m") {
        KeyOutcome::Spawned(id) => id,
        other => panic!("expected spawn, got {:?}", other),
    };
    let scale = |core: &LetterfallCore<StaticImageLoader>| {
        core.world().get(id).unwrap().render.sprite.as_ref().unwrap().x_scale
    };
    assert_eq!(scale(&host.core), 0.05);

    host.frame();
    assert_eq!(scale(&host.core), 0.05);

    host.core.images_mut().loader_mut().mark_ready("images/m.png");
    host.frame();
    assert!((scale(&host.core) - 2.0).abs() < 1e-6);

    host.core.set_device_pixel_ratio(2.0);
    host.frame();
    assert!((scale(&host.core) - 1.0).abs() < 1e-6);
}

#[test]
fn render_snapshot_hides_invisible_boundaries() {
    let mut host = Host::new();
    host.keys(&["h", "i"]);
    let items = host.core.render_snapshot();
    // Ground plus two letters; walls and ceiling are invisible.
    assert_eq!(items.len(), 3);
    assert_eq!(items.iter().filter(|i| i.sprite.is_some()).count(), 2);

    let json = host.core.render_snapshot_json();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(3));
    assert_eq!(parsed[1]["shape"]["kind"], "circle");
}

#[test]
fn perf_stats_track_bodies_when_enabled() {
    let mut host = Host::new();
    host.frame();
    assert_eq!(host.core.get_perf_stats().body_count(), 0);

    host.core.enable_perf_metrics(true);
    host.keys(&["p", "q", "Enter"]);
    host.frame();

    let stats = host.core.get_perf_stats();
    assert_eq!(stats.body_count(), 6);
    assert_eq!(stats.pending_releases(), 1);
    assert_eq!(stats.floating_bodies(), 0);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn settings_reject_invalid_values() {
    let mut host = Host::new();
    host.core.set_device_pixel_ratio(0.0);
    host.core.set_device_pixel_ratio(f32::NAN);
    assert_eq!(host.core.config().device_pixel_ratio, 1.0);

    host.core.set_gravity(0.0, -1.0);
    assert_eq!(host.core.world().gravity().y, -1.0);
    host.core.set_gravity(f32::INFINITY, 0.0);
    assert_eq!(host.core.world().gravity().x, 0.0);

    host.core.step_by(10.0, -5.0);
    host.core.step_by(20.0, f32::NAN);
    assert_eq!(host.core.frame(), 0);
    assert_eq!(host.core.clock_ms(), 20.0);
}
