use letterfall_engine::letters::boundaries::boundary_bodies;
use letterfall_engine::letters::StaticImageLoader;
use letterfall_engine::rigid_body::{Shape, Vec2};
use letterfall_engine::{Config, LetterfallCore, Viewport};

#[test]
fn boundary_geometry_frames_the_viewport() {
    let [ground, left, right, ceiling] = boundary_bodies(Viewport::new(900.0, 600.0), &Config::default());

    assert_eq!(ground.pos, Vec2::new(450.0, 640.0));
    assert_eq!(ground.shape, Shape::Rect { half_width: 450.0, half_height: 40.0 });
    assert!(ground.render.visible);

    assert_eq!(left.pos, Vec2::new(-60.0, 300.0));
    assert_eq!(right.pos, Vec2::new(960.0, 300.0));
    assert!(!left.render.visible && !right.render.visible);

    assert_eq!(ceiling.pos, Vec2::new(450.0, -40.0));
    assert!(ceiling.is_sensor);
    assert!([&ground, &left, &right, &ceiling].iter().all(|b| b.is_static));
}

#[test]
fn ceiling_follows_the_word_lifecycle() {
    let mut core = LetterfallCore::new(900.0, 600.0, StaticImageLoader::new(), 9);
    assert_eq!(core.ceiling_pass_through(), Some(false));

    core.key_down("a", 0.0);
    assert_eq!(core.ceiling_pass_through(), Some(true));

    core.key_down("Enter", 0.0);
    assert_eq!(core.ceiling_pass_through(), Some(true));

    let mut now = 0.0;
    while core.buffer() == "a" {
        now += 1000.0 / 60.0;
        core.step(now);
    }
    assert_eq!(core.ceiling_pass_through(), Some(false));
}

#[test]
fn repeated_resizes_leave_exactly_one_boundary_set() {
    let mut core = LetterfallCore::new(900.0, 600.0, StaticImageLoader::new(), 9);
    for (w, h) in [(1024.0, 768.0), (320.0, 480.0), (320.0, 480.0)] {
        core.resize(w, h);
        assert_eq!(core.world().body_count(), 4);
    }
    let set = core.boundaries().unwrap();
    let ground = core.world().get(set.ground).unwrap();
    assert_eq!(ground.pos, Vec2::new(160.0, 520.0));
}
