use crate::domain::Glyph;
use crate::rigid_body::{BodyId, RenderProps, RigidBody, Sprite};

use super::images::{sprite_scale, ImageLoader};
use super::{uniform, Stage};

/// Drop one letter body into the world above the viewport.
///
/// Never fails: a glyph whose image is still loading (or never loads) gets the
/// placeholder sprite scale and the post-step scale corrector fixes it later.
pub fn spawn_letter<L: ImageLoader>(stage: &mut Stage<'_, L>, glyph: Glyph) -> BodyId {
    let cfg = stage.config;
    let radius = cfg.letter_radius;
    let texture = glyph.texture_path(&cfg.image_prefix, &cfg.image_extension);

    let scale = match stage.images.request(glyph, cfg) {
        Some(size) => sprite_scale(size, cfg),
        None => cfg.placeholder_scale,
    };

    let width = stage.viewport.width;
    let x = if width > 2.0 * radius {
        uniform(&mut *stage.rng, radius, width - radius)
    } else {
        stage.viewport.center_x()
    };
    let y = -cfg.spawn_height;

    let mut body = RigidBody::circle(x, y, radius)
        .with_restitution(cfg.letter_restitution)
        .with_friction_air(cfg.letter_friction_air)
        .with_render(RenderProps {
            visible: true,
            fill: cfg.letter_fill.clone(),
            sprite: Some(Sprite { texture, x_scale: scale, y_scale: scale }),
        });

    let half_spin = cfg.spin_range * 0.5;
    body.set_angular_velocity(uniform(&mut *stage.rng, -half_spin, half_spin));

    stage.world.add(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Viewport;
    use crate::letters::images::StaticImageLoader;
    use crate::letters::test_support::Fixture;
    use crate::rigid_body::{Shape, Vec2};

    fn spawn(fx: &mut Fixture, c: char) -> BodyId {
        spawn_letter(&mut fx.stage(), Glyph::from_char(c).unwrap())
    }

    #[test]
    fn spawns_above_viewport_within_horizontal_inset() {
        let mut fx = Fixture::new(Viewport::new(500.0, 400.0), StaticImageLoader::new());
        let before = fx.world.body_count();
        for _ in 0..200 {
            let id = spawn(&mut fx, 'a');
            let body = fx.world.get(id).unwrap();
            assert!(body.pos.x >= 36.0 && body.pos.x < 464.0, "x = {}", body.pos.x);
            assert_eq!(body.pos.y, -120.0);
            assert_eq!(body.velocity, Vec2::zero());
            assert!(body.angular_vel >= -0.3 && body.angular_vel < 0.3);
        }
        assert_eq!(fx.world.body_count(), before + 200);
    }

    #[test]
    fn body_carries_letter_tuning_and_sprite() {
        let loader = StaticImageLoader::new().with_image("images/q.png", 288, 144);
        let mut fx = Fixture::new(Viewport::new(800.0, 600.0), loader);
        let id = spawn(&mut fx, 'q');
        let body = fx.world.get(id).unwrap();

        assert_eq!(body.shape, Shape::Circle { radius: 36.0 });
        assert!((body.restitution - 0.6).abs() < 1e-6);
        assert!((body.friction_air - 0.02).abs() < 1e-6);
        assert!(!body.is_static);
        assert!(!body.plugin.anti_gravity);

        let sprite = body.render.sprite.as_ref().unwrap();
        assert_eq!(sprite.texture, "images/q.png");
        assert!((sprite.x_scale - 0.5).abs() < 1e-6);
        assert_eq!(sprite.x_scale, sprite.y_scale);
    }

    #[test]
    fn unloaded_image_uses_placeholder_scale() {
        let loader = StaticImageLoader::new().with_pending("images/z.png", 100, 100);
        let mut fx = Fixture::new(Viewport::new(800.0, 600.0), loader);
        let id = spawn(&mut fx, 'z');
        let sprite = fx.world.get(id).unwrap().render.sprite.clone().unwrap();
        assert_eq!(sprite.x_scale, 0.05);
        assert_eq!(fx.images.loader().requested(), ["images/z.png"]);
    }

    #[test]
    fn narrow_viewport_spawns_at_center() {
        let mut fx = Fixture::new(Viewport::new(50.0, 400.0), StaticImageLoader::new());
        let id = spawn(&mut fx, 'n');
        assert_eq!(fx.world.get(id).unwrap().pos.x, 25.0);
    }
}
