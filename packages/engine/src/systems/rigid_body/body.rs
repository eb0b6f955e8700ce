use serde::Serialize;

use super::vec2::Vec2;

/// Mass per px² of area
pub const DEFAULT_DENSITY: f32 = 0.001;

/// Handle of a body inside a `PhysicsWorld`. Never reused within one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box; rectangles here are boundaries and never rotate.
    Rect { half_width: f32, half_height: f32 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
            Shape::Rect { half_width, half_height } => 4.0 * half_width * half_height,
        }
    }

    /// Half extents of the bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::new(radius, radius),
            Shape::Rect { half_width, half_height } => Vec2::new(half_width, half_height),
        }
    }
}

/// Sprite drawn on top of a body, scaled uniformly or per axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sprite {
    pub texture: String,
    pub x_scale: f32,
    pub y_scale: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderProps {
    pub visible: bool,
    pub fill: String,
    pub sprite: Option<Sprite>,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            visible: true,
            fill: String::new(),
            sprite: None,
        }
    }
}

/// Per-body behavior flags read by step hooks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BodyPlugin {
    /// Body is exempt from the ambient gravity field.
    pub anti_gravity: bool,
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// Assigned by the world on insertion
    pub id: BodyId,
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (pixels per step)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per step)
    pub angular_vel: f32,
    /// Force accumulated for the next integration
    pub force: Vec2,
    pub mass: f32,

    pub shape: Shape,

    // === Flags ===
    /// Excluded from integration; moves only by explicit position changes
    pub is_static: bool,
    /// Detects overlap but never produces a collision response
    pub is_sensor: bool,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Fraction of velocity lost per step to the air
    pub friction_air: f32,

    pub render: RenderProps,
    pub plugin: BodyPlugin,
}

impl RigidBody {
    fn with_shape(x: f32, y: f32, shape: Shape) -> Self {
        Self {
            id: BodyId(0),
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            force: Vec2::zero(),
            mass: shape.area() * DEFAULT_DENSITY,
            shape,
            is_static: false,
            is_sensor: false,
            restitution: 0.0,
            friction_air: 0.01,
            render: RenderProps::default(),
            plugin: BodyPlugin::default(),
        }
    }

    /// Create a rectangular rigid body centered at (x, y)
    pub fn rectangle(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::with_shape(x, y, Shape::Rect { half_width: w * 0.5, half_height: h * 0.5 })
    }

    /// Create a circular rigid body centered at (x, y)
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Self::with_shape(x, y, Shape::Circle { radius })
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.set_static(is_static);
        self
    }

    pub fn with_sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    pub fn with_restitution(mut self, r: f32) -> Self {
        self.set_restitution(r);
        self
    }

    pub fn with_friction_air(mut self, f: f32) -> Self {
        self.friction_air = f.clamp(0.0, 1.0);
        self
    }

    pub fn with_render(mut self, render: RenderProps) -> Self {
        self.render = render;
        self
    }

    /// 0 for static bodies (infinite mass)
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static || self.mass <= 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, w: f32) {
        self.angular_vel = w;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Making a body static also kills its motion.
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
        if is_static {
            self.velocity = Vec2::zero();
            self.angular_vel = 0.0;
            self.force = Vec2::zero();
        }
    }

    /// Apply force at center of mass; consumed by the next integration
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn speed_squared(&self) -> f32 {
        self.velocity.length_squared()
    }
}
