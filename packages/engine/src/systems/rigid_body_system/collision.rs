use crate::rigid_body::{RigidBody, Shape, Vec2};

/// Closing speed (px/step) under which contacts stop bouncing.
const RESTING_SPEED: f32 = 0.5;

/// Pairwise passes per step; piles need more than one to settle.
const RELAXATION_PASSES: usize = 4;

/// Contact normal points from body `a` toward body `b`.
#[derive(Clone, Copy, Debug)]
struct Contact {
    normal: Vec2,
    depth: f32,
}

/// Relax all pairs a few times, then settle contacts with static bodies once
/// more so a crowded pile can never squeeze a body through a boundary.
pub(super) fn resolve_contacts(bodies: &mut [RigidBody]) {
    for _ in 0..RELAXATION_PASSES {
        resolve_pass(bodies, false);
    }
    resolve_pass(bodies, true);
}

/// One pass over all pairs. Sensors and static-static pairs are skipped.
fn resolve_pass(bodies: &mut [RigidBody], static_only: bool) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if (a.is_static && b.is_static) || a.is_sensor || b.is_sensor {
                continue;
            }
            if static_only && !(a.is_static || b.is_static) {
                continue;
            }
            if !bounds_overlap(a, b) {
                continue;
            }
            if let Some(contact) = find_contact(a, b) {
                resolve(a, b, contact);
            }
        }
    }
}

fn bounds_overlap(a: &RigidBody, b: &RigidBody) -> bool {
    let ea = a.shape.half_extents();
    let eb = b.shape.half_extents();
    (a.pos.x - b.pos.x).abs() <= ea.x + eb.x && (a.pos.y - b.pos.y).abs() <= ea.y + eb.y
}

fn find_contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.pos, ra, b.pos, rb)
        }
        (Shape::Circle { radius }, Shape::Rect { half_width, half_height }) => {
            circle_rect(a.pos, a.velocity, radius, b.pos, Vec2::new(half_width, half_height))
        }
        (Shape::Rect { half_width, half_height }, Shape::Circle { radius }) => {
            circle_rect(b.pos, b.velocity, radius, a.pos, Vec2::new(half_width, half_height)).map(|c| Contact {
                normal: -c.normal,
                depth: c.depth,
            })
        }
        // Rectangles are boundaries only; they never touch each other dynamically.
        (Shape::Rect { .. }, Shape::Rect { .. }) => None,
    }
}

fn circle_circle(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<Contact> {
    let d = pb - pa;
    let reach = ra + rb;
    let dist2 = d.length_squared();
    if dist2 >= reach * reach {
        return None;
    }
    let dist = dist2.sqrt();
    let normal = if dist > 0.0001 { d * (1.0 / dist) } else { Vec2::new(0.0, 1.0) };
    Some(Contact { normal, depth: reach - dist })
}

/// Circle at `pc` moving with `vel` against an axis-aligned box centered at `pr`.
fn circle_rect(pc: Vec2, vel: Vec2, radius: f32, pr: Vec2, half: Vec2) -> Option<Contact> {
    let local = pc - pr;
    let closest = Vec2::new(local.x.clamp(-half.x, half.x), local.y.clamp(-half.y, half.y));

    if closest == local {
        // Center inside the box: leave along the shallower axis, back out the
        // way the body came in.
        let dx = half.x - local.x.abs();
        let dy = half.y - local.y.abs();
        let out = if dx < dy {
            Vec2::new(exit_sign(vel.x, local.x), 0.0)
        } else {
            Vec2::new(0.0, exit_sign(vel.y, local.y))
        };
        let depth = if out.x != 0.0 {
            half.x - out.x * local.x
        } else {
            half.y - out.y * local.y
        };
        return Some(Contact { normal: -out, depth: depth + radius });
    }

    let diff = local - closest;
    let dist2 = diff.length_squared();
    if dist2 >= radius * radius {
        return None;
    }
    let dist = dist2.sqrt();
    Some(Contact { normal: -(diff * (1.0 / dist)), depth: radius - dist })
}

/// Against the direction of travel; the nearer face when at rest.
fn exit_sign(velocity: f32, offset: f32) -> f32 {
    if velocity > 0.0 {
        -1.0
    } else if velocity < 0.0 {
        1.0
    } else if offset < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn resolve(a: &mut RigidBody, b: &mut RigidBody, contact: Contact) {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let total = inv_a + inv_b;
    if total <= 0.0 {
        return;
    }
    let n = contact.normal;

    a.pos -= n * (contact.depth * inv_a / total);
    b.pos += n * (contact.depth * inv_b / total);

    let closing = (b.velocity - a.velocity).dot(n);
    if closing >= 0.0 {
        return;
    }

    let e = if -closing < RESTING_SPEED {
        0.0
    } else {
        a.restitution.max(b.restitution)
    };
    let j = -(1.0 + e) * closing / total;
    a.velocity -= n * (j * inv_a);
    b.velocity += n * (j * inv_b);
}
