//! Arcade bodies and the per-step movement rules.
//!
//! Everything here works in level coordinates: origin at the top-left of the
//! world, y growing downward. Boxes never rotate.

use bevy::math::Rect;
use bevy::prelude::*;

/// Overlaps thinner than this are treated as resting contact, not penetration.
const CONTACT_EPSILON: f32 = 0.01;

/// Which sides of a body are in contact with something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// A dynamic axis-aligned body.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// Fraction of velocity kept (and reversed) on impact, per axis
    pub bounce: Vec2,
    pub allow_gravity: bool,
    /// Never pushed out of static bodies
    pub immovable: bool,
    pub collide_world_bounds: bool,
    /// Disabled bodies neither move nor overlap anything
    pub enabled: bool,
    /// Contacts with the world bounds during the last step
    pub blocked: Contacts,
    /// Contacts with static bodies during the last step
    pub touching: Contacts,
}

impl Body {
    /// A body whose top-left corner is at `position`.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            bounce: Vec2::ZERO,
            allow_gravity: true,
            immovable: false,
            collide_world_bounds: false,
            enabled: true,
            blocked: Contacts::default(),
            touching: Contacts::default(),
        }
    }

    /// A body centred on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    pub fn with_bounce(mut self, bounce: Vec2) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.allow_gravity = false;
        self
    }

    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    pub fn collide_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Move the body so its centre sits at `center`.
    pub fn set_center(&mut self, center: Vec2) {
        self.position = center - self.size / 2.0;
    }

    /// Standing on a platform or on the bottom of the world.
    pub fn on_ground(&self) -> bool {
        self.blocked.down || self.touching.down
    }
}

/// A collidable box that never moves.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StaticBody {
    pub rect: Rect,
}

impl StaticBody {
    /// A static box whose top-left corner is at `position`.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::from_corners(position, position + size),
        }
    }
}

/// Marks a dynamic body that is separated from static bodies.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CollidesWithStatics;

/// Whether two boxes overlap by more than a resting contact.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    let inter = a.intersect(b);
    inter.width() > CONTACT_EPSILON && inter.height() > CONTACT_EPSILON
}

/// Advance a body by one step.
///
/// Gravity is applied first, then the body moves one axis at a time so each
/// axis is separated from `statics` on its own. World bounds are applied last.
pub fn step_body(body: &mut Body, dt: f32, gravity: f32, bounds: Rect, statics: &[Rect]) {
    body.blocked = Contacts::default();
    body.touching = Contacts::default();

    if !body.enabled {
        return;
    }

    if body.allow_gravity {
        body.velocity.y += gravity * dt;
    }

    body.position.x += body.velocity.x * dt;
    if !body.immovable {
        separate_x(body, statics);
    }

    body.position.y += body.velocity.y * dt;
    if !body.immovable {
        separate_y(body, statics);
    }

    if body.collide_world_bounds {
        clamp_to_bounds(body, bounds);
    }
}

fn separate_x(body: &mut Body, statics: &[Rect]) {
    for solid in statics {
        if !overlaps(body.rect(), *solid) {
            continue;
        }
        if body.velocity.x > 0.0 {
            body.position.x = solid.min.x - body.size.x;
            body.touching.right = true;
        } else if body.velocity.x < 0.0 {
            body.position.x = solid.max.x;
            body.touching.left = true;
        } else {
            continue;
        }
        body.velocity.x = -body.velocity.x * body.bounce.x;
    }
}

fn separate_y(body: &mut Body, statics: &[Rect]) {
    for solid in statics {
        if !overlaps(body.rect(), *solid) {
            continue;
        }
        if body.velocity.y > 0.0 {
            body.position.y = solid.min.y - body.size.y;
            body.touching.down = true;
        } else if body.velocity.y < 0.0 {
            body.position.y = solid.max.y;
            body.touching.up = true;
        } else {
            continue;
        }
        body.velocity.y = -body.velocity.y * body.bounce.y;
    }
}

fn clamp_to_bounds(body: &mut Body, bounds: Rect) {
    if body.position.x < bounds.min.x {
        body.position.x = bounds.min.x;
        body.velocity.x = -body.velocity.x * body.bounce.x;
        body.blocked.left = true;
    } else if body.position.x + body.size.x > bounds.max.x {
        body.position.x = bounds.max.x - body.size.x;
        body.velocity.x = -body.velocity.x * body.bounce.x;
        body.blocked.right = true;
    }

    if body.position.y < bounds.min.y {
        body.position.y = bounds.min.y;
        body.velocity.y = -body.velocity.y * body.bounce.y;
        body.blocked.up = true;
    } else if body.position.y + body.size.y > bounds.max.y {
        body.position.y = bounds.max.y - body.size.y;
        body.velocity.y = -body.velocity.y * body.bounce.y;
        body.blocked.down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world() -> Rect {
        Rect::new(0.0, 0.0, 360.0, 640.0)
    }

    #[test]
    fn gravity_accelerates_downward() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        step_body(&mut body, DT, 1000.0, world(), &[]);
        assert!((body.velocity.y - 1000.0 * DT).abs() < 1e-4);
        assert!(body.position.y > 100.0);
    }

    #[test]
    fn bodies_without_gravity_stay_put() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0)).without_gravity();
        for _ in 0..60 {
            step_body(&mut body, DT, 1000.0, world(), &[]);
        }
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn falling_body_lands_on_platform() {
        let platform = Rect::new(0.0, 200.0, 360.0, 230.0);
        let mut body = Body::new(Vec2::new(50.0, 150.0), Vec2::new(28.0, 30.0));
        for _ in 0..120 {
            step_body(&mut body, DT, 1000.0, world(), &[platform]);
        }
        assert!(body.touching.down);
        assert!(body.on_ground());
        assert!((body.position.y + body.size.y - 200.0).abs() < 1e-3);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn walking_along_a_platform_does_not_snag() {
        let platform = Rect::new(0.0, 200.0, 360.0, 230.0);
        let mut body = Body::new(Vec2::new(50.0, 170.0), Vec2::new(28.0, 30.0));
        for _ in 0..30 {
            body.velocity.x = 150.0;
            step_body(&mut body, DT, 1000.0, world(), &[platform]);
        }
        assert!(!body.touching.right);
        assert!(body.position.x > 50.0 + 150.0 * DT * 29.0);
    }

    #[test]
    fn jumping_into_a_ceiling_stops_upward_motion() {
        let ceiling = Rect::new(0.0, 100.0, 360.0, 130.0);
        let mut body = Body::new(Vec2::new(50.0, 135.0), Vec2::new(28.0, 30.0));
        body.velocity.y = -600.0;
        step_body(&mut body, DT, 1000.0, world(), &[ceiling]);
        assert!(body.touching.up);
        assert_eq!(body.position.y, 130.0);
        assert!(body.velocity.y >= 0.0);
    }

    #[test]
    fn world_bounds_block_and_bounce() {
        let mut body = Body::new(Vec2::new(345.0, 100.0), Vec2::new(10.0, 10.0))
            .without_gravity()
            .collide_world_bounds()
            .with_bounce(Vec2::new(1.0, 0.1));
        body.velocity.x = 600.0;
        step_body(&mut body, DT, 1000.0, world(), &[]);
        assert!(body.blocked.right);
        assert_eq!(body.position.x, 350.0);
        assert_eq!(body.velocity.x, -600.0);
    }

    #[test]
    fn bottom_of_world_counts_as_ground() {
        let mut body = Body::new(Vec2::new(10.0, 625.0), Vec2::new(10.0, 10.0)).collide_world_bounds();
        body.velocity.y = 500.0;
        step_body(&mut body, DT, 1000.0, world(), &[]);
        assert!(body.blocked.down);
        assert!(body.on_ground());
    }

    #[test]
    fn bodies_leave_the_world_unless_constrained() {
        let mut body = Body::new(Vec2::new(355.0, 10.0), Vec2::new(10.0, 10.0)).without_gravity();
        body.velocity.x = 600.0;
        step_body(&mut body, DT, 1000.0, world(), &[]);
        assert!(body.position.x > 355.0);
        assert!(!body.blocked.right);
    }

    #[test]
    fn disabled_bodies_are_frozen() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        body.velocity = Vec2::new(100.0, 100.0);
        body.enabled = false;
        step_body(&mut body, DT, 1000.0, world(), &[]);
        assert_eq!(body.position, Vec2::new(10.0, 10.0));
        assert_eq!(body.velocity, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn immovable_bodies_pass_through_statics() {
        let platform = Rect::new(0.0, 20.0, 360.0, 50.0);
        let mut body = Body::new(Vec2::new(10.0, 15.0), Vec2::new(10.0, 10.0)).immovable();
        body.velocity.y = 60.0;
        step_body(&mut body, DT, 0.0, world(), &[platform]);
        assert!(!body.touching.down);
        assert!((body.position.y - 16.0).abs() < 1e-4);
    }

    #[test]
    fn resting_contact_is_not_an_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 20.0);
        assert!(!overlaps(a, b));
        assert!(overlaps(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
    }

    #[test]
    fn centred_constructor_matches_sprite_origin() {
        let body = Body::centered(Vec2::new(30.0, 520.0), Vec2::new(28.0, 30.0));
        assert_eq!(body.position, Vec2::new(16.0, 505.0));
        assert_eq!(body.center(), Vec2::new(30.0, 520.0));
    }
}
