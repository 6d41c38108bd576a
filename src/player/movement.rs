//! Side-scrolling player movement: run, stand, jump.

use bevy::prelude::*;

use super::components::*;
use crate::animation::{set_frame, SpriteAnimation, WALKING};
use crate::physics::{to_world, Body, CollidesWithStatics, PhysicsSet};
use crate::world::{depth, GameAssets, SceneEntity, PLAYER, PLAYER_SHEET};

/// Set up player movement systems.
///
/// `PlayerConfig` is built from `GameConfig`, so `CorePlugin` goes first.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<PlayerConfig>()
        .add_systems(Update, player_movement.in_set(PhysicsSet::Input));
}

/// Direction keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MoveInput {
    /// Arrow keys to run, up arrow or space to jump.
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::ArrowRight),
            jump: keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::Space),
        }
    }
}

/// What one frame of input does to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    pub velocity_x: f32,
    /// Set when a jump starts
    pub velocity_y: Option<f32>,
    /// Sprite art faces left; flip it when running right
    pub flip_x: Option<bool>,
    pub start_walking: bool,
    pub stop_walking: bool,
    /// Frame to show once walking stops
    pub frame: Option<usize>,
}

/// Decide velocity and animation from input and ground contact.
///
/// Holding both directions counts as holding neither. Jumping is only
/// possible while `on_ground`.
pub fn steer(input: MoveInput, on_ground: bool, walking: bool, config: &PlayerConfig) -> Steering {
    let mut steering = Steering::default();

    let direction = match (input.left, input.right) {
        (true, false) => Some(-1.0),
        (false, true) => Some(1.0),
        _ => None,
    };

    match direction {
        Some(sign) => {
            steering.velocity_x = sign * config.move_speed;
            steering.flip_x = Some(sign > 0.0);
            steering.start_walking = on_ground && !walking;
        }
        None => {
            steering.stop_walking = true;
            if on_ground {
                steering.frame = Some(STANDING_FRAME);
            }
        }
    }

    if on_ground && input.jump {
        steering.velocity_y = Some(config.jump_speed);
        steering.start_walking = false;
        steering.stop_walking = true;
        steering.frame = Some(JUMPING_FRAME);
    }

    steering
}

/// Read the keyboard and drive the player's body and sprite.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    mut player_query: Query<(&mut Body, &mut Sprite, &mut SpriteAnimation), With<Player>>,
) {
    let Ok((mut body, mut sprite, mut animation)) = player_query.get_single_mut() else {
        return;
    };

    let input = MoveInput::from_keyboard(&keyboard);
    let steering = steer(input, body.on_ground(), animation.is_playing(), &config);
    apply_steering(&steering, &mut body, &mut sprite, &mut animation);
}

fn apply_steering(steering: &Steering, body: &mut Body, sprite: &mut Sprite, animation: &mut SpriteAnimation) {
    body.velocity.x = steering.velocity_x;
    if let Some(velocity_y) = steering.velocity_y {
        body.velocity.y = velocity_y;
    }
    if let Some(flip) = steering.flip_x {
        sprite.flip_x = flip;
    }
    if steering.stop_walking {
        animation.stop();
    }
    if steering.start_walking {
        animation.play(WALKING);
    }
    if let Some(frame) = steering.frame {
        set_frame(sprite, frame);
    }
}

/// Spawn the player centred on `position`, standing.
pub fn spawn_player(commands: &mut Commands, assets: &GameAssets, position: Vec2) -> Entity {
    let size = PLAYER_SHEET.frame_size_f32();
    commands
        .spawn((
            Player,
            SceneEntity,
            Body::centered(position, size).collide_world_bounds(),
            CollidesWithStatics,
            assets.sheet_sprite(PLAYER, STANDING_FRAME),
            SpriteAnimation::default(),
            Transform::from_translation(to_world(position, depth::PLAYER)),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use bevy::ecs::system::RunSystemOnce;

    const LEFT: MoveInput = MoveInput { left: true, right: false, jump: false };
    const RIGHT: MoveInput = MoveInput { left: false, right: true, jump: false };
    const BOTH: MoveInput = MoveInput { left: true, right: true, jump: false };
    const JUMP: MoveInput = MoveInput { left: false, right: false, jump: true };

    fn config() -> PlayerConfig {
        PlayerConfig::from(&GameConfig::default())
    }

    #[test]
    fn holding_a_direction_moves_at_player_speed() {
        let left = steer(LEFT, true, false, &config());
        assert_eq!(left.velocity_x, -150.0);
        assert_eq!(left.flip_x, Some(false));

        let right = steer(RIGHT, false, false, &config());
        assert_eq!(right.velocity_x, 150.0);
        assert_eq!(right.flip_x, Some(true));
    }

    #[test]
    fn no_or_both_directions_stop_the_player() {
        for input in [MoveInput::default(), BOTH] {
            let steering = steer(input, true, true, &config());
            assert_eq!(steering.velocity_x, 0.0);
            assert!(steering.stop_walking);
            assert_eq!(steering.frame, Some(STANDING_FRAME));
            assert_eq!(steering.flip_x, None);
        }
    }

    #[test]
    fn standing_frame_only_on_the_ground() {
        let steering = steer(MoveInput::default(), false, false, &config());
        assert_eq!(steering.frame, None);
    }

    #[test]
    fn walking_starts_only_on_ground_and_when_idle() {
        assert!(steer(RIGHT, true, false, &config()).start_walking);
        assert!(!steer(RIGHT, true, true, &config()).start_walking);
        assert!(!steer(RIGHT, false, false, &config()).start_walking);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let grounded = steer(JUMP, true, false, &config());
        assert_eq!(grounded.velocity_y, Some(-600.0));
        assert_eq!(grounded.frame, Some(JUMPING_FRAME));
        assert!(grounded.stop_walking);

        let airborne = steer(JUMP, false, false, &config());
        assert_eq!(airborne.velocity_y, None);
    }

    #[test]
    fn running_jump_keeps_horizontal_speed() {
        let input = MoveInput { left: false, right: true, jump: true };
        let steering = steer(input, true, false, &config());
        assert_eq!(steering.velocity_x, 150.0);
        assert_eq!(steering.velocity_y, Some(-600.0));
        assert!(!steering.start_walking);
    }

    fn world_with_player(on_ground: bool) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(config());
        world.insert_resource(ButtonInput::<KeyCode>::default());
        let player = {
            let mut commands = world.commands();
            spawn_player(&mut commands, &GameAssets::default(), Vec2::new(30.0, 520.0))
        };
        world.flush();
        world.get_mut::<Body>(player).unwrap().touching.down = on_ground;
        (world, player)
    }

    #[test]
    fn system_applies_keyboard_to_body() {
        let (mut world, player) = world_with_player(true);
        {
            let mut keyboard = world.resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowRight);
            keyboard.press(KeyCode::Space);
        }
        world.run_system_once(player_movement).unwrap();

        let body = world.get::<Body>(player).unwrap();
        assert_eq!(body.velocity, Vec2::new(150.0, -600.0));
        let sprite = world.get::<Sprite>(player).unwrap();
        assert!(sprite.flip_x);
        assert_eq!(sprite.texture_atlas.as_ref().unwrap().index, JUMPING_FRAME);
        assert!(!world.get::<SpriteAnimation>(player).unwrap().is_playing());
    }

    #[test]
    fn system_starts_walk_cycle_on_ground() {
        let (mut world, player) = world_with_player(true);
        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowLeft);
        world.run_system_once(player_movement).unwrap();

        let animation = world.get::<SpriteAnimation>(player).unwrap();
        assert_eq!(animation.current_clip(), Some(WALKING));
        assert_eq!(world.get::<Body>(player).unwrap().velocity.x, -150.0);
    }

    #[test]
    fn releasing_keys_stops_the_player() {
        let (mut world, player) = world_with_player(true);
        world.get_mut::<Body>(player).unwrap().velocity.x = 150.0;
        world.run_system_once(player_movement).unwrap();

        assert_eq!(world.get::<Body>(player).unwrap().velocity.x, 0.0);
        let sprite = world.get::<Sprite>(player).unwrap();
        assert_eq!(sprite.texture_atlas.as_ref().unwrap().index, STANDING_FRAME);
    }
}
