//! Full-screen fade to black used before a restart.

use bevy::prelude::*;
use std::time::Duration;

/// Progress of the fade out.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScreenFade {
    timer: Option<Timer>,
    /// Set once the fade has completed and been reported
    finished: bool,
}

impl ScreenFade {
    /// Begin fading over `duration_ms`. Returns false if a fade is already
    /// running or has finished.
    pub fn start(&mut self, duration_ms: u64) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(Timer::new(Duration::from_millis(duration_ms), TimerMode::Once));
        true
    }

    /// Advance the fade. Returns true on the single tick where it completes.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.finished {
            return false;
        }
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.finished() {
            self.finished = true;
            return true;
        }
        false
    }

    pub fn is_fading(&self) -> bool {
        self.timer.is_some() && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Overlay opacity, 0 when clear and 1 when fully black.
    pub fn opacity(&self) -> f32 {
        match &self.timer {
            Some(timer) => timer.fraction(),
            None => 0.0,
        }
    }

    /// Clear the screen for a new scene.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Marker for the black overlay node.
#[derive(Component)]
pub struct FadeOverlay;

/// Spawn the overlay once; it sits above everything and starts transparent.
pub fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::NONE),
        GlobalZIndex(i32::MAX),
        FadeOverlay,
    ));
}

/// Match the overlay's alpha to the fade progress.
pub fn update_fade_overlay(
    fade: Res<ScreenFade>,
    mut overlay_query: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    if !fade.is_changed() {
        return;
    }
    for mut background in overlay_query.iter_mut() {
        background.0 = Color::srgba(0.0, 0.0, 0.0, fade.opacity());
    }
}

/// New scenes start unfaded.
pub fn reset_fade(mut fade: ResMut<ScreenFade>) {
    fade.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_completes_once() {
        let mut fade = ScreenFade::default();
        assert!(fade.start(500));
        assert!(!fade.start(500));
        assert!(fade.is_fading());

        assert!(!fade.tick(Duration::from_millis(250)));
        assert!((fade.opacity() - 0.5).abs() < 1e-6);
        assert!(fade.tick(Duration::from_millis(250)));
        assert!(!fade.tick(Duration::from_millis(250)));
        assert!(fade.is_finished());
        assert!(!fade.is_fading());
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn idle_fade_never_completes() {
        let mut fade = ScreenFade::default();
        assert!(!fade.tick(Duration::from_secs(10)));
        assert_eq!(fade.opacity(), 0.0);
    }

    #[test]
    fn reset_allows_a_new_fade() {
        let mut fade = ScreenFade::default();
        fade.start(100);
        fade.tick(Duration::from_millis(100));
        fade.reset();
        assert!(!fade.is_finished());
        assert!(fade.start(100));
    }
}
