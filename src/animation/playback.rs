//! Per-sprite animation playback.

use bevy::prelude::*;

use super::clips::{AnimationClip, AnimationLibrary, Repeat};

/// Which clip a sprite is playing and how far along it is.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct SpriteAnimation {
    clip: Option<String>,
    /// Position in the clip's cycle
    cursor: usize,
    /// Completed passes through the cycle
    passes: u32,
    /// Time spent on the current frame
    elapsed: f32,
}

impl SpriteAnimation {
    /// Start playing `key` from its first frame.
    pub fn playing(key: &str) -> Self {
        let mut animation = Self::default();
        animation.play(key);
        animation
    }

    /// Start `key` from its first frame, restarting it if already playing.
    pub fn play(&mut self, key: &str) {
        self.clip = Some(key.to_string());
        self.cursor = 0;
        self.passes = 0;
        self.elapsed = 0.0;
    }

    /// Stop whatever is playing. The sprite keeps its current frame.
    pub fn stop(&mut self) {
        self.clip = None;
    }

    pub fn is_playing(&self) -> bool {
        self.clip.is_some()
    }

    pub fn current_clip(&self) -> Option<&str> {
        self.clip.as_deref()
    }

    /// Advance by `dt` seconds and return the frame to show.
    ///
    /// A clip that runs out of repeats stops on its last frame.
    pub fn advance(&mut self, dt: f32, library: &AnimationLibrary) -> Option<usize> {
        let clip = library.get(self.clip.as_deref()?)?.clone();
        let cycle = clip.cycle();
        if cycle.is_empty() {
            self.stop();
            return None;
        }

        self.elapsed += dt;
        let step = clip.frame_duration();
        while self.elapsed >= step {
            self.elapsed -= step;
            if !self.next_frame(&clip, cycle.len()) {
                let last = cycle[self.cursor];
                self.stop();
                return Some(last);
            }
        }

        Some(cycle[self.cursor])
    }

    /// Move to the next frame. Returns false once the clip has finished.
    fn next_frame(&mut self, clip: &AnimationClip, len: usize) -> bool {
        if self.cursor + 1 < len {
            self.cursor += 1;
            return true;
        }
        match clip.repeat {
            Repeat::Forever => {}
            Repeat::Times(n) if self.passes < n => {}
            Repeat::Times(_) => return false,
        }
        self.passes += 1;
        self.cursor = 0;
        true
    }
}

/// Show a specific spritesheet frame.
pub fn set_frame(sprite: &mut Sprite, frame: usize) {
    if let Some(atlas) = sprite.texture_atlas.as_mut() {
        atlas.index = frame;
    }
}

/// Step every playing animation and push its frame to the sprite.
pub fn animate_sprites(
    time: Res<Time>,
    library: Res<AnimationLibrary>,
    mut query: Query<(&mut SpriteAnimation, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (mut animation, mut sprite) in query.iter_mut() {
        if !animation.is_playing() {
            continue;
        }
        if let Some(frame) = animation.advance(dt, &library) {
            set_frame(&mut sprite, frame);
        }
    }
}
