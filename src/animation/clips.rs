//! Frame-based animation clips built from spritesheet metadata.

use bevy::prelude::*;
use std::collections::HashMap;

/// Player walk cycle.
pub const WALKING: &str = "walking";
/// Flickering fire.
pub const BURNING: &str = "burning";

/// How many times a clip plays after the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    Times(u32),
}

/// A sequence of spritesheet frames played at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Spritesheet frame indices, in order
    pub frames: Vec<usize>,
    /// Frames per second
    pub frame_rate: f32,
    /// Play forward then backward before repeating
    pub yoyo: bool,
    pub repeat: Repeat,
}

impl AnimationClip {
    pub fn new(frames: Vec<usize>, frame_rate: f32) -> Self {
        Self {
            frames,
            frame_rate,
            yoyo: false,
            repeat: Repeat::Times(0),
        }
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Seconds each frame stays on screen.
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// One full pass through the clip, including the return leg of a yoyo.
    ///
    /// The return leg skips both ends so a looping yoyo never shows the same
    /// frame twice in a row.
    pub fn cycle(&self) -> Vec<usize> {
        let mut cycle = self.frames.clone();
        if self.yoyo && self.frames.len() > 2 {
            cycle.extend(self.frames[1..self.frames.len() - 1].iter().rev());
        }
        cycle
    }
}

/// Every animation the game uses, registered once at startup.
#[derive(Resource, Debug, Clone)]
pub struct AnimationLibrary {
    clips: HashMap<String, AnimationClip>,
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        let mut library = Self {
            clips: HashMap::new(),
        };
        library.insert(
            WALKING,
            AnimationClip::new(vec![0, 1, 2], 12.0)
                .yoyo()
                .repeat(Repeat::Forever),
        );
        library.insert(
            BURNING,
            AnimationClip::new(vec![0, 1], 4.0).repeat(Repeat::Forever),
        );
        library
    }
}

impl AnimationLibrary {
    /// Register a clip. An existing clip with the same key is kept.
    pub fn insert(&mut self, key: &str, clip: AnimationClip) {
        self.clips.entry(key.to_string()).or_insert(clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }
}
