//! Boundary traits for the display and speaker.
//!
//! Implementations wrap the device's vendor APIs. Failures stay on their
//! side of the boundary; nothing here returns an error.

use kana_core::cue::{AudioCue, DisplayCue};

use super::types::Response;

pub trait RenderSink {
    fn clear(&mut self);
    /// Move the cursor to the cue's position, set its font scale, draw its text.
    fn draw(&mut self, cue: &DisplayCue);
}

pub trait AudioSink {
    /// Play a resource to completion, or drop it if it cannot be loaded.
    fn play(&mut self, cue: &AudioCue);
    fn set_volume(&mut self, level: u8);
}

impl Response {
    /// Perform the response: volume, sound, then the screen.
    pub fn apply(&self, render: &mut dyn RenderSink, audio: &mut dyn AudioSink) {
        if let Some(level) = self.volume {
            audio.set_volume(level);
        }
        if let Some(ref cue) = self.audio {
            audio.play(cue);
        }
        if self.clear {
            render.clear();
        }
        for cue in &self.cues {
            render.draw(cue);
        }
    }
}
