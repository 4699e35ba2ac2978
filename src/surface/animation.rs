use bevy_egui::egui;
use std::time::Duration;

/// Delay used for frames that declare none (a 0 ms GIF delay), matching browsers.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// One decoded frame of an animated image
#[derive(Clone)]
pub struct AnimationFrame {
    pub image: egui::ColorImage,
    pub delay: Duration,
}

impl AnimationFrame {
    pub fn new(image: egui::ColorImage, delay: Duration) -> Self {
        let delay = if delay.is_zero() {
            DEFAULT_FRAME_DELAY
        } else {
            delay
        };
        Self { image, delay }
    }
}

/// Looping playback over a non-empty frame sequence.
#[derive(Clone)]
pub struct AnimatedImage {
    frames: Vec<AnimationFrame>,
    current_frame: usize,
    playback_time: Duration, // Time spent on the current frame
    is_playing: bool,
}

impl AnimatedImage {
    /// Returns `None` for an empty frame list. Playback starts immediately.
    pub fn new(frames: Vec<AnimationFrame>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames,
            current_frame: 0,
            playback_time: Duration::ZERO,
            is_playing: true,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn current_image(&self) -> &egui::ColorImage {
        &self.frames[self.current_frame].image
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Stop playback and rewind to the first frame.
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.current_frame = 0;
        self.playback_time = Duration::ZERO;
    }

    /// Start playback. Has no effect while already playing.
    pub fn start(&mut self) {
        self.is_playing = true;
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Advance playback by `delta`, wrapping at the end.
    /// Returns true if the displayed frame changed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.is_playing {
            return false;
        }

        let start_frame = self.current_frame;
        self.playback_time += delta;
        while self.playback_time >= self.frames[self.current_frame].delay {
            self.playback_time -= self.frames[self.current_frame].delay;
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
        self.current_frame != start_frame
    }
}
