//! Headless renderers

use glam::{DVec2, IVec2};

use super::Renderer;

/// Images the game draws; an asset layer maps these to real bitmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Grass,
    Track,
    TrackBorder,
    Finish,
    RedCar,
    GreenCar,
}

impl ImageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageId::Grass => "grass",
            ImageId::Track => "track",
            ImageId::TrackBorder => "track-border",
            ImageId::Finish => "finish",
            ImageId::RedCar => "red-car",
            ImageId::GreenCar => "green-car",
        }
    }
}

/// Logs banners at info level and everything else at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_banner: Option<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw_image(&mut self, image: ImageId, pos: IVec2) {
        log::trace!("draw {} at {}", image.as_str(), pos);
    }

    fn draw_rotated(&mut self, image: ImageId, pos: DVec2, angle: f64) {
        log::trace!("draw {} at {:.1} rotated {:.1}", image.as_str(), pos, angle);
    }

    fn draw_text(&mut self, text: &str, pos: IVec2) {
        log::trace!("text {:?} at {}", text, pos);
    }

    fn draw_text_centered(&mut self, text: &str) {
        // Only log a banner when it changes
        if self.last_banner.as_deref() != Some(text) {
            log::info!("{}", text);
            self.last_banner = Some(text.to_string());
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image(ImageId, IVec2),
    Rotated(ImageId, DVec2, f64),
    Text(String, IVec2),
    Centered(String),
    Present,
}

/// Keeps every draw call, for tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }

    pub fn banners(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Centered(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_image(&mut self, image: ImageId, pos: IVec2) {
        self.calls.push(DrawCall::Image(image, pos));
    }

    fn draw_rotated(&mut self, image: ImageId, pos: DVec2, angle: f64) {
        self.calls.push(DrawCall::Rotated(image, pos, angle));
    }

    fn draw_text(&mut self, text: &str, pos: IVec2) {
        self.calls.push(DrawCall::Text(text.to_string(), pos));
    }

    fn draw_text_centered(&mut self, text: &str) {
        self.calls.push(DrawCall::Centered(text.to_string()));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
