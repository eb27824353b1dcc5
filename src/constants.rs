use std::time::Duration;

pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(5000); // Time each slide stays in view
pub const DEFAULT_PADDING: f32 = 35.0;        // Gap after each slide (pixels)

pub const WINDOW_WIDTH: i32 = 1280;           // Width of the host window
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_WIDTH: f32 = 800.0;           // Frame every slide is fitted into
pub const SLIDE_HEIGHT: f32 = 450.0;
pub const ROW_MARGIN: f32 = 30.0;             // Vertical space around each rotator
pub const SELECTOR_HEIGHT: f32 = 40.0;        // Band under the viewport holding the bullets
pub const BULLET_RADIUS: f32 = 7.0;
pub const BULLET_SPACING: f32 = 28.0;

pub const ANIMATION_DURATION: f32 = 0.4;      // Duration of a track transition (seconds)
