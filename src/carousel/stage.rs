use std::path::PathBuf;

use log::{info, warn};
use raylib::prelude::*;

use crate::carousel::slide::Slide;
use crate::constants::*;
use crate::surface::Surface;
use crate::texture_loader::load_texture_with_exif_rotation;

/// A slide track behind a fixed viewport, with its selector bullets underneath.
pub struct Stage {
    slides: Vec<Slide>,
    viewport: Rectangle,
    gap: f32,

    track_width: f32,
    margin_left: f32,
    target_margin: f32,
    tween_margin: Option<ease::Tween>,
    animation_timer: f32,

    selected: Vec<bool>,
}

impl Stage {
    pub fn new(slides: Vec<Slide>, viewport: Rectangle, gap: f32) -> Self {
        let selected = vec![false; slides.len()];
        Self {
            slides,
            viewport,
            gap,
            track_width: 0.0,
            margin_left: 0.0,
            target_margin: 0.0,
            tween_margin: None,
            animation_timer: 0.0,
            selected,
        }
    }

    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        paths: &[PathBuf],
        viewport: Rectangle,
        gap: f32,
    ) -> Self {
        let frame = Vector2::new(viewport.width, viewport.height);
        let mut slides = Vec::new();

        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(image) => slides.push(Slide::new(image, frame)),
                Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
            }
        }

        info!("Loaded {} of {} slides", slides.len(), paths.len());
        Self::new(slides, viewport, gap)
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween_margin.as_mut() else {
            return;
        };

        self.margin_left = tween.apply(dt);
        self.animation_timer += dt;

        if self.animation_timer >= ANIMATION_DURATION {
            self.margin_left = self.target_margin;
            self.tween_margin = None;
        }
    }

    pub fn margin_left(&self) -> f32 {
        self.margin_left
    }

    fn widths(&self) -> Vec<f32> {
        self.slides.iter().map(|slide| slide.width()).collect()
    }

    /// Whether `point` is over a slide item inside the viewport.
    pub fn hovers_slide(&self, point: Vector2) -> bool {
        slide_at(self.viewport, &self.widths(), self.gap, self.margin_left, point).is_some()
    }

    /// Target-index attribute of the bullet under `point`, if any.
    pub fn bullet_at(&self, point: Vector2) -> Option<String> {
        bullet_at(self.viewport, self.selected.len(), point).map(|i| i.to_string())
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let vp = self.viewport;

        // Track strip, sized by the rotator
        d.draw_rectangle_rec(
            Rectangle::new(vp.x + self.margin_left, vp.y, self.track_width, vp.height),
            Color::new(24, 24, 24, 255),
        );

        let widths = self.widths();
        for (i, slide) in self.slides.iter().enumerate() {
            let x = vp.x + self.margin_left + slide_offset(&widths, self.gap, i);
            // Only what overlaps the viewport
            if x + slide.width() > vp.x && x < vp.x + vp.width {
                slide.draw(d, x, vp.y);
            }
        }

        // Mask what slid out of the viewport
        let screen_width = d.get_screen_width() as f32;
        d.draw_rectangle_rec(Rectangle::new(0.0, vp.y, vp.x, vp.height), Color::BLACK);
        d.draw_rectangle_rec(
            Rectangle::new(vp.x + vp.width, vp.y, screen_width - vp.x - vp.width, vp.height),
            Color::BLACK,
        );
        d.draw_rectangle_lines(vp.x as i32, vp.y as i32, vp.width as i32, vp.height as i32, Color::DARKGRAY);

        for (i, selected) in self.selected.iter().enumerate() {
            let center = bullet_center(vp, self.selected.len(), i);
            if *selected {
                d.draw_circle_v(center, BULLET_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_lines(center.x as i32, center.y as i32, BULLET_RADIUS, Color::GRAY);
            }
        }
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x < rect.x + rect.width && point.y >= rect.y && point.y < rect.y + rect.height
}

/// Distance from the track start to the left edge of slide `index`.
pub fn slide_offset(widths: &[f32], gap: f32, index: usize) -> f32 {
    widths[..index.min(widths.len())].iter().map(|width| width + gap).sum()
}

/// Slide under `point`, counting only what shows through the viewport.
pub fn slide_at(viewport: Rectangle, widths: &[f32], gap: f32, margin_left: f32, point: Vector2) -> Option<usize> {
    if !contains(&viewport, point) {
        return None;
    }

    (0..widths.len()).find(|&i| {
        let x = viewport.x + margin_left + slide_offset(widths, gap, i);
        point.x >= x && point.x < x + widths[i]
    })
}

/// Bullets are centered as a row under the viewport.
pub fn bullet_center(viewport: Rectangle, count: usize, index: usize) -> Vector2 {
    let first = viewport.x + viewport.width * 0.5 - (count as f32 - 1.0) * BULLET_SPACING * 0.5;
    Vector2::new(
        first + index as f32 * BULLET_SPACING,
        viewport.y + viewport.height + SELECTOR_HEIGHT * 0.5,
    )
}

pub fn bullet_at(viewport: Rectangle, count: usize, point: Vector2) -> Option<usize> {
    // A little slack around the dot
    let reach = BULLET_RADIUS + 3.0;
    (0..count).find(|&i| {
        let center = bullet_center(viewport, count, i);
        let (dx, dy) = (point.x - center.x, point.y - center.y);
        dx * dx + dy * dy <= reach * reach
    })
}

impl Surface for Stage {
    fn slide_widths(&self) -> Vec<f32> {
        self.widths()
    }

    fn set_track_width(&mut self, width: f32) {
        self.track_width = width;
    }

    fn set_gap(&mut self, gap: f32) {
        self.gap = gap;
    }

    fn animate_track(&mut self, margin_left: f32) {
        // Retarget from wherever the track is now, an in-flight move is not finished first
        self.target_margin = margin_left;
        self.animation_timer = 0.0;
        self.tween_margin = Some(ease::Tween::new(
            ease::sine_in_out,
            self.margin_left,
            margin_left,
            ANIMATION_DURATION,
        ));
    }

    fn selector_len(&self) -> usize {
        self.selected.len()
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(entry) = self.selected.get_mut(index) {
            *entry = selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rectangle {
        Rectangle::new(100.0, 50.0, 200.0, 100.0)
    }

    #[test]
    fn test_slide_offset_sums_preceding_slides() {
        let widths = [200.0, 300.0, 200.0];

        assert_eq!(slide_offset(&widths, 35.0, 0), 0.0);
        assert_eq!(slide_offset(&widths, 35.0, 1), 235.0);
        assert_eq!(slide_offset(&widths, 35.0, 2), 570.0);
    }

    #[test]
    fn test_slide_hit_follows_margin() {
        let widths = [200.0, 200.0, 200.0];

        assert_eq!(slide_at(viewport(), &widths, 35.0, 0.0, Vector2::new(150.0, 80.0)), Some(0));
        // Track moved to slide 1
        assert_eq!(slide_at(viewport(), &widths, 35.0, -235.0, Vector2::new(150.0, 80.0)), Some(1));
        // In the gap between two slides
        assert_eq!(slide_at(viewport(), &widths, 35.0, -210.0, Vector2::new(110.0, 80.0)), None);
        // Outside the viewport, even where the track continues
        assert_eq!(slide_at(viewport(), &widths, 35.0, 0.0, Vector2::new(350.0, 80.0)), None);
        assert_eq!(slide_at(viewport(), &widths, 35.0, 0.0, Vector2::new(150.0, 20.0)), None);
    }

    #[test]
    fn test_bullet_hit() {
        let center = bullet_center(viewport(), 3, 2);
        assert_eq!(center.x, 200.0 + BULLET_SPACING);
        assert_eq!(center.y, 150.0 + SELECTOR_HEIGHT * 0.5);

        assert_eq!(bullet_at(viewport(), 3, center), Some(2));
        assert_eq!(bullet_at(viewport(), 3, Vector2::new(center.x + 2.0, center.y - 2.0)), Some(2));
        assert_eq!(bullet_at(viewport(), 3, Vector2::new(center.x - BULLET_SPACING * 0.5, center.y)), None);
        assert_eq!(bullet_at(viewport(), 0, center), None);
    }

    #[test]
    fn test_new_transition_starts_from_current_margin() {
        let mut stage = Stage::new(Vec::new(), viewport(), 35.0);

        stage.animate_track(-800.0);
        stage.update(ANIMATION_DURATION * 0.5);
        let halfway = stage.margin_left();
        assert!(halfway < 0.0 && halfway > -800.0);

        stage.animate_track(0.0);
        stage.update(0.0);
        assert!((stage.margin_left() - halfway).abs() < 1e-3);

        stage.update(ANIMATION_DURATION);
        assert_eq!(stage.margin_left(), 0.0);
    }

    #[test]
    fn test_gap_follows_rotator() {
        let mut stage = Stage::new(Vec::new(), viewport(), 10.0);
        stage.set_gap(35.0);
        assert_eq!(stage.gap, 35.0);
    }
}
