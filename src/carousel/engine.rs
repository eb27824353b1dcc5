use std::time::Duration;

use log::error;
use raylib::prelude::*;

use crate::carousel::stage::Stage;
use crate::constants::*;
use crate::operation::Operation;
use crate::rotator::{Rotator, RotatorEvent};
use crate::scheduler::FrameScheduler;

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

struct Row {
    rotator: Rotator<Stage, FrameScheduler>,
    hovering: bool,
}

/// Hosts one rotator per image directory, stacked top to bottom.
#[derive(Default)]
pub struct CarouselEngine {
    rows: Vec<Row>,
}

impl CarouselEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport of the `row`-th rotator.
    pub fn viewport_for(row: usize) -> Rectangle {
        let row_height = SLIDE_HEIGHT + SELECTOR_HEIGHT + ROW_MARGIN;
        Rectangle::new(
            (WINDOW_WIDTH as f32 - SLIDE_WIDTH) * 0.5,
            ROW_MARGIN + row as f32 * row_height,
            SLIDE_WIDTH,
            SLIDE_HEIGHT,
        )
    }

    pub fn window_height(rows: usize) -> i32 {
        let row_height = SLIDE_HEIGHT + SELECTOR_HEIGHT + ROW_MARGIN;
        (ROW_MARGIN + rows.max(1) as f32 * row_height) as i32
    }

    pub fn push(&mut self, rotator: Rotator<Stage, FrameScheduler>) {
        self.rows.push(Row {
            rotator,
            hovering: false,
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn invoke_all(&mut self, op: Operation) {
        for row in self.rows.iter_mut() {
            if let Operation::SelectSlide(index) = op
                && index >= row.rotator.slide_count()
            {
                continue;
            }
            if let Err(e) = row.rotator.invoke(op.clone()) {
                error!("Operation {} failed: {}", op.name(), e);
            }
        }
    }
}

impl crate::engine::Engine for CarouselEngine {
    fn handle_input(&mut self, rl: &RaylibHandle) {
        let mouse = rl.get_mouse_position();
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

        for row in self.rows.iter_mut() {
            // Enter/leave fire on the edge only
            let hovering = row.rotator.surface().hovers_slide(mouse);
            if hovering != row.hovering {
                row.hovering = hovering;
                let event = if hovering {
                    RotatorEvent::PointerEnter
                } else {
                    RotatorEvent::PointerLeave
                };
                if let Err(e) = row.rotator.handle(event) {
                    error!("Hover handling failed: {}", e);
                }
            }

            if clicked && let Some(rel) = row.rotator.surface().bullet_at(mouse) {
                if let Err(e) = row.rotator.handle(RotatorEvent::SelectorClick { rel }) {
                    error!("Selector click failed: {}", e);
                }
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_N) {
            self.invoke_all(Operation::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            self.invoke_all(Operation::Stop);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.invoke_all(Operation::Start);
        }
        for (index, key) in DIGIT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                self.invoke_all(Operation::SelectSlide(index));
            }
        }
    }

    fn update(&mut self, dt: f32) {
        let elapsed = Duration::from_secs_f32(dt.max(0.0));
        for row in self.rows.iter_mut() {
            row.rotator.update(elapsed);
            row.rotator.surface_mut().update(dt);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        for row in self.rows.iter() {
            row.rotator.surface().draw(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_do_not_overlap() {
        let first = CarouselEngine::viewport_for(0);
        let second = CarouselEngine::viewport_for(1);

        assert_eq!(first.width, SLIDE_WIDTH);
        assert!(second.y >= first.y + first.height + SELECTOR_HEIGHT);
        assert!(CarouselEngine::window_height(2) as f32 >= second.y + second.height + SELECTOR_HEIGHT);
    }
}
