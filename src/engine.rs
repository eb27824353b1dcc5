use raylib::prelude::*;

/// A frame-driven host: read input, advance time, draw.
pub trait Engine {
    fn handle_input(&mut self, rl: &RaylibHandle);
    fn update(&mut self, dt: f32);
    fn draw(&self, d: &mut RaylibDrawHandle);
}
