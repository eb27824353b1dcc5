use raylib::prelude::*;

/// One image fitted into the fixed slide frame.
pub struct Slide {
    image: Texture2D,
    frame: Vector2,
    scale: f32,
}

impl Slide {
    pub fn new(image: Texture2D, frame: Vector2) -> Self {
        // Scale down (never up) so the whole image fits the frame
        let scale = (frame.x / image.width() as f32)
            .min(frame.y / image.height() as f32)
            .min(1.0);

        Self { image, frame, scale }
    }

    /// Rendered width. Every slide occupies its full frame.
    pub fn width(&self) -> f32 {
        self.frame.x
    }

    pub fn height(&self) -> f32 {
        self.frame.y
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, x: f32, y: f32) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        // Centered in the frame, letterboxed on the short side
        let dest = Rectangle::new(
            x + (self.frame.x - scaled_width) * 0.5,
            y + (self.frame.y - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
