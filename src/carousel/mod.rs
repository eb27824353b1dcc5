pub mod engine;
pub mod slide;
pub mod stage;
