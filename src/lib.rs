//! Timer-driven slide rotator: a controller that cycles a horizontal track of
//! slides behind a fixed viewport, pauses on hover and jumps on selector clicks.

pub mod carousel;
pub mod constants;
pub mod engine;
pub mod error;
pub mod operation;
pub mod rotator;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod surface;
pub mod texture_loader;

pub use error::{Result, RotatorError};
pub use operation::Operation;
pub use rotator::{Propagation, Rotator, RotatorEvent};
pub use scheduler::{FrameScheduler, Scheduler, TimerId};
pub use settings::{Settings, SettingsOverride};
pub use state::RotatorState;
pub use surface::Surface;
