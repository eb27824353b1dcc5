use std::time::Duration;

use log::{debug, warn};

use crate::error::{Result, RotatorError};
use crate::operation::Operation;
use crate::scheduler::{Scheduler, TimerId};
use crate::settings::{Settings, SettingsOverride};
use crate::state::RotatorState;
use crate::surface::Surface;

/// Input a host forwards to a rotator.
#[derive(Debug, Clone, PartialEq)]
pub enum RotatorEvent {
    /// A selector link was clicked; `rel` is its target-index attribute.
    SelectorClick { rel: String },
    PointerEnter,
    PointerLeave,
}

/// Whether the host should still run its default action for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Cycles the slides of one container.
///
/// Each bound container gets its own rotator, so several can live on the same
/// page without sharing index, timer or settings.
pub struct Rotator<R: Surface, S: Scheduler> {
    surface: R,
    scheduler: S,
    settings: Settings,

    slide_widths: Vec<f32>,
    current_slide: usize,
    container_width: f32,

    // Some while rotating, never more than one registration
    timer: Option<TimerId>,
}

impl<R: Surface, S: Scheduler> Rotator<R, S> {
    pub fn new(surface: R, scheduler: S) -> Self {
        Self {
            surface,
            scheduler,
            settings: Settings::default(),
            slide_widths: Vec::new(),
            current_slide: 0,
            container_width: 0.0,
            timer: None,
        }
    }

    /// Creates and initializes one rotator per container.
    pub fn bind_all<I>(containers: I, overrides: &SettingsOverride) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = (R, S)>,
    {
        let mut rotators = Vec::new();
        for (surface, scheduler) in containers {
            let mut rotator = Rotator::new(surface, scheduler);
            rotator.initialize(overrides)?;
            rotators.push(rotator);
        }
        Ok(rotators)
    }

    /// Reads the slides, sizes the track and starts rotating.
    pub fn initialize(&mut self, overrides: &SettingsOverride) -> Result<&mut Self> {
        let settings = Settings::default().merge(overrides)?;

        self.stop_rotating();
        self.settings = settings;
        self.current_slide = 0;
        self.slide_widths = self.surface.slide_widths();
        self.surface.set_gap(self.settings.padding);

        if self.slide_widths.is_empty() {
            warn!("Rotator has no slides, nothing to rotate");
            self.container_width = 0.0;
            self.surface.set_track_width(0.0);
            self.clear_selector_ui();
            return Ok(self);
        }

        self.set_container_width();
        self.update_selector_ui(0);
        self.start_rotating();

        debug!(
            "Rotator initialized: {} slides, container width {}, every {:?}",
            self.slide_count(),
            self.container_width,
            self.settings.slide_duration
        );
        Ok(self)
    }

    fn set_container_width(&mut self) {
        let total: f32 = self.slide_widths.iter().sum();
        self.container_width = total + self.settings.padding * self.slide_count() as f32;
        self.surface.set_track_width(self.container_width);
    }

    pub fn invoke(&mut self, op: Operation) -> Result<&mut Self> {
        debug!("Invoking {}", op.name());
        match op {
            Operation::Initialize(overrides) => return self.initialize(&overrides),
            Operation::Next => self.next_slide(),
            Operation::SelectSlide(index) => self.select(index)?,
            Operation::Start => self.start_rotating(),
            Operation::Stop => self.stop_rotating(),
        }
        Ok(self)
    }

    pub fn handle(&mut self, event: RotatorEvent) -> Result<Propagation> {
        match event {
            RotatorEvent::SelectorClick { rel } => self.select_slide(&rel),
            RotatorEvent::PointerEnter => {
                self.stop_rotating();
                Ok(Propagation::Continue)
            }
            RotatorEvent::PointerLeave => {
                self.start_rotating();
                Ok(Propagation::Continue)
            }
        }
    }

    /// Selector link handler. The link's own navigation must not run afterwards.
    pub fn select_slide(&mut self, rel: &str) -> Result<Propagation> {
        let index = rel
            .trim()
            .parse::<usize>()
            .map_err(|_| RotatorError::InvalidTarget(rel.to_string()))?;
        self.select(index)?;
        Ok(Propagation::Stop)
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.slide_count() {
            return Err(RotatorError::SlideOutOfRange {
                index,
                count: self.slide_count(),
            });
        }

        self.stop_rotating();
        self.slide_to(index);
        self.update_selector_ui(index);
        self.current_slide = index;
        self.start_rotating();
        Ok(())
    }

    /// Moves the track so that `index` is in view. Leaves the current index alone.
    pub fn slide_to(&mut self, index: usize) {
        let offset = self.calculate_position(index);
        self.surface.animate_track(-offset);
    }

    pub fn start_rotating(&mut self) {
        if self.timer.is_some() || self.slide_widths.is_empty() {
            return;
        }
        self.timer = Some(self.scheduler.set_interval(self.settings.slide_duration));
        debug!("Rotation started");
    }

    pub fn stop_rotating(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.clear_interval(timer);
            debug!("Rotation stopped");
        }
    }

    pub fn next_slide(&mut self) {
        if self.slide_widths.is_empty() {
            return;
        }

        if self.current_slide == self.slide_count() - 1 {
            self.reposition_to_start();
            self.current_slide = 0;
        } else {
            self.current_slide += 1;
            self.slide_to(self.current_slide);
        }

        self.update_selector_ui(self.current_slide);
    }

    /// Wrap-around transition from the last slide back to the first.
    pub fn reposition_to_start(&mut self) {
        self.surface.animate_track(0.0);
    }

    /// Distance the track travels to show `index`.
    ///
    /// Uses the width of the target slide times its index, which only matches
    /// the layout when every slide has the same width.
    pub fn calculate_position(&self, index: usize) -> f32 {
        let width = self.slide_widths.get(index).copied().unwrap_or(0.0);
        (width + self.settings.padding) * index as f32
    }

    fn clear_selector_ui(&mut self) {
        for entry in 0..self.surface.selector_len() {
            self.surface.set_selected(entry, false);
        }
    }

    pub fn update_selector_ui(&mut self, index: usize) {
        self.clear_selector_ui();

        let entries = self.surface.selector_len();
        if index < entries {
            self.surface.set_selected(index, true);
        } else {
            debug!("No selector entry for slide {} ({} entries)", index, entries);
        }
    }

    /// Feeds elapsed time to the scheduler and advances once per timer firing.
    pub fn update(&mut self, dt: Duration) {
        for fired in self.scheduler.advance(dt) {
            if Some(fired) == self.timer {
                self.next_slide();
            }
        }
    }

    pub fn state(&self) -> RotatorState {
        if self.timer.is_some() {
            RotatorState::Rotating
        } else {
            RotatorState::Idle
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.slide_widths.len()
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
