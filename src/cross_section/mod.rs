//! Animated boundary cross-section.
//!
//! `CrossSection` owns a triangle-wave `Oscillator` and, while a boundary
//! type is set, a `RepeatingTimer`. Changing the type cancels the running
//! timer before anything else happens, so no frame for the old type can be
//! emitted afterwards.

pub mod oscillator;
pub mod scene;
pub mod timer;

use std::time::{Duration, Instant};

use crate::config::ExplorerConfig;
use crate::render::Scene;

pub use oscillator::Oscillator;
pub use scene::CrossSectionKind;
pub use timer::RepeatingTimer;

/// One timer pulse worth of drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Generation of the timer that produced this frame
    pub generation: u64,
    pub kind: CrossSectionKind,
    pub tick: u32,
}

impl Frame {
    pub fn scene(&self) -> Scene {
        scene::build(self.kind, self.tick)
    }
}

/// Receives frames as the timer fires.
pub trait FrameSink {
    fn draw(&mut self, frame: Frame);
}

impl<F: FnMut(Frame)> FrameSink for F {
    fn draw(&mut self, frame: Frame) {
        self(frame)
    }
}

pub struct CrossSection {
    boundary_type: Option<String>,
    kind: CrossSectionKind,
    oscillator: Oscillator,
    timer: Option<RepeatingTimer>,
    period: Duration,
    /// Tick of the last emitted frame
    last_tick: Option<u32>,
    /// Count of timers started, for diagnostics
    generation: u64,
}

impl CrossSection {
    pub fn new(period: Duration, max_tick: u32) -> Self {
        Self {
            boundary_type: None,
            kind: CrossSectionKind::Unavailable,
            oscillator: Oscillator::new(max_tick),
            timer: None,
            period,
            last_tick: None,
            generation: 0,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.cross_section_period, config.cross_section_max_tick)
    }

    pub fn boundary_type(&self) -> Option<&str> {
        self.boundary_type.as_deref()
    }

    pub fn kind(&self) -> CrossSectionKind {
        self.kind
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&self) -> u32 {
        self.oscillator.tick()
    }

    /// Set the input type. An empty string counts as absent.
    ///
    /// Returns `true` if the input changed (and the timer was restarted).
    pub fn set_type(&mut self, boundary_type: Option<&str>, now: Instant) -> bool {
        let next = boundary_type.filter(|t| !t.is_empty());
        if next == self.boundary_type.as_deref() {
            return false;
        }

        self.cancel();
        self.oscillator.reset();
        self.last_tick = None;
        self.boundary_type = next.map(str::to_string);
        self.kind = next.map_or(CrossSectionKind::Unavailable, CrossSectionKind::parse);

        if let Some(t) = next {
            self.timer = Some(RepeatingTimer::start(self.period, now));
            self.generation += 1;
            log::debug!(
                "cross-section timer #{} started for {:?} ({:?})",
                self.generation,
                t,
                self.kind
            );
        }
        true
    }

    /// Emit one frame per due pulse, advancing the oscillator after each.
    ///
    /// Returns the number of frames emitted.
    pub fn poll<S: FrameSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let pulses = timer.due_pulses(now);
        for _ in 0..pulses {
            let tick = self.oscillator.tick();
            sink.draw(Frame {
                generation: self.generation,
                kind: self.kind,
                tick,
            });
            self.last_tick = Some(tick);
            self.oscillator.step();
        }
        pulses
    }

    /// Delay until the next pulse, if a timer is running.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.time_until_next(now))
    }

    /// Scene for the most recently emitted frame.
    pub fn current_scene(&self) -> Option<Scene> {
        self.last_tick.map(|tick| scene::build(self.kind, tick))
    }

    fn cancel(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("cross-section timer #{} cancelled", self.generation);
        }
    }

    /// Stop animating. The input type is kept.
    pub fn teardown(&mut self) {
        self.cancel();
    }
}
