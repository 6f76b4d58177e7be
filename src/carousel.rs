//! Index-based carousel for the programs section.
//!
//! A [`Carousel`] cycles over a fixed number of slides. Every slide gets a
//! [`SlideRole`] from its offset to the current index: the current slide is
//! centered, its successor sits to the right, its predecessor to the left,
//! and everything else is hidden.
//!
//! ## Autoplay
//!
//! While the carousel is not paused it owns an [`Autoplay`] timer that
//! advances one slide per interval. Pausing drops the timer; resuming
//! acquires a new one whose elapsed time starts from zero. Time is fed in
//! explicitly through [`Carousel::tick`], which keeps the model deterministic
//! under test and lets the page script mirror it with `setInterval`.
//!
//! There are two ways to pause:
//!
//! - **Hover**: the pointer entering the slides pauses, leaving resumes.
//! - **Manual navigation**: `advance`, `retreat` and `jump_to` halt autoplay
//!   for good. Only [`Carousel::reset`] (a fresh mount) starts it again.
//!
//! ## Layout
//!
//! Below a viewport width threshold the offset layout gives way to a plain
//! stacked list of every slide; see [`layout_for`].

use std::time::Duration;
use thiserror::Error;

/// Autoplay interval used when the config does not set one.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Viewport width (px) below which slides are stacked.
pub const DEFAULT_STACK_BELOW: u32 = 768;

#[derive(Error, Debug, PartialEq)]
pub enum CarouselError {
    #[error("Carousel needs at least one slide")]
    Empty,
    #[error("Autoplay interval must be non-zero")]
    ZeroInterval,
    #[error("Slide {index} out of bounds for {len} slides")]
    OutOfBounds { index: usize, len: usize },
}

/// Position of a slide relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    Next,
    Previous,
    Hidden,
}

impl SlideRole {
    /// Value of the `data-role` attribute the stylesheet keys on.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Hidden => "hidden",
        }
    }
}

/// How the carousel is laid out at a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselLayout {
    Offset,
    Stacked,
}

pub fn layout_for(viewport_width: u32, stack_below: u32) -> CarouselLayout {
    if viewport_width < stack_below {
        CarouselLayout::Stacked
    } else {
        CarouselLayout::Offset
    }
}

/// A running autoplay timer. Exists only while the carousel plays.
#[derive(Debug)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
}

impl Autoplay {
    fn start(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulate time and return how many intervals completed.
    fn elapse(&mut self, time: Duration) -> usize {
        let total = self.elapsed.saturating_add(time).as_nanos();
        let interval = self.interval.as_nanos();
        let remainder = total % interval;
        // remainder < interval, so it fits back into a Duration.
        self.elapsed = Duration::new(
            (remainder / 1_000_000_000) as u64,
            (remainder % 1_000_000_000) as u32,
        );
        usize::try_from(total / interval).unwrap_or(usize::MAX)
    }
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    interval: Duration,
    hovered: bool,
    halted: bool,
    autoplay: Option<Autoplay>,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            len,
            current: 0,
            interval,
            hovered: false,
            halted: false,
            autoplay: Some(Autoplay::start(interval)),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.halted
    }

    /// True while an autoplay timer is held.
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Manual step forward. Halts autoplay.
    pub fn advance(&mut self) {
        self.halt();
        self.step_forward();
    }

    /// Manual step back. Halts autoplay.
    pub fn retreat(&mut self) {
        self.halt();
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Manual jump to a slide. Halts autoplay, even when out of bounds.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.halt();
        if index >= self.len {
            return Err(CarouselError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.sync_timer();
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.sync_timer();
    }

    /// Feed elapsed time to the autoplay timer. Returns the slides advanced.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let fired = match self.autoplay.as_mut() {
            Some(timer) => timer.elapse(elapsed),
            None => 0,
        };
        self.current = (self.current + fired % self.len) % self.len;
        fired
    }

    /// Back to the first slide with autoplay running, as on a fresh mount.
    pub fn reset(&mut self) {
        self.current = 0;
        self.hovered = false;
        self.halted = false;
        self.sync_timer();
    }

    /// Role of slide `index` given the current slide.
    pub fn role_of(&self, index: usize) -> SlideRole {
        let offset = (index % self.len + self.len - self.current) % self.len;
        if offset == 0 {
            SlideRole::Active
        } else if offset == 1 {
            SlideRole::Next
        } else if offset == self.len - 1 {
            SlideRole::Previous
        } else {
            SlideRole::Hidden
        }
    }

    /// Roles of every slide, in slide order.
    pub fn roles(&self) -> Vec<SlideRole> {
        (0..self.len).map(|i| self.role_of(i)).collect()
    }

    fn step_forward(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    fn halt(&mut self) {
        self.halted = true;
        self.sync_timer();
    }

    /// Hold a timer exactly while not paused.
    fn sync_timer(&mut self) {
        if self.is_paused() {
            self.autoplay = None;
        } else if self.autoplay.is_none() {
            self.autoplay = Some(Autoplay::start(self.interval));
        }
    }
}
