use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);
/// Minimum horizontal travel, in CSS pixels, for a touch to count as a
/// swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
}

/// Testimonial carousel.
///
/// The active index always stays in `0..len`; moving past either end
/// wraps around.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    swipe_threshold: f32,
    hovered: bool,
    last_change: Duration,
    touch_start: Option<f32>,
}

impl Carousel {
    /// Returns `None` for an empty carousel.
    pub fn new(len: usize, now: Duration) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 0,
            interval: AUTOPLAY_INTERVAL,
            swipe_threshold: SWIPE_THRESHOLD,
            hovered: false,
            last_change: now,
            touch_start: None,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    pub fn next(&mut self, now: Duration) {
        self.go_to(self.index + 1, now);
    }

    pub fn prev(&mut self, now: Duration) {
        self.go_to(self.index + self.len - 1, now);
    }

    pub fn go_to(&mut self, index: usize, now: Duration) {
        self.index = index % self.len;
        self.last_change = now;
    }

    /// Pointer entered or left the carousel. Leaving restarts the
    /// autoplay clock so the user gets a full interval on the slide they
    /// were looking at.
    pub fn set_hovered(&mut self, hovered: bool, now: Duration) {
        if self.hovered && !hovered {
            self.last_change = now;
        }
        self.hovered = hovered;
    }

    /// Autoplay. Returns whether the slide changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.hovered || self.len == 1 {
            return false;
        }
        if now.saturating_sub(self.last_change) < self.interval {
            return false;
        }
        self.next(now);
        true
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_start = Some(x);
    }

    pub fn touch_end(&mut self, x: f32, now: Duration) -> Option<Swipe> {
        let start = self.touch_start.take()?;
        let dx = x - start;
        if dx.abs() <= self.swipe_threshold {
            return None;
        }

        // Dragging left reveals the next slide.
        if dx < 0.0 {
            self.next(now);
            Some(Swipe::Next)
        } else {
            self.prev(now);
            Some(Swipe::Previous)
        }
    }
}
