//! Horizontal swipe classification.

use crate::config::gesture::{SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX};
use crate::utils::console;

/// Direction a classified swipe navigates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Rightward swipe: go to the previous theme.
    Prev,
    /// Leftward swipe: go to the next theme.
    Next,
}

/// Distance and duration limits for a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Horizontal travel must exceed this (CSS pixels).
    pub min_distance_px: f64,
    /// Elapsed time must stay below this (milliseconds).
    pub max_duration_ms: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            min_distance_px: SWIPE_MIN_DISTANCE_PX,
            max_duration_ms: SWIPE_MAX_DURATION_MS,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SwipeSample {
    start_x: f64,
    start_time_ms: f64,
}

/// Turns a start/end pointer pair into a discrete swipe.
///
/// The start sample is discarded as soon as the gesture is classified.
#[derive(Debug, Default)]
pub struct GestureDetector {
    thresholds: GestureThresholds,
    sample: Option<SwipeSample>,
}

impl GestureDetector {
    #[allow(dead_code)]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            sample: None,
        }
    }

    /// Record the start of a gesture, replacing any unfinished one.
    pub fn on_start(&mut self, x: f64, time_ms: f64) {
        self.sample = Some(SwipeSample {
            start_x: x,
            start_time_ms: time_ms,
        });
    }

    /// Classify the gesture that ends at `(x, time_ms)`.
    ///
    /// An end without a recorded start is a caller bug; it is logged and
    /// classified as no swipe.
    pub fn on_end(&mut self, x: f64, time_ms: f64) -> Option<SwipeDirection> {
        let Some(sample) = self.sample.take() else {
            console::warn("swipe ended without a recorded start");
            return None;
        };

        let dx = x - sample.start_x;
        let dt = time_ms - sample.start_time_ms;

        if dt >= self.thresholds.max_duration_ms || dx.abs() <= self.thresholds.min_distance_px {
            return None;
        }

        if dx < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    }

    /// Drop an in-progress gesture (touch cancelled).
    pub fn cancel(&mut self) {
        self.sample = None;
    }
}
