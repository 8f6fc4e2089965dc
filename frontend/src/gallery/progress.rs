/// Page scroll state read from the DOM at the moment of a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Absolute vertical scroll offset of the page.
    pub scroll_y: f64,
    /// Top of the pinned region relative to the viewport (bounding box top).
    pub region_top: f64,
}

impl ScrollSample {
    /// Scroll offset at which the region's top meets the viewport top.
    ///
    /// Derived from the live bounding box on every call so the value follows
    /// any reflow of the content above the region.
    pub fn region_start(&self) -> f64 {
        self.region_top + self.scroll_y
    }
}

/// Owns the normalized scroll progress through the pinned region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressTracker {
    progress: f64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Recompute progress from a fresh sample and store it.
    pub fn update(&mut self, sample: ScrollSample, pannable_distance: f64) -> f64 {
        self.progress = scroll_progress(sample, pannable_distance);
        self.progress
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}

/// `clamp((scroll_y - region_start) / distance, 0, 1)`, zero when there is
/// nothing to pan.
pub fn scroll_progress(sample: ScrollSample, pannable_distance: f64) -> f64 {
    if !(pannable_distance > 0.0) || !pannable_distance.is_finite() {
        return 0.0;
    }
    let travelled = sample.scroll_y - sample.region_start();
    let progress = travelled / pannable_distance;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// At most one outstanding per-frame recomputation.
///
/// Triggers that arrive while a frame is already scheduled are dropped; the
/// slot is cleared when that frame runs or is cancelled.
#[derive(Debug)]
pub struct PendingFrame<T> {
    token: Option<T>,
}

impl<T> Default for PendingFrame<T> {
    fn default() -> Self {
        Self { token: None }
    }
}

impl<T> PendingFrame<T> {
    pub fn is_pending(&self) -> bool {
        self.token.is_some()
    }

    /// Store the token produced by `schedule` unless one is already held.
    /// Returns true when a new frame was scheduled.
    pub fn request(&mut self, schedule: impl FnOnce() -> Option<T>) -> bool {
        if self.token.is_some() {
            return false;
        }
        self.token = schedule();
        self.token.is_some()
    }

    /// Called from inside the frame callback.
    pub fn complete(&mut self) -> Option<T> {
        self.token.take()
    }

    pub fn cancel(&mut self, cancel: impl FnOnce(T)) {
        if let Some(token) = self.token.take() {
            cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64, region_start: f64) -> ScrollSample {
        ScrollSample {
            scroll_y,
            region_top: region_start - scroll_y,
        }
    }

    #[test]
    fn region_start_follows_bounding_box() {
        let sample = ScrollSample {
            scroll_y: 300.0,
            region_top: 450.0,
        };
        assert_eq!(sample.region_start(), 750.0);
    }

    #[test]
    fn progress_is_always_clamped() {
        for step in -50..=250 {
            let scroll_y = step as f64 * 20.0;
            let p = scroll_progress(at(scroll_y, 1000.0), 1200.0);
            assert!((0.0..=1.0).contains(&p), "progress {} at {}", p, scroll_y);
        }
    }

    #[test]
    fn progress_is_monotonic_inside_region() {
        let mut last = 0.0;
        for step in 0..=120 {
            let scroll_y = 1000.0 + step as f64 * 10.0;
            let p = scroll_progress(at(scroll_y, 1000.0), 1200.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(scroll_progress(at(1000.0, 1000.0), 1200.0), 0.0);
        assert_eq!(scroll_progress(at(400.0, 1000.0), 1200.0), 0.0);
        assert_eq!(scroll_progress(at(2200.0, 1000.0), 1200.0), 1.0);
        assert_eq!(scroll_progress(at(9000.0, 1000.0), 1200.0), 1.0);
        assert_eq!(scroll_progress(at(1600.0, 1000.0), 1200.0), 0.5);
    }

    #[test]
    fn zero_distance_never_divides() {
        for scroll_y in [0.0, 500.0, 1e9] {
            let p = scroll_progress(at(scroll_y, 100.0), 0.0);
            assert_eq!(p, 0.0);
        }
        assert_eq!(scroll_progress(at(10.0, 0.0), f64::NAN), 0.0);
    }

    #[test]
    fn tracker_keeps_latest_value() {
        let mut tracker = ProgressTracker::new();
        tracker.update(at(1300.0, 1000.0), 600.0);
        assert_eq!(tracker.progress(), 0.5);
        tracker.reset();
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn pending_frame_coalesces_requests() {
        let mut pending = PendingFrame::default();
        let mut issued = 0;
        for _ in 0..5 {
            pending.request(|| {
                issued += 1;
                Some(issued)
            });
        }
        assert_eq!(issued, 1);
        assert_eq!(pending.complete(), Some(1));
        assert!(!pending.is_pending());

        assert!(!pending.request(|| None));
        assert!(!pending.is_pending());

        assert!(pending.request(|| Some(7)));
        let mut cancelled = Vec::new();
        pending.cancel(|token| cancelled.push(token));
        assert_eq!(cancelled, vec![7]);
        assert!(!pending.is_pending());
    }
}
