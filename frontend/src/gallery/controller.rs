use super::layout::LayoutMeasurer;
use super::motion::{MotionMapper, SpringConfig};
use super::progress::{PendingFrame, ProgressTracker, ScrollSample};

/// Host hook for "run me on the next rendered frame".
///
/// In the browser this is `requestAnimationFrame`; tests use a recorder.
/// `None` means the host could not schedule a frame.
pub trait FrameScheduler {
    type Token;

    fn request_frame(&mut self) -> Option<Self::Token>;
    fn cancel_frame(&mut self, token: Self::Token);
}

/// Read-only copy of the gallery state handed to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GallerySnapshot {
    pub progress: f64,
    pub pannable_distance: f64,
    pub viewport_width: f64,
    pub target_offset: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

/// Turns vertical scrolling through the pinned region into a smoothed
/// horizontal pan of the card row.
///
/// All measured values are owned here. Scroll and resize triggers only
/// schedule work; the recomputation itself happens in `on_frame`, at most
/// once per frame.
pub struct GalleryController<S: FrameScheduler> {
    layout: LayoutMeasurer,
    tracker: ProgressTracker,
    motion: MotionMapper,
    scheduler: S,
    pending: PendingFrame<S::Token>,
    last_frame_ms: Option<f64>,
    lifecycle: Lifecycle,
}

impl<S: FrameScheduler> GalleryController<S> {
    pub fn new(card_count: usize, physics: SpringConfig, scheduler: S) -> Self {
        Self {
            layout: LayoutMeasurer::new(card_count),
            tracker: ProgressTracker::new(),
            motion: MotionMapper::new(physics),
            scheduler,
            pending: PendingFrame::default(),
            last_frame_ms: None,
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Measure the initial layout and establish progress straight away so a
    /// page restored mid-scroll starts in the right place. The row is placed
    /// at its target without animating.
    pub fn mount(
        &mut self,
        content_width: Option<f64>,
        viewport_width: Option<f64>,
        sample: Option<ScrollSample>,
    ) -> Option<GallerySnapshot> {
        if self.lifecycle != Lifecycle::Created {
            return None;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.layout.measure(content_width);
        if let Some(width) = viewport_width {
            self.layout.observe_viewport(width);
        }
        let progress = self.update_progress(sample);
        self.motion.jump(
            progress,
            self.layout.pannable_distance(),
            self.layout.viewport_width(),
        );
        Some(self.snapshot())
    }

    /// Feed a new row width. Returns true if the pannable distance changed.
    pub fn measure(&mut self, content_width: Option<f64>) -> bool {
        if !self.is_active() {
            return false;
        }
        let changed = self.layout.measure(content_width);
        if changed {
            self.request_frame();
        }
        changed
    }

    pub fn observe_viewport(&mut self, width: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        let changed = self.layout.observe_viewport(width);
        if changed {
            self.request_frame();
        }
        changed
    }

    /// Returns true if this trigger scheduled a new frame.
    pub fn on_scroll(&mut self) -> bool {
        self.request_frame()
    }

    pub fn on_resize(&mut self) -> bool {
        self.request_frame()
    }

    /// Frame callback: recompute progress from a fresh sample, advance the
    /// spring and keep animating until it comes to rest. A missing sample
    /// (region not in the document) counts as no progress.
    pub fn on_frame(
        &mut self,
        now_ms: f64,
        sample: Option<ScrollSample>,
    ) -> Option<GallerySnapshot> {
        if !self.is_active() {
            return None;
        }
        self.pending.complete();

        let elapsed = match self.last_frame_ms {
            Some(previous) if now_ms >= previous => now_ms - previous,
            _ => 0.0,
        };

        let progress = self.update_progress(sample);
        self.motion.drive(
            progress,
            self.layout.pannable_distance(),
            self.layout.viewport_width(),
            elapsed,
        );

        if self.motion.is_settled() {
            self.last_frame_ms = None;
        } else {
            self.last_frame_ms = Some(now_ms);
            self.request_frame();
        }

        Some(self.snapshot())
    }

    /// Cancel any scheduled frame and stop reacting to triggers.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.lifecycle = Lifecycle::TornDown;
        let scheduler = &mut self.scheduler;
        self.pending.cancel(|token| scheduler.cancel_frame(token));
        self.last_frame_ms = None;
        log::debug!("gallery controller torn down");
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            progress: self.tracker.progress(),
            pannable_distance: self.layout.pannable_distance(),
            viewport_width: self.layout.viewport_width(),
            target_offset: self.motion.target(),
            offset: self.motion.offset(),
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn update_progress(&mut self, sample: Option<ScrollSample>) -> f64 {
        match sample {
            Some(sample) => self.tracker.update(sample, self.layout.pannable_distance()),
            None => {
                self.tracker.reset();
                0.0
            }
        }
    }

    fn request_frame(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let scheduler = &mut self.scheduler;
        self.pending.request(|| scheduler.request_frame())
    }
}

impl<S: FrameScheduler> Drop for GalleryController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
