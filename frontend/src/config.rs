
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

// Campaign results gallery
pub const GALLERY_SPRING_DAMPING: f64 = 20.0;
pub const GALLERY_SPRING_MASS: f64 = 0.1;
pub const GALLERY_SPRING_STIFFNESS: f64 = 100.0;
/// Re-measure after mount once images and fonts had a chance to lay out.
pub const GALLERY_SETTLE_DELAY_MS: u32 = 100;

// Social proof pop-up
pub const NOTIFICATION_MIN_WAIT_MS: u32 = 3_500;
pub const NOTIFICATION_WAIT_JITTER_MS: u32 = 3_000;
pub const NOTIFICATION_VISIBLE_MS: u32 = 3_500;

// Strategy call form
pub const FORM_SUCCESS_VISIBLE_MS: u32 = 5_000;

/// Price raise deadline shown in the hero, relative to page load.
pub const COUNTDOWN_HORIZON_MINUTES: i64 = 7 * 24 * 53;
