/// Tracks how wide the card row is and how much of it can be panned.
///
/// The pannable distance is `card_width * (card_count - 1)` where the card
/// width is the measured row width split evenly across the cards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMeasurer {
    card_count: usize,
    pannable_distance: f64,
    viewport_width: f64,
}

impl LayoutMeasurer {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            pannable_distance: 0.0,
            viewport_width: 0.0,
        }
    }

    /// Re-measure from the row's total content width.
    ///
    /// `None` means the row is not attached yet. Results that are not
    /// positive are treated as "not measurable yet" and the previous
    /// distance is kept. Returns true when the distance changed.
    pub fn measure(&mut self, content_width: Option<f64>) -> bool {
        let Some(content_width) = content_width else {
            return false;
        };
        if self.card_count == 0 || !content_width.is_finite() {
            return false;
        }

        let card_width = content_width / self.card_count as f64;
        let distance = card_width * (self.card_count - 1) as f64;
        if distance <= 0.0 || distance == self.pannable_distance {
            return false;
        }

        log::debug!(
            "gallery measured: card width {}px, pannable {}px",
            card_width,
            distance
        );
        self.pannable_distance = distance;
        true
    }

    /// Record the latest observed viewport width. Returns true on change.
    pub fn observe_viewport(&mut self, width: f64) -> bool {
        if !width.is_finite() || width < 0.0 || width == self.viewport_width {
            return false;
        }
        self.viewport_width = width;
        true
    }

    pub fn pannable_distance(&self) -> f64 {
        self.pannable_distance
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cards_pan_across_two_widths() {
        let mut layout = LayoutMeasurer::new(3);
        assert!(layout.measure(Some(1500.0)));
        assert_eq!(layout.pannable_distance(), 1000.0);
    }

    #[test]
    fn resize_remeasures_without_reset() {
        let mut layout = LayoutMeasurer::new(3);
        layout.measure(Some(1500.0));
        layout.observe_viewport(500.0);

        assert!(layout.measure(Some(1800.0)));
        assert!(layout.observe_viewport(600.0));
        assert_eq!(layout.pannable_distance(), 1200.0);
        assert_eq!(layout.viewport_width(), 600.0);
    }

    #[test]
    fn detached_row_is_a_no_op() {
        let mut layout = LayoutMeasurer::new(3);
        layout.measure(Some(900.0));
        assert!(!layout.measure(None));
        assert_eq!(layout.pannable_distance(), 600.0);
    }

    #[test]
    fn single_card_never_pans() {
        let mut layout = LayoutMeasurer::new(1);
        assert!(!layout.measure(Some(800.0)));
        assert_eq!(layout.pannable_distance(), 0.0);
    }

    #[test]
    fn collapsed_row_keeps_previous_distance() {
        let mut layout = LayoutMeasurer::new(4);
        layout.measure(Some(2000.0));
        assert!(!layout.measure(Some(0.0)));
        assert!(!layout.measure(Some(f64::NAN)));
        assert_eq!(layout.pannable_distance(), 1500.0);
    }

    #[test]
    fn empty_card_set_stays_unmeasured() {
        let mut layout = LayoutMeasurer::new(0);
        assert!(!layout.measure(Some(1000.0)));
        assert_eq!(layout.pannable_distance(), 0.0);
    }

    #[test]
    fn bogus_viewport_widths_are_ignored() {
        let mut layout = LayoutMeasurer::new(2);
        layout.observe_viewport(320.0);
        assert!(!layout.observe_viewport(-1.0));
        assert!(!layout.observe_viewport(f64::INFINITY));
        assert!(!layout.observe_viewport(320.0));
        assert_eq!(layout.viewport_width(), 320.0);
    }
}
