use gloo_timers::callback::Timeout;

use crate::config;

/// One reusable delayed task. Arming replaces the previous timeout, which
/// cancels it; dropping the task cancels whatever is still armed.
#[derive(Default)]
pub struct DelayedTask {
    timeout: Option<Timeout>,
}

impl DelayedTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.timeout = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        self.timeout = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Waiting,
    Visible,
}

/// What the owner of the cycle has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleAction {
    /// Arm the delayed task for this many milliseconds.
    Schedule(u32),
    /// Drop any armed timer.
    Cancel,
    Nothing,
}

/// Show/hide loop of the social proof pop-up.
///
/// Idle -> Waiting (random wait) -> Visible (fixed time) -> Idle, and Idle
/// immediately rolls into the next Waiting period. Each Visible period shows
/// the next member in order.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCycle {
    phase: CyclePhase,
    member_count: usize,
    member: usize,
    visible_ms: u32,
}

impl NotificationCycle {
    pub fn new(member_count: usize) -> Self {
        Self {
            phase: CyclePhase::Idle,
            member_count,
            member: 0,
            visible_ms: config::NOTIFICATION_VISIBLE_MS,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn member(&self) -> usize {
        self.member
    }

    pub fn is_visible(&self) -> bool {
        self.phase == CyclePhase::Visible
    }

    /// Begin waiting for the first appearance.
    pub fn start(&mut self, wait_ms: u32) -> CycleAction {
        if self.member_count == 0 || self.phase != CyclePhase::Idle {
            return CycleAction::Nothing;
        }
        self.phase = CyclePhase::Waiting;
        CycleAction::Schedule(wait_ms)
    }

    /// The armed timer fired. `next_wait_ms` is only used when the pop-up
    /// hides and the next wait begins.
    pub fn on_elapsed(&mut self, next_wait_ms: u32) -> CycleAction {
        match self.phase {
            CyclePhase::Idle => CycleAction::Nothing,
            CyclePhase::Waiting => {
                self.member = (self.member + 1) % self.member_count;
                self.phase = CyclePhase::Visible;
                CycleAction::Schedule(self.visible_ms)
            }
            CyclePhase::Visible => self.rearm(next_wait_ms),
        }
    }

    /// Close button: hide now and start the next wait.
    pub fn dismiss(&mut self, next_wait_ms: u32) -> CycleAction {
        if self.phase != CyclePhase::Visible {
            return CycleAction::Nothing;
        }
        self.rearm(next_wait_ms)
    }

    /// Member list changed: back to the first member and a fresh wait.
    pub fn reset(&mut self, member_count: usize, wait_ms: u32) -> CycleAction {
        self.member_count = member_count;
        self.member = 0;
        self.phase = CyclePhase::Idle;
        match self.start(wait_ms) {
            CycleAction::Nothing => CycleAction::Cancel,
            action => action,
        }
    }

    pub fn stop(&mut self) -> CycleAction {
        self.phase = CyclePhase::Idle;
        CycleAction::Cancel
    }

    fn rearm(&mut self, wait_ms: u32) -> CycleAction {
        self.phase = CyclePhase::Idle;
        self.start(wait_ms)
    }
}

/// Wait before the next appearance: the minimum plus jitter in
/// `[0, NOTIFICATION_WAIT_JITTER_MS)`. `unit` is a sample from `[0, 1)`.
pub fn notification_wait_ms(unit: f64) -> u32 {
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    let jitter = (unit * config::NOTIFICATION_WAIT_JITTER_MS as f64).floor() as u32;
    config::NOTIFICATION_MIN_WAIT_MS + jitter.min(config::NOTIFICATION_WAIT_JITTER_MS - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_walks_through_every_phase() {
        let mut cycle = NotificationCycle::new(3);
        assert_eq!(cycle.phase(), CyclePhase::Idle);

        assert_eq!(cycle.start(4000), CycleAction::Schedule(4000));
        assert_eq!(cycle.phase(), CyclePhase::Waiting);

        assert_eq!(
            cycle.on_elapsed(5000),
            CycleAction::Schedule(config::NOTIFICATION_VISIBLE_MS)
        );
        assert!(cycle.is_visible());
        assert_eq!(cycle.member(), 1);

        assert_eq!(cycle.on_elapsed(5000), CycleAction::Schedule(5000));
        assert_eq!(cycle.phase(), CyclePhase::Waiting);
    }

    #[test]
    fn members_rotate_and_wrap() {
        let mut cycle = NotificationCycle::new(3);
        cycle.start(0);
        let mut seen = Vec::new();
        for _ in 0..4 {
            cycle.on_elapsed(0);
            seen.push(cycle.member());
            cycle.on_elapsed(0);
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn dismiss_only_applies_while_visible() {
        let mut cycle = NotificationCycle::new(2);
        cycle.start(100);
        assert_eq!(cycle.dismiss(200), CycleAction::Nothing);

        cycle.on_elapsed(0);
        assert_eq!(cycle.dismiss(200), CycleAction::Schedule(200));
        assert_eq!(cycle.phase(), CyclePhase::Waiting);
    }

    #[test]
    fn empty_member_list_never_shows() {
        let mut cycle = NotificationCycle::new(0);
        assert_eq!(cycle.start(100), CycleAction::Nothing);
        assert_eq!(cycle.on_elapsed(100), CycleAction::Nothing);
        assert_eq!(cycle.phase(), CyclePhase::Idle);
    }

    #[test]
    fn start_twice_does_not_double_schedule() {
        let mut cycle = NotificationCycle::new(1);
        assert_eq!(cycle.start(100), CycleAction::Schedule(100));
        assert_eq!(cycle.start(100), CycleAction::Nothing);
    }

    #[test]
    fn reset_restarts_from_first_member() {
        let mut cycle = NotificationCycle::new(3);
        cycle.start(0);
        cycle.on_elapsed(0);
        assert_eq!(cycle.reset(2, 900), CycleAction::Schedule(900));
        assert_eq!(cycle.member(), 0);
        assert_eq!(cycle.phase(), CyclePhase::Waiting);
        assert_eq!(cycle.reset(0, 900), CycleAction::Cancel);
    }

    #[test]
    fn stop_goes_idle() {
        let mut cycle = NotificationCycle::new(3);
        cycle.start(0);
        assert_eq!(cycle.stop(), CycleAction::Cancel);
        assert_eq!(cycle.on_elapsed(10), CycleAction::Nothing);
    }

    #[test]
    fn wait_stays_inside_jitter_window() {
        assert_eq!(notification_wait_ms(0.0), 3_500);
        assert_eq!(notification_wait_ms(0.5), 5_000);
        assert_eq!(notification_wait_ms(0.9999), 6_499);
        assert_eq!(notification_wait_ms(1.0), 6_499);
        assert_eq!(notification_wait_ms(f64::NAN), 3_500);
    }
}
