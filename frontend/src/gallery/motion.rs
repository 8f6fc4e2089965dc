use crate::config;

/// Physics of the filter that smooths the card row's horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub mass: f64,
    pub stiffness: f64,
    /// Displacement (px) under which the spring may snap to its target.
    pub rest_delta: f64,
    /// Speed (px/s) under which the spring may snap to its target.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: config::GALLERY_SPRING_DAMPING,
            mass: config::GALLERY_SPRING_MASS,
            stiffness: config::GALLERY_SPRING_STIFFNESS,
            rest_delta: 0.5,
            rest_speed: 10.0,
        }
    }
}

impl SpringConfig {
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_usable(&self) -> bool {
        self.mass > 0.0
            && self.stiffness > 0.0
            && self.damping >= 0.0
            && self.mass.is_finite()
            && self.stiffness.is_finite()
            && self.damping.is_finite()
    }
}

/// Damped harmonic oscillator chasing a moving target.
///
/// Each step uses the closed-form solution for the current damping regime,
/// so long or irregular frame gaps stay stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `elapsed_ms` and return the new value.
    pub fn step(&mut self, elapsed_ms: f64) -> f64 {
        if self.is_at_rest() {
            return self.value;
        }
        if !self.config.is_usable() {
            self.snap();
            return self.value;
        }

        let t = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            elapsed_ms / 1000.0
        } else {
            0.0
        };

        let SpringConfig {
            mass, stiffness, ..
        } = self.config;
        let d0 = self.value - self.target;
        let v0 = self.velocity;
        let omega = (stiffness / mass).sqrt();
        let zeta = self.config.damping_ratio();

        let (d, v) = if (zeta - 1.0).abs() < 1e-6 {
            let b = v0 + omega * d0;
            let decay = (-omega * t).exp();
            ((d0 + b * t) * decay, (b - omega * (d0 + b * t)) * decay)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + zeta * omega * d0) / omega_d;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            (
                decay * (d0 * cos + b * sin),
                decay
                    * ((omega_d * b - zeta * omega * d0) * cos
                        - (zeta * omega * b + omega_d * d0) * sin),
            )
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * d0) / (r1 - r2);
            let c2 = d0 - c1;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if !d.is_finite() || !v.is_finite() {
            self.snap();
            return self.value;
        }

        self.value = self.target + d;
        self.velocity = v;
        if d.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.snap();
        }
        self.value
    }

    /// Place the spring on `value` with no motion.
    pub fn reset_to(&mut self, value: f64) {
        if value.is_finite() {
            self.target = value;
            self.snap();
        }
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

/// Horizontal offset the card row should end up at for a given progress.
///
/// Returns 0 until both the pannable distance and the viewport width have
/// been measured.
pub fn target_offset(progress: f64, pannable_distance: f64, viewport_width: f64) -> f64 {
    let measured = pannable_distance > 0.0
        && viewport_width > 0.0
        && pannable_distance.is_finite()
        && viewport_width.is_finite();
    if !measured || progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * -(pannable_distance - viewport_width)
}

/// Maps progress to the smoothed offset applied to the card row.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionMapper {
    spring: Spring,
}

impl MotionMapper {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, 0.0),
        }
    }

    pub fn drive(
        &mut self,
        progress: f64,
        pannable_distance: f64,
        viewport_width: f64,
        elapsed_ms: f64,
    ) -> f64 {
        self.spring
            .set_target(target_offset(progress, pannable_distance, viewport_width));
        self.spring.step(elapsed_ms)
    }

    /// Put the row straight onto the target for `progress`, no animation.
    pub fn jump(&mut self, progress: f64, pannable_distance: f64, viewport_width: f64) -> f64 {
        self.spring
            .reset_to(target_offset(progress, pannable_distance, viewport_width));
        self.spring.value()
    }

    pub fn target(&self) -> f64 {
        self.spring.target()
    }

    pub fn offset(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn target_is_linear_in_progress() {
        assert_eq!(target_offset(0.5, 1200.0, 400.0), -400.0);
        assert_eq!(target_offset(0.0, 1200.0, 400.0), 0.0);
        assert_eq!(target_offset(1.0, 1200.0, 400.0), -800.0);
    }

    #[test]
    fn unmeasured_layout_targets_origin() {
        assert_eq!(target_offset(0.7, 0.0, 400.0), 0.0);
        assert_eq!(target_offset(0.7, 1200.0, 0.0), 0.0);
        assert_eq!(target_offset(f64::NAN, 1200.0, 400.0), 0.0);
    }

    #[test]
    fn default_physics_are_overdamped() {
        assert!(SpringConfig::default().damping_ratio() > 1.0);
    }

    #[test]
    fn spring_converges_on_held_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-400.0);
        for _ in 0..180 {
            spring.step(FRAME_MS);
        }
        assert!((spring.value() + 400.0).abs() < 1.0);
    }

    #[test]
    fn spring_does_not_overshoot_with_default_physics() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-400.0);
        let mut previous = 0.0;
        for _ in 0..120 {
            let value = spring.step(FRAME_MS);
            assert!(value >= -400.0);
            assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn underdamped_spring_oscillation_stays_bounded() {
        let config = SpringConfig {
            damping: 2.0,
            ..SpringConfig::default()
        };
        assert!(config.damping_ratio() < 1.0);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        for _ in 0..600 {
            let value = spring.step(FRAME_MS);
            assert!(value.abs() <= 200.0);
        }
        assert!((spring.value() - 100.0).abs() < 1.0);
    }

    #[test]
    fn critically_damped_spring_settles() {
        let config = SpringConfig {
            damping: 2.0 * (100.0_f64 * 0.1).sqrt(),
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(config, 50.0);
        spring.set_target(0.0);
        for _ in 0..300 {
            spring.step(FRAME_MS);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn long_frame_gap_is_stable() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(-800.0);
        let value = spring.step(5_000.0);
        assert!(value.is_finite());
        assert!((value + 800.0).abs() < 1.0);
    }

    #[test]
    fn moving_target_has_no_jumps() {
        let mut mapper = MotionMapper::new(SpringConfig::default());
        let mut previous = 0.0;
        for frame in 0..=60 {
            let progress = frame as f64 / 60.0;
            let offset = mapper.drive(progress, 1200.0, 400.0, FRAME_MS);
            assert!((offset - previous).abs() < 60.0);
            previous = offset;
        }
    }

    #[test]
    fn unmeasured_mapper_renders_unpanned() {
        let mut mapper = MotionMapper::new(SpringConfig::default());
        let offset = mapper.drive(0.8, 0.0, 0.0, FRAME_MS);
        assert_eq!(offset, 0.0);
        assert!(mapper.is_settled());
    }

    #[test]
    fn degenerate_physics_snap_to_target() {
        let config = SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(-120.0);
        assert_eq!(spring.step(FRAME_MS), -120.0);
    }

    #[test]
    fn jump_lands_on_target_at_rest() {
        let mut mapper = MotionMapper::new(SpringConfig::default());
        assert_eq!(mapper.jump(0.5, 1200.0, 400.0), -400.0);
        assert!(mapper.is_settled());
        assert_eq!(mapper.drive(0.5, 1200.0, 400.0, FRAME_MS), -400.0);
    }
}
