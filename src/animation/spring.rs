/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Spring used to return swiped content to rest after a cancelled gesture.
    /// Damping ratio is 0.75, so it settles with only a faint overshoot.
    pub const SPRING_BACK: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 15.0,
    };

    /// Critically damped spring: fastest return without overshoot
    pub const CRITICAL: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 20.0,
    };

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SPRING_BACK
    }
}

/// Largest integration step in seconds. Longer frame gaps are sub-stepped.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// State for spring physics simulation, normalized from 0.0 (start) to 1.0 (target)
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Last evaluation time in seconds since the animation started
    pub last_t: f32,
}

impl SpringState {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            last_t: 0.0,
        }
    }

    /// Step the simulation to `elapsed_secs` since the animation started.
    ///
    /// Integrates with semi-implicit Euler in fixed sub-steps, so the result is
    /// the same whether the host samples at 30, 60 or 120 fps.
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let mut remaining = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = self.last_t.max(elapsed_secs);

        while remaining > 1e-6 {
            let dt = remaining.min(MAX_STEP_SECS);
            remaining -= dt;

            let displacement = self.position - 1.0;
            let force = -config.stiffness * displacement - config.damping * self.velocity;
            let acceleration = force / config.mass;

            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
        }

        self.position
    }

    /// Position near target and velocity near zero
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_back_settles_within_two_seconds() {
        let mut state = SpringState::new();
        let config = SpringConfig::SPRING_BACK;

        for i in 0..=120 {
            state.step(i as f32 / 60.0, &config);
        }

        assert!(
            state.is_settled(0.01),
            "spring should settle, got pos={} vel={}",
            state.position,
            state.velocity
        );
    }

    #[test]
    fn test_large_frame_gap_matches_fine_steps() {
        let config = SpringConfig::SPRING_BACK;

        let mut coarse = SpringState::new();
        coarse.step(0.5, &config);

        let mut fine = SpringState::new();
        for i in 1..=60 {
            fine.step(i as f32 * 0.5 / 60.0, &config);
        }

        assert!((coarse.position - fine.position).abs() < 0.05);
    }

    #[test]
    fn test_critical_spring_does_not_overshoot() {
        let mut state = SpringState::new();
        let config = SpringConfig::CRITICAL;
        assert!((config.damping_ratio() - 1.0).abs() < 1e-6);

        let mut max_position: f32 = 0.0;
        for i in 0..=180 {
            max_position = max_position.max(state.step(i as f32 / 60.0, &config));
        }
        assert!(max_position <= 1.0 + 1e-3, "overshot to {}", max_position);
    }

    #[test]
    fn test_time_going_backwards_is_ignored() {
        let mut state = SpringState::new();
        let config = SpringConfig::SPRING_BACK;
        let p = state.step(0.2, &config);
        assert_eq!(state.step(0.1, &config), p);
    }
}
