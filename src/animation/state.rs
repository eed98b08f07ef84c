use std::time::Instant;

use super::{Animatable, SpringState, TimingFunction, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Not running, or produced the same value as last frame
    NoChange,
    /// Value changed to a new value
    Changed(T),
    /// Reached the target on this frame
    Finished(T),
}

impl<T> AdvanceResult<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_) | AdvanceResult::Finished(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, AdvanceResult::Finished(_))
    }
}

/// Interpolation state for one animatable value, advanced by the host clock.
pub struct AnimationState<T: Animatable> {
    current: T,
    target: T,
    start: T,
    /// 0.0 to 1.0; springs stay below 1.0 until settled
    progress: f32,
    start_time: Instant,
    transition: Transition,
    spring_state: Option<SpringState>,
}

impl<T: Animatable> AnimationState<T> {
    /// A completed animation resting at `value`.
    pub fn new(value: T, transition: Transition, now: Instant) -> Self {
        Self {
            current: value.clone(),
            target: value.clone(),
            start: value,
            progress: 1.0,
            start_time: now,
            transition,
            spring_state: None,
        }
    }

    /// Start animating from `from` to `target` using `transition`.
    pub fn start(&mut self, from: T, target: T, transition: Transition, now: Instant) {
        self.spring_state = transition.timing.is_spring().then(SpringState::new);
        self.transition = transition;
        self.current = from.clone();
        self.start = from;
        self.target = target;
        self.progress = 0.0;
        self.start_time = now;
    }

    /// Advance to `now`.
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if !self.is_animating() {
            return AdvanceResult::NoChange;
        }

        let elapsed_ms = now.saturating_duration_since(self.start_time).as_secs_f32() * 1000.0;
        let adjusted_ms = elapsed_ms - self.transition.delay_ms;
        if adjusted_ms <= 0.0 {
            return AdvanceResult::NoChange;
        }

        let (eased, done) = match (&mut self.spring_state, self.transition.timing) {
            (Some(spring), TimingFunction::Spring(config)) => {
                let position = spring.step(adjusted_ms / 1000.0, &config);
                let timed_out = adjusted_ms >= self.transition.duration_ms;
                (position, spring.is_settled(0.01) || timed_out)
            }
            _ => {
                // Sub-microsecond slack absorbs f32 rounding of the elapsed time.
                let done = adjusted_ms >= self.transition.duration_ms - 1e-3;
                let t = if done {
                    1.0
                } else {
                    adjusted_ms / self.transition.duration_ms
                };
                (self.transition.timing.evaluate(t), done)
            }
        };

        let previous = self.current.clone();
        if done {
            self.progress = 1.0;
            self.current = self.target.clone();
            return AdvanceResult::Finished(self.current.clone());
        }

        self.progress = eased.clamp(0.0, 0.99);
        self.current = T::lerp(&self.start, &self.target, eased);
        if self.current != previous {
            AdvanceResult::Changed(self.current.clone())
        } else {
            AdvanceResult::NoChange
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Stop wherever the animation currently is and rest at `value`.
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.spring_state = None;
    }
}
