use std::fmt;

use super::{Direction, Directions, GestureState, NestedScroll, ScrollRequest, TouchStart};
use crate::primitives::Viewport;

/// Swipe-to-dismiss settings, fixed for the duration of a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Directions that dismiss the modal. Empty disables swiping.
    pub directions: Directions,
    /// Distance that must be exceeded along the swipe direction to dismiss
    pub threshold: f32,
    /// Movement below which no direction is committed
    pub deadzone: f32,
}

impl SwipeConfig {
    pub fn is_enabled(&self) -> bool {
        !self.directions.is_empty()
    }
}

/// Deadzone used when none, or a non-positive one, is configured.
pub const DEFAULT_DEADZONE: f32 = 4.0;

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            directions: Directions::empty(),
            threshold: 100.0,
            deadzone: DEFAULT_DEADZONE,
        }
    }
}

/// Whether a swipe should be left to nested views instead of dismissing.
pub enum PropagateSwipe {
    Fixed(bool),
    When(Box<dyn Fn(&GestureState) -> bool>),
}

impl PropagateSwipe {
    pub fn evaluate(&self, gesture: &GestureState) -> bool {
        match self {
            PropagateSwipe::Fixed(value) => *value,
            PropagateSwipe::When(predicate) => predicate(gesture),
        }
    }
}

impl Default for PropagateSwipe {
    fn default() -> Self {
        PropagateSwipe::Fixed(false)
    }
}

impl From<bool> for PropagateSwipe {
    fn from(value: bool) -> Self {
        PropagateSwipe::Fixed(value)
    }
}

impl fmt::Debug for PropagateSwipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagateSwipe::Fixed(value) => write!(f, "Fixed({})", value),
            PropagateSwipe::When(_) => write!(f, "When(..)"),
        }
    }
}

/// Whether the modal takes ownership of a touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    Claim,
    Yield,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Nothing to do for this sample
    Ignored,
    /// The content follows the finger along `direction`'s axis
    Track {
        direction: Direction,
        /// dx for horizontal swipes, dy for vertical ones
        offset: f32,
        /// 1.0 at rest, 0.0 when dragged to the edge of the viewport
        percentage_shown: f32,
    },
    /// The drag goes against the allowed directions; scroll the nested view
    Scroll(ScrollRequest),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// No captured session with a committed direction
    Ignored,
    /// Dismiss the modal
    Commit(Direction),
    /// Spring back to rest
    Cancel { restore_scroll: Option<ScrollRequest> },
}

/// One touch, from down to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Set once per session and never changed afterwards
    pub committed: Option<Direction>,
    pub origin: (f32, f32),
    pub delta: (f32, f32),
    /// Whether the modal owns this touch
    pub captured: bool,
}

/// Turns a stream of touch samples into swipe-to-dismiss decisions.
///
/// The interpreter is pure: it reports outcomes and leaves writing shared
/// values, invoking callbacks and starting animations to the modal.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_captured(&self) -> bool {
        self.session.is_some_and(|s| s.captured)
    }

    pub fn committed_direction(&self) -> Option<Direction> {
        self.session.and_then(|s| s.committed)
    }

    /// A touch went down on the content.
    ///
    /// Touches on a nested scrollable that has been scrolled away from its top
    /// are left to it when swipes propagate. `nested` must only be given when
    /// the application can scroll that view.
    pub fn begin(
        &mut self,
        touch: TouchStart,
        config: &SwipeConfig,
        propagate: &PropagateSwipe,
        nested: Option<&NestedScroll>,
    ) -> Capture {
        if !config.is_enabled() {
            self.session = None;
            return Capture::Yield;
        }

        let gesture = GestureState::at(touch.x, touch.y);
        let scrolled_nested = nested.is_some_and(|n| n.offset > 0.0);
        let captured = !(touch.in_scrollable && scrolled_nested && propagate.evaluate(&gesture));

        self.session = Some(GestureSession {
            committed: None,
            origin: (touch.x, touch.y),
            delta: (0.0, 0.0),
            captured,
        });

        if captured {
            Capture::Claim
        } else {
            log::trace!("Touch at ({}, {}) left to nested scrollable", touch.x, touch.y);
            Capture::Yield
        }
    }

    /// A touch sample arrived.
    ///
    /// An uncaptured session is claimed once the touch leaves the deadzone,
    /// unless swipes propagate to nested views.
    pub fn update(
        &mut self,
        gesture: &GestureState,
        config: &SwipeConfig,
        propagate: &PropagateSwipe,
        nested: Option<&NestedScroll>,
        viewport: Viewport,
    ) -> MoveOutcome {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Ignored;
        };
        session.delta = (gesture.dx, gesture.dy);

        // A sample that has not moved never picks a direction
        let moved = gesture.dx != 0.0 || gesture.dy != 0.0;
        let outside_deadzone = moved && gesture.dx.abs().max(gesture.dy.abs()) >= config.deadzone;

        if !session.captured {
            if propagate.evaluate(gesture) || !outside_deadzone {
                return MoveOutcome::Ignored;
            }
            session.captured = true;
        }

        let direction = match session.committed {
            Some(direction) => direction,
            None if outside_deadzone => {
                let direction = Direction::classify(gesture.dx, gesture.dy);
                log::debug!("Swipe committed to {}", direction);
                session.committed = Some(direction);
                direction
            }
            None => return MoveOutcome::Ignored,
        };

        if is_allowed(direction, gesture, config) {
            let progress = swipe_progress(direction, gesture, viewport);
            let offset = if direction.is_horizontal() {
                gesture.dx
            } else {
                gesture.dy
            };
            log::trace!("Swipe {} offset={} progress={}", direction, offset, progress);
            MoveOutcome::Track {
                direction,
                offset,
                percentage_shown: 1.0 - progress,
            }
        } else if let Some(nested) = nested {
            MoveOutcome::Scroll(nested.follow_drag(gesture))
        } else {
            MoveOutcome::Ignored
        }
    }

    /// The touch was lifted. Ends the session.
    pub fn release(
        &mut self,
        gesture: &GestureState,
        config: &SwipeConfig,
        nested: Option<&NestedScroll>,
    ) -> ReleaseOutcome {
        let Some(session) = self.session.take() else {
            return ReleaseOutcome::Ignored;
        };
        let direction = match session.committed {
            Some(direction) if session.captured => direction,
            _ => return ReleaseOutcome::Ignored,
        };

        let travelled = direction.distance(gesture.dx, gesture.dy);
        if travelled > config.threshold && is_allowed(direction, gesture, config) {
            log::debug!("Swipe {} completed after {}", direction, travelled);
            ReleaseOutcome::Commit(direction)
        } else {
            log::debug!("Swipe {} cancelled after {}", direction, travelled);
            ReleaseOutcome::Cancel {
                restore_scroll: nested.and_then(NestedScroll::restore),
            }
        }
    }

    /// The host took the touch away. Returns the abandoned session, if it was
    /// captured, so its live values can be restored.
    pub fn terminate(&mut self) -> Option<GestureSession> {
        self.session.take().filter(|s| s.captured)
    }
}

/// The committed direction is enabled and the live delta still points
/// that way.
fn is_allowed(direction: Direction, gesture: &GestureState, config: &SwipeConfig) -> bool {
    config.directions.includes(direction) && direction.agrees_with(gesture.dx, gesture.dy)
}

/// How far the swipe has travelled towards the viewport edge it points at,
/// clamped to [0, 1].
pub fn swipe_progress(direction: Direction, gesture: &GestureState, viewport: Viewport) -> f32 {
    let (moved, room) = match direction {
        Direction::Down => (gesture.move_y - gesture.y0, viewport.height - gesture.y0),
        Direction::Up => (gesture.y0 - gesture.move_y, gesture.y0),
        Direction::Left => (gesture.x0 - gesture.move_x, gesture.x0),
        Direction::Right => (gesture.move_x - gesture.x0, viewport.width - gesture.x0),
    };
    if room <= f32::EPSILON {
        return if moved > 0.0 { 1.0 } else { 0.0 };
    }
    (moved / room).clamp(0.0, 1.0)
}
