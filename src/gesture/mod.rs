//! Swipe-to-dismiss gesture handling.

mod interpreter;
mod scroll;

pub use interpreter::{
    swipe_progress, Capture, GestureInterpreter, GestureSession, MoveOutcome, PropagateSwipe,
    ReleaseOutcome, SwipeConfig, DEFAULT_DEADZONE,
};
pub use scroll::{rubber_band, NestedScroll, ScrollAxis, ScrollRequest};

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::ModalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classify a displacement by its dominant axis. Ties go to the
    /// vertical axis.
    pub fn classify(dx: f32, dy: f32) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Displacement along this direction; negative when moving against it.
    pub fn distance(self, dx: f32, dy: f32) -> f32 {
        match self {
            Direction::Up => -dy,
            Direction::Down => dy,
            Direction::Left => -dx,
            Direction::Right => dx,
        }
    }

    /// Whether the live delta still points this way.
    pub fn agrees_with(self, dx: f32, dy: f32) -> bool {
        self.distance(dx, dy) > 0.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ModalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ModalError::InvalidDirection(other.to_string())),
        }
    }
}

bitflags! {
    /// Set of directions a modal may be swiped away in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Directions {
    pub fn includes(&self, direction: Direction) -> bool {
        self.contains(Directions::from(direction))
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Directions::UP,
            Direction::Down => Directions::DOWN,
            Direction::Left => Directions::LEFT,
            Direction::Right => Directions::RIGHT,
        }
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Directions::empty(), |acc, d| acc | Directions::from(d))
    }
}

impl<const N: usize> From<[Direction; N]> for Directions {
    fn from(directions: [Direction; N]) -> Self {
        directions.into_iter().collect()
    }
}

/// Where a touch went down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchStart {
    pub x: f32,
    pub y: f32,
    /// The touch landed on a nested scrollable view inside the content
    pub in_scrollable: bool,
}

impl TouchStart {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            in_scrollable: false,
        }
    }

    pub fn in_scrollable(mut self) -> Self {
        self.in_scrollable = true;
        self
    }
}

/// Accumulated state of a pan, reported with every touch sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureState {
    /// Where the touch went down, in viewport coordinates
    pub x0: f32,
    pub y0: f32,
    /// Latest touch position, in viewport coordinates
    pub move_x: f32,
    pub move_y: f32,
    /// Displacement since the touch went down
    pub dx: f32,
    pub dy: f32,
}

impl GestureState {
    pub fn at(x0: f32, y0: f32) -> Self {
        Self {
            x0,
            y0,
            move_x: x0,
            move_y: y0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// The same gesture after the touch moved to (`x`, `y`).
    pub fn moved_to(self, x: f32, y: f32) -> Self {
        Self {
            move_x: x,
            move_y: y,
            dx: x - self.x0,
            dy: y - self.y0,
            ..self
        }
    }

    /// The same gesture displaced by (`dx`, `dy`) from its origin.
    pub fn moved_by(self, dx: f32, dy: f32) -> Self {
        self.moved_to(self.x0 + dx, self.y0 + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_dominant_axis() {
        assert_eq!(Direction::classify(10.0, 3.0), Direction::Right);
        assert_eq!(Direction::classify(-10.0, 3.0), Direction::Left);
        assert_eq!(Direction::classify(2.0, 8.0), Direction::Down);
        assert_eq!(Direction::classify(2.0, -8.0), Direction::Up);
        assert_eq!(Direction::classify(5.0, 5.0), Direction::Down);
    }

    #[test]
    fn test_distance_is_sign_adjusted() {
        assert_eq!(Direction::Up.distance(0.0, -30.0), 30.0);
        assert_eq!(Direction::Down.distance(0.0, -30.0), -30.0);
        assert!(Direction::Left.agrees_with(-1.0, 0.0));
        assert!(!Direction::Right.agrees_with(0.0, 50.0));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(ModalError::InvalidDirection(_))
        ));
        assert_eq!(Direction::Left.to_string(), "left");
    }

    #[test]
    fn test_direction_sets() {
        let set = Directions::from([Direction::Down, Direction::Up]);
        assert_eq!(set, Directions::UP | Directions::DOWN);
        assert!(set.includes(Direction::Up));
        assert!(!set.includes(Direction::Right));
        assert!(Directions::empty().is_empty());
    }

    #[test]
    fn test_gesture_state_tracks_delta() {
        let g = GestureState::at(100.0, 300.0).moved_to(90.0, 450.0);
        assert_eq!((g.dx, g.dy), (-10.0, 150.0));
        assert_eq!(GestureState::at(0.0, 0.0).moved_by(3.0, 4.0).move_y, 4.0);
    }
}
