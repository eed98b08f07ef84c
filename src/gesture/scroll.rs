//! Cooperation with a scrollable view nested inside the modal content.

use super::GestureState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// Request for the nested scrollable to move to an absolute offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub axis: ScrollAxis,
    pub offset: f32,
    pub animated: bool,
}

/// Soften an offset past `max` by halving the excess.
pub fn rubber_band(offset: f32, max: f32) -> f32 {
    if offset > max {
        offset - (offset - max) / 2.0
    } else {
        offset
    }
}

/// Scroll position of the nested scrollable, as last reported by the
/// application.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct NestedScroll {
    pub offset: f32,
    pub offset_max: f32,
    pub horizontal: bool,
}

impl NestedScroll {
    pub fn axis(&self) -> ScrollAxis {
        if self.horizontal {
            ScrollAxis::Horizontal
        } else {
            ScrollAxis::Vertical
        }
    }

    /// Scroll the nested view opposite to the drag so the content follows
    /// the finger, rubber-banding past the maximum offset.
    pub fn follow_drag(&self, gesture: &GestureState) -> ScrollRequest {
        let raw = match self.axis() {
            ScrollAxis::Horizontal => -gesture.dx,
            ScrollAxis::Vertical => -gesture.dy,
        };
        ScrollRequest {
            axis: self.axis(),
            offset: rubber_band(raw, self.offset_max),
            animated: false,
        }
    }

    /// Animated return to the boundary after a cancelled gesture, if the
    /// view was left past it.
    pub fn restore(&self) -> Option<ScrollRequest> {
        (self.offset > self.offset_max).then(|| ScrollRequest {
            axis: self.axis(),
            offset: self.offset_max,
            animated: true,
        })
    }
}
