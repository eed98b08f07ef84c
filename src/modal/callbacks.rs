use crate::gesture::{Direction, PropagateSwipe, ScrollRequest};

use super::config::Orientation;

/// A notification with no payload.
pub type Callback = Box<dyn FnMut()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeComplete {
    pub swiping_direction: Direction,
}

/// Application callbacks. Every one is optional; absent callbacks are no-ops.
#[derive(Default)]
pub struct ModalCallbacks {
    pub on_modal_will_show: Option<Callback>,
    pub on_modal_show: Option<Callback>,
    pub on_modal_will_hide: Option<Callback>,
    pub on_modal_hide: Option<Callback>,
    pub on_backdrop_press: Option<Callback>,
    pub on_back_button_press: Option<Callback>,
    pub on_swipe_start: Option<Callback>,
    /// Receives the fraction of the modal still shown, 1.0 at rest
    pub on_swipe_move: Option<Box<dyn FnMut(f32)>>,
    pub on_swipe_complete: Option<Box<dyn FnMut(SwipeComplete)>>,
    pub on_swipe_cancel: Option<Callback>,
    /// Scrolls the nested scrollable. Enables nested scroll cooperation.
    pub scroll_to: Option<Box<dyn FnMut(ScrollRequest)>>,
    pub propagate_swipe: PropagateSwipe,
    /// The host overlay finished presenting
    pub on_show: Option<Callback>,
    /// The host overlay was dismissed
    pub on_dismiss: Option<Callback>,
    pub on_orientation_change: Option<Box<dyn FnMut(Orientation)>>,
}

/// Invoke an optional callback.
pub(crate) fn fire(callback: &mut Option<Callback>) {
    if let Some(cb) = callback.as_mut() {
        cb();
    }
}

pub(crate) fn fire_with<T>(callback: &mut Option<Box<dyn FnMut(T)>>, value: T) {
    if let Some(cb) = callback.as_mut() {
        cb(value);
    }
}
