//! Headless modal dialog with swipe-to-dismiss.
//!
//! The crate owns the behavior of a modal (visibility lifecycle, enter and
//! exit animations, backdrop fading, swipe gestures and nested scroll
//! cooperation) and leaves drawing to the host. See [`modal::Modal`] for the
//! entry point.

pub mod animation;
pub mod error;
pub mod gesture;
pub mod lifecycle;
pub mod modal;
pub mod primitives;
pub mod reactive;

pub use error::{ModalError, Result};

pub mod prelude {
    pub use crate::animation::{
        AnimationSpec, KeyframeSpec, Phase, SpringConfig, StyleSnapshot, TimingFunction,
    };
    pub use crate::error::{ModalError, Result};
    pub use crate::gesture::{
        Direction, Directions, GestureState, ScrollAxis, ScrollRequest, TouchStart,
    };
    pub use crate::lifecycle::LifecycleState;
    pub use crate::modal::{
        BackdropFill, ContentLayer, ElementHandle, HostOptions, HostSurface, Modal, ModalConfig,
        ModalHandle, Orientation, PresentationStyle, Scene, SwipeComplete,
    };
    pub use crate::primitives::{Color, EventResponse, Rect, Viewport};
}
