use std::time::Duration;

use crate::animation::AnimationSpec;
use crate::gesture::{NestedScroll, SwipeConfig};
use crate::primitives::{Color, Viewport};

/// Opaque reference to an element rendered by the host, such as a custom
/// backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    PortraitUpsideDown,
    Landscape,
    LandscapeLeft,
    LandscapeRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationStyle {
    FullScreen,
    PageSheet,
    FormSheet,
    OverFullScreen,
}

/// Options passed through untouched to the host overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct HostOptions {
    pub supported_orientations: Vec<Orientation>,
    pub status_bar_translucent: bool,
    pub presentation_style: Option<PresentationStyle>,
    pub hardware_accelerated: bool,
    pub test_id: Option<String>,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            supported_orientations: vec![Orientation::Portrait, Orientation::Landscape],
            status_bar_translucent: false,
            presentation_style: None,
            hardware_accelerated: false,
            test_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub enabled: bool,
    pub color: Color,
    /// Opacity of the backdrop when the modal is at rest
    pub opacity: f32,
    pub transition_in: Duration,
    pub transition_out: Duration,
    /// Rendered instead of the default tappable scrim
    pub custom: Option<ElementHandle>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::BLACK,
            opacity: 0.7,
            transition_in: Duration::from_millis(300),
            transition_out: Duration::from_millis(300),
            custom: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    pub animation_in: AnimationSpec,
    pub animation_in_timing: Duration,
    pub animation_out: AnimationSpec,
    pub animation_out_timing: Duration,
    pub backdrop: BackdropConfig,
    pub swipe: SwipeConfig,
    /// Position of a nested scrollable, used together with a `scroll_to`
    /// callback
    pub scroll: NestedScroll,
    /// Render in a full-screen host overlay rather than above siblings
    pub cover_screen: bool,
    pub avoid_keyboard: bool,
    /// Overrides the viewport width reported by the host
    pub device_width: Option<f32>,
    /// Overrides the viewport height reported by the host
    pub device_height: Option<f32>,
    /// Margin around the content panel; 5% of the viewport width when unset
    pub content_margin: Option<f32>,
    pub host: HostOptions,
}

impl ModalConfig {
    /// Viewport after applying device size overrides.
    pub fn viewport(&self, reported: Viewport) -> Viewport {
        Viewport::new(
            self.device_width.unwrap_or(reported.width),
            self.device_height.unwrap_or(reported.height),
        )
    }

    pub fn content_margin(&self, viewport: Viewport) -> f32 {
        self.content_margin.unwrap_or(viewport.width * 0.05)
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            animation_in: AnimationSpec::from("slideInUp"),
            animation_in_timing: Duration::from_millis(300),
            animation_out: AnimationSpec::from("slideOutDown"),
            animation_out_timing: Duration::from_millis(300),
            backdrop: BackdropConfig::default(),
            swipe: SwipeConfig::default(),
            scroll: NestedScroll::default(),
            cover_screen: true,
            avoid_keyboard: false,
            device_width: None,
            device_height: None,
            content_margin: None,
            host: HostOptions::default(),
        }
    }
}
