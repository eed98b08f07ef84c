//! Composition of what the host should draw for the modal.
//!
//! The shell produces a [`Scene`] from the lifecycle state, the live
//! presentation values and the running content animation. Layers are listed
//! bottom to top: backdrop first, content above it, all inside the host
//! surface.

use crate::primitives::{Color, Rect};

use super::config::{ElementHandle, HostOptions};
use super::Modal;

/// The surface the modal is rendered into.
#[derive(Clone, Debug, PartialEq)]
pub enum HostSurface {
    /// Platform overlay covering the whole screen
    FullScreen(HostOptions),
    /// Plain layer stacked above sibling content
    InPlace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropFill {
    /// Default scrim. Taps go to [`Modal::press_backdrop`].
    Scrim,
    /// Application-supplied element, not tappable by the modal
    Custom(ElementHandle),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropLayer {
    pub frame: Rect,
    pub color: Color,
    pub opacity: f32,
    pub fill: BackdropFill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardBehavior {
    Padding,
}

/// Wraps the content so the software keyboard does not cover it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardAvoidance {
    /// `None` leaves adjustment to the platform
    pub behavior: Option<KeyboardBehavior>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentLayer {
    /// Viewport inset by the content margin
    pub frame: Rect,
    pub margin: f32,
    /// Gesture offset plus animation offset
    pub translate: (f32, f32),
    pub opacity: f32,
    pub scale: f32,
    /// Touches on the content are routed to the modal
    pub captures_gestures: bool,
    pub keyboard_avoidance: Option<KeyboardAvoidance>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub host: HostSurface,
    pub backdrop: Option<BackdropLayer>,
    pub content: Option<ContentLayer>,
}

impl Scene {
    /// Whether a point in viewport coordinates lands on the default scrim
    /// rather than on the content.
    pub fn hits_scrim(&self, x: f32, y: f32) -> bool {
        let on_scrim = self.backdrop.as_ref().is_some_and(|b| {
            b.fill == BackdropFill::Scrim && b.frame.contains(x, y)
        });
        let on_content = self
            .content
            .as_ref()
            .is_some_and(|c| c.frame.offset(c.translate.0, c.translate.1).contains(x, y));
        on_scrim && !on_content
    }
}

impl Modal {
    /// What to draw right now, or `None` while the modal is hidden.
    pub fn scene(&self) -> Option<Scene> {
        if !self.is_overlay_mounted() {
            return None;
        }

        let config = &self.config;
        let viewport = self.viewport();

        let backdrop = config.backdrop.enabled.then(|| BackdropLayer {
            frame: viewport.rect(),
            color: config.backdrop.color,
            opacity: self.values.backdrop_opacity.get().max(0.0),
            fill: match config.backdrop.custom {
                Some(element) => BackdropFill::Custom(element),
                None => BackdropFill::Scrim,
            },
        });

        let content = self.is_content_mounted().then(|| {
            let style = self.animator.content_style(viewport);
            let (pan_x, pan_y) = self.values.pan();
            let margin = config.content_margin(viewport);
            ContentLayer {
                frame: viewport.rect().inset(margin),
                margin,
                translate: (pan_x + style.translate.0, pan_y + style.translate.1),
                opacity: style.opacity,
                scale: style.scale,
                captures_gestures: config.swipe.is_enabled(),
                keyboard_avoidance: config.avoid_keyboard.then(keyboard_avoidance),
            }
        });

        let host = if config.cover_screen {
            HostSurface::FullScreen(config.host.clone())
        } else {
            HostSurface::InPlace
        };

        Some(Scene {
            host,
            backdrop,
            content,
        })
    }
}

fn keyboard_avoidance() -> KeyboardAvoidance {
    KeyboardAvoidance {
        behavior: cfg!(target_os = "ios").then_some(KeyboardBehavior::Padding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Direction;
    use crate::primitives::Viewport;
    use std::time::{Duration, Instant};

    fn shown(modal: &mut Modal, t0: Instant) {
        modal.set_visible(true, t0);
        modal.frame(t0 + Duration::from_millis(300));
    }

    #[test]
    fn test_hidden_modal_has_no_scene() {
        assert_eq!(Modal::new().scene(), None);
    }

    #[test]
    fn test_shown_scene_layers() {
        let t0 = Instant::now();
        let mut modal = Modal::new()
            .device_size(400.0, 800.0)
            .swipe_direction(Direction::Down);
        shown(&mut modal, t0);

        let scene = modal.scene().unwrap();
        assert!(matches!(scene.host, HostSurface::FullScreen(_)));

        let backdrop = scene.backdrop.unwrap();
        assert_eq!(backdrop.frame, Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(backdrop.fill, BackdropFill::Scrim);
        assert!((backdrop.opacity - 0.7).abs() < 1e-4);

        let content = scene.content.unwrap();
        assert_eq!(content.margin, 20.0);
        assert_eq!(content.frame, Rect::new(20.0, 20.0, 360.0, 760.0));
        assert_eq!(content.translate, (0.0, 0.0));
        assert_eq!(content.opacity, 1.0);
        assert!(content.captures_gestures);
        assert_eq!(content.keyboard_avoidance, None);
    }

    #[test]
    fn test_entering_content_starts_offscreen() {
        let t0 = Instant::now();
        let mut modal = Modal::new().device_size(400.0, 800.0);
        modal.set_visible(true, t0);

        let content = modal.scene().unwrap().content.unwrap();
        assert_eq!(content.translate, (0.0, 800.0));
        assert!(!content.captures_gestures);
    }

    #[test]
    fn test_in_place_custom_backdrop_and_keyboard() {
        let t0 = Instant::now();
        let mut modal = Modal::new()
            .cover_screen(false)
            .custom_backdrop(ElementHandle(9))
            .avoid_keyboard(true);
        shown(&mut modal, t0);

        let scene = modal.scene().unwrap();
        assert_eq!(scene.host, HostSurface::InPlace);
        assert_eq!(
            scene.backdrop.unwrap().fill,
            BackdropFill::Custom(ElementHandle(9))
        );
        let avoidance = scene.content.unwrap().keyboard_avoidance.unwrap();
        assert_eq!(avoidance.behavior.is_some(), cfg!(target_os = "ios"));
    }

    #[test]
    fn test_no_backdrop_layer_when_disabled() {
        let t0 = Instant::now();
        let mut modal = Modal::new().has_backdrop(false);
        shown(&mut modal, t0);
        assert_eq!(modal.scene().unwrap().backdrop, None);
    }

    #[test]
    fn test_scrim_hit_testing() {
        let t0 = Instant::now();
        let mut modal = Modal::new().content_margin(100.0);
        modal.set_viewport(Viewport::new(400.0, 800.0));
        shown(&mut modal, t0);

        let scene = modal.scene().unwrap();
        assert!(scene.hits_scrim(50.0, 50.0));
        assert!(!scene.hits_scrim(200.0, 400.0));
    }
}
