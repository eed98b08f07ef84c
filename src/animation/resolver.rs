//! Maps the modal's animation vocabulary onto concrete enter/exit animations.
//!
//! Entrance names describe the *movement* of the content: `slideInUp` moves the
//! panel upward into view, so it starts below the viewport. Presets are named
//! by where the content comes from or goes to, so the vertical entrance names
//! cross over: `slideInUp` is [`Preset::SlideFromBottom`] and `slideInDown` is
//! [`Preset::SlideFromTop`]. Horizontal entrances already name their origin
//! (`slideInLeft` enters from the left edge) and exit names their destination
//! (`slideOutDown` leaves through the bottom), so those map straight across.

use std::time::Duration;

use super::keyframes::{ContentStyle, KeyframeSpec, StyleSnapshot};
use super::TimingFunction;
use crate::primitives::Viewport;

/// Whether an animation brings content in or takes it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Enter,
    Exit,
}

/// Animation as configured by the application: a symbolic name or custom
/// keyframes. Decided once when the modal is configured.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationSpec {
    Named(String),
    Keyframes(KeyframeSpec),
}

impl From<&str> for AnimationSpec {
    fn from(name: &str) -> Self {
        AnimationSpec::Named(name.to_string())
    }
}

impl From<String> for AnimationSpec {
    fn from(name: String) -> Self {
        AnimationSpec::Named(name)
    }
}

impl From<KeyframeSpec> for AnimationSpec {
    fn from(spec: KeyframeSpec) -> Self {
        AnimationSpec::Keyframes(spec)
    }
}

/// Built-in animations, named by origin (enter) or destination (exit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    FadeIn,
    FadeOut,
    ZoomIn,
    ZoomOut,
    SlideFromBottom,
    SlideFromTop,
    SlideFromLeft,
    SlideFromRight,
    SlideToBottom,
    SlideToTop,
    SlideToLeft,
    SlideToRight,
}

impl Preset {
    /// Look up a public animation name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        let preset = match name {
            "slideInUp" => Preset::SlideFromBottom,
            "slideInDown" => Preset::SlideFromTop,
            "slideInLeft" => Preset::SlideFromLeft,
            "slideInRight" => Preset::SlideFromRight,
            "slideOutDown" => Preset::SlideToBottom,
            "slideOutUp" => Preset::SlideToTop,
            "slideOutLeft" => Preset::SlideToLeft,
            "slideOutRight" => Preset::SlideToRight,
            "fadeIn" => Preset::FadeIn,
            "fadeOut" => Preset::FadeOut,
            "zoomIn" => Preset::ZoomIn,
            "zoomOut" => Preset::ZoomOut,
            _ => return None,
        };
        Some(preset)
    }

    /// Fallback used for unknown names.
    pub fn fade(phase: Phase) -> Self {
        match phase {
            Phase::Enter => Preset::FadeIn,
            Phase::Exit => Preset::FadeOut,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Preset::FadeIn
            | Preset::ZoomIn
            | Preset::SlideFromBottom
            | Preset::SlideFromTop
            | Preset::SlideFromLeft
            | Preset::SlideFromRight => Phase::Enter,
            _ => Phase::Exit,
        }
    }

    /// Expand to keyframes for the given viewport.
    pub fn keyframes(&self, viewport: Viewport) -> KeyframeSpec {
        let (w, h) = (viewport.width, viewport.height);
        let rest = StyleSnapshot::new()
            .opacity(1.0)
            .translate_x(0.0)
            .translate_y(0.0)
            .scale(1.0);

        let offscreen = match self {
            Preset::FadeIn | Preset::FadeOut => StyleSnapshot::new().opacity(0.0),
            Preset::ZoomIn | Preset::ZoomOut => StyleSnapshot::new().scale(0.0),
            Preset::SlideFromBottom | Preset::SlideToBottom => StyleSnapshot::new().translate_y(h),
            Preset::SlideFromTop | Preset::SlideToTop => StyleSnapshot::new().translate_y(-h),
            Preset::SlideFromLeft | Preset::SlideToLeft => StyleSnapshot::new().translate_x(-w),
            Preset::SlideFromRight | Preset::SlideToRight => StyleSnapshot::new().translate_x(w),
        };

        match self.phase() {
            Phase::Enter => KeyframeSpec::from_to(offscreen, rest).easing(TimingFunction::EaseOut),
            Phase::Exit => KeyframeSpec::from_to(rest, offscreen).easing(TimingFunction::EaseIn),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedAnimation {
    Preset(Preset),
    Keyframes(KeyframeSpec),
}

/// Concrete animation for one phase of a show/hide cycle.
///
/// Both presets and custom keyframes complete on a timer of `duration`;
/// completion of an exit descriptor is what unmounts the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub phase: Phase,
    pub animation: ResolvedAnimation,
    pub duration: Duration,
}

impl AnimationDescriptor {
    pub fn resolve(spec: &AnimationSpec, phase: Phase, duration: Duration) -> Self {
        let animation = match spec {
            AnimationSpec::Named(name) => match Preset::from_name(name) {
                Some(preset) => {
                    if preset.phase() != phase {
                        log::warn!("Animation '{}' used for {:?} phase", name, phase);
                    }
                    ResolvedAnimation::Preset(preset)
                }
                None => {
                    log::warn!("Unknown animation '{}', falling back to fade", name);
                    ResolvedAnimation::Preset(Preset::fade(phase))
                }
            },
            AnimationSpec::Keyframes(spec) => ResolvedAnimation::Keyframes(spec.clone()),
        };
        Self {
            phase,
            animation,
            duration,
        }
    }

    /// Style of the content at `progress` (0.0 to 1.0) through this animation.
    pub fn sample(&self, progress: f32, viewport: Viewport) -> ContentStyle {
        match &self.animation {
            ResolvedAnimation::Preset(preset) => preset.keyframes(viewport).sample(progress),
            ResolvedAnimation::Keyframes(spec) => spec.sample(progress),
        }
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration.as_secs_f32() * 1000.0
    }
}

/// Resolved enter and exit animations, recomputed when the animation
/// configuration changes.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationPair {
    pub enter: AnimationDescriptor,
    pub exit: AnimationDescriptor,
}

impl AnimationPair {
    pub fn resolve(
        animation_in: &AnimationSpec,
        in_timing: Duration,
        animation_out: &AnimationSpec,
        out_timing: Duration,
    ) -> Self {
        Self {
            enter: AnimationDescriptor::resolve(animation_in, Phase::Enter, in_timing),
            exit: AnimationDescriptor::resolve(animation_out, Phase::Exit, out_timing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(400.0, 800.0);

    fn resolve(name: &str, phase: Phase) -> AnimationDescriptor {
        AnimationDescriptor::resolve(&name.into(), phase, Duration::from_millis(300))
    }

    #[test]
    fn test_slide_in_up_starts_below_viewport() {
        let d = resolve("slideInUp", Phase::Enter);
        assert_eq!(d.animation, ResolvedAnimation::Preset(Preset::SlideFromBottom));

        let start = d.sample(0.0, VIEWPORT);
        assert_eq!(start.translate, (0.0, 800.0));
        assert_eq!(d.sample(1.0, VIEWPORT), ContentStyle::REST);
    }

    #[test]
    fn test_slide_in_down_starts_above_viewport() {
        let d = resolve("slideInDown", Phase::Enter);
        assert_eq!(d.sample(0.0, VIEWPORT).translate, (0.0, -800.0));
    }

    #[test]
    fn test_slide_out_down_leaves_through_bottom() {
        let d = resolve("slideOutDown", Phase::Exit);
        assert_eq!(d.sample(0.0, VIEWPORT), ContentStyle::REST);
        assert_eq!(d.sample(1.0, VIEWPORT).translate, (0.0, 800.0));
    }

    #[test]
    fn test_horizontal_names_map_straight_across() {
        assert_eq!(
            resolve("slideInLeft", Phase::Enter).sample(0.0, VIEWPORT).translate,
            (-400.0, 0.0)
        );
        assert_eq!(
            resolve("slideOutRight", Phase::Exit).sample(1.0, VIEWPORT).translate,
            (400.0, 0.0)
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_fade() {
        let enter = resolve("bounceInSideways", Phase::Enter);
        assert_eq!(enter.animation, ResolvedAnimation::Preset(Preset::FadeIn));
        assert_eq!(enter.sample(0.0, VIEWPORT).opacity, 0.0);

        let exit = resolve("", Phase::Exit);
        assert_eq!(exit.animation, ResolvedAnimation::Preset(Preset::FadeOut));
        assert_eq!(exit.sample(1.0, VIEWPORT).opacity, 0.0);
    }

    #[test]
    fn test_keyframes_keep_configured_duration() {
        let spec = AnimationSpec::Keyframes(KeyframeSpec::from_to(
            StyleSnapshot::new().scale(0.8).opacity(0.0),
            StyleSnapshot::new().scale(1.0).opacity(1.0),
        ));
        let d = AnimationDescriptor::resolve(&spec, Phase::Enter, Duration::from_millis(450));
        assert_eq!(d.duration, Duration::from_millis(450));
        assert_eq!(d.sample(0.0, VIEWPORT).scale, 0.8);
    }

    #[test]
    fn test_zoom_scales_from_nothing() {
        let d = resolve("zoomIn", Phase::Enter);
        assert_eq!(d.sample(0.0, VIEWPORT).scale, 0.0);
        assert_eq!(d.sample(1.0, VIEWPORT).scale, 1.0);
    }
}
