//! Keyframe animations over a small set of visual properties.
//!
//! A [`KeyframeSpec`] maps checkpoints (percentages of the animation's
//! duration) to partial [`StyleSnapshot`]s. Properties missing from a
//! checkpoint are interpolated between the nearest checkpoints that define
//! them, the same way CSS keyframes behave.

use super::{Animatable, TimingFunction};

/// Partial style at one keyframe checkpoint. `None` leaves the property to
/// neighbouring checkpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleSnapshot {
    pub opacity: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub scale: Option<f32>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn translate_x(mut self, x: f32) -> Self {
        self.translate_x = Some(x);
        self
    }

    pub fn translate_y(mut self, y: f32) -> Self {
        self.translate_y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Fully resolved style of the content panel at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentStyle {
    pub opacity: f32,
    pub translate: (f32, f32),
    pub scale: f32,
}

impl ContentStyle {
    /// Content at rest: opaque, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        translate: (0.0, 0.0),
        scale: 1.0,
    };
}

impl Default for ContentStyle {
    fn default() -> Self {
        Self::REST
    }
}

impl Animatable for ContentStyle {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            opacity: f32::lerp(&from.opacity, &to.opacity, t),
            translate: <(f32, f32)>::lerp(&from.translate, &to.translate, t),
            scale: f32::lerp(&from.scale, &to.scale, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSpec {
    /// Sorted by checkpoint, checkpoints in [0, 100]
    frames: Vec<(f32, StyleSnapshot)>,
    easing: TimingFunction,
}

impl KeyframeSpec {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            easing: TimingFunction::Linear,
        }
    }

    /// Shorthand for a two-checkpoint animation.
    pub fn from_to(from: StyleSnapshot, to: StyleSnapshot) -> Self {
        Self::new().at(0.0, from).at(100.0, to)
    }

    /// Set the style at `percent` of the duration. Replaces an existing
    /// checkpoint at the same position.
    pub fn at(mut self, percent: f32, style: StyleSnapshot) -> Self {
        let percent = percent.clamp(0.0, 100.0);
        match self
            .frames
            .binary_search_by(|(p, _)| p.total_cmp(&percent))
        {
            Ok(i) => self.frames[i].1 = style,
            Err(i) => self.frames.insert(i, (percent, style)),
        }
        self
    }

    pub fn easing(mut self, easing: TimingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn checkpoints(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().map(|(p, _)| *p)
    }

    /// Resolve the style at `progress` (0.0 to 1.0 of the duration).
    pub fn sample(&self, progress: f32) -> ContentStyle {
        let at = self.easing.evaluate(progress) * 100.0;
        let rest = ContentStyle::REST;
        ContentStyle {
            opacity: self.property(at, |s| s.opacity).unwrap_or(rest.opacity),
            translate: (
                self.property(at, |s| s.translate_x)
                    .unwrap_or(rest.translate.0),
                self.property(at, |s| s.translate_y)
                    .unwrap_or(rest.translate.1),
            ),
            scale: self.property(at, |s| s.scale).unwrap_or(rest.scale),
        }
    }

    fn property(&self, at: f32, get: impl Fn(&StyleSnapshot) -> Option<f32>) -> Option<f32> {
        let before = self
            .frames
            .iter()
            .rev()
            .find_map(|(p, s)| (*p <= at).then(|| get(s).map(|v| (*p, v))).flatten());
        let after = self
            .frames
            .iter()
            .find_map(|(p, s)| (*p >= at).then(|| get(s).map(|v| (*p, v))).flatten());

        match (before, after) {
            (Some((p0, v0)), Some((p1, v1))) if p1 > p0 => {
                Some(f32::lerp(&v0, &v1, (at - p0) / (p1 - p0)))
            }
            (Some((_, v)), _) | (None, Some((_, v))) => Some(v),
            (None, None) => None,
        }
    }
}

impl Default for KeyframeSpec {
    fn default() -> Self {
        Self::new()
    }
}
