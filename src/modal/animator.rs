//! Drives the modal's programmatic animations.
//!
//! The animator is the [`Writer::Animation`] side of the presentation values.
//! It never calls application code: completions of enter and exit animations
//! are posted to the modal's mailbox and handled on the next pump.

use std::time::Instant;

use crate::animation::{
    AdvanceResult, AnimationDescriptor, AnimationState, ContentStyle, SpringConfig, TimingFunction,
    Transition,
};
use crate::primitives::Viewport;
use crate::reactive::{MessageSender, ModalMessage, PresentationValues, SharedValue, Writer};

/// Enter or exit animation of the content panel.
struct ContentTrack {
    descriptor: AnimationDescriptor,
    generation: u64,
    /// Linear 0 to 1 over the descriptor's duration
    progress: AnimationState<f32>,
}

pub struct Animator {
    sender: MessageSender,
    pan_x: AnimationState<f32>,
    pan_y: AnimationState<f32>,
    backdrop: AnimationState<f32>,
    content: Option<ContentTrack>,
}

impl Animator {
    pub fn new(sender: MessageSender, now: Instant) -> Self {
        let rest = Transition::default();
        Self {
            sender,
            pan_x: AnimationState::new(0.0, rest, now),
            pan_y: AnimationState::new(0.0, rest, now),
            backdrop: AnimationState::new(0.0, rest, now),
            content: None,
        }
    }

    /// Fade the backdrop from wherever it is to `opacity`.
    pub fn fade_backdrop(&mut self, values: &PresentationValues, opacity: f32, duration_ms: f32, now: Instant) {
        let from = values.backdrop_opacity.get();
        self.backdrop.start(
            from,
            opacity,
            Transition::new(duration_ms, TimingFunction::EaseInOut),
            now,
        );
    }

    /// Spring both pan offsets back to zero.
    pub fn spring_pan_home(&mut self, values: &PresentationValues, now: Instant) {
        let spring = Transition::spring(SpringConfig::SPRING_BACK);
        self.pan_x.start(values.pan_x.get(), 0.0, spring, now);
        self.pan_y.start(values.pan_y.get(), 0.0, spring, now);
    }

    /// Put the pan offsets at zero without animating.
    pub fn reset_pan(&mut self, values: &PresentationValues) {
        self.pan_x.set_immediate(0.0);
        self.pan_y.set_immediate(0.0);
        values.pan_x.set(Writer::Animation, 0.0);
        values.pan_y.set(Writer::Animation, 0.0);
    }

    /// Stop value animations where they are, ahead of a gesture taking over.
    pub fn stop_values(&mut self, values: &PresentationValues) {
        self.pan_x.set_immediate(values.pan_x.get());
        self.pan_y.set_immediate(values.pan_y.get());
        self.backdrop.set_immediate(values.backdrop_opacity.get());
    }

    /// Play an enter or exit animation of the content.
    pub fn play(&mut self, descriptor: &AnimationDescriptor, generation: u64, now: Instant) {
        let mut progress = AnimationState::new(0.0, Transition::linear(descriptor.duration_ms()), now);
        progress.start(0.0, 1.0, Transition::linear(descriptor.duration_ms()), now);
        self.content = Some(ContentTrack {
            descriptor: descriptor.clone(),
            generation,
            progress,
        });
    }

    /// Forget the content animation once the content is unmounted.
    pub fn clear_content(&mut self) {
        self.content = None;
    }

    /// Advance everything to `now`. Returns whether anything is still moving.
    pub fn tick(&mut self, values: &PresentationValues, now: Instant) -> bool {
        let mut animating = false;
        animating |= drive(&mut self.pan_x, &values.pan_x, now);
        animating |= drive(&mut self.pan_y, &values.pan_y, now);
        animating |= drive(&mut self.backdrop, &values.backdrop_opacity, now);

        if let Some(track) = self.content.as_mut() {
            if track.progress.is_animating() {
                if track.progress.advance(now).is_finished() {
                    log::debug!(
                        "{:?} animation finished (generation {})",
                        track.descriptor.phase,
                        track.generation
                    );
                    self.sender.send(ModalMessage::AnimationFinished {
                        phase: track.descriptor.phase,
                        generation: track.generation,
                    });
                } else {
                    animating = true;
                }
            }
        }

        animating
    }

    /// Style of the content from its enter/exit animation alone.
    pub fn content_style(&self, viewport: Viewport) -> ContentStyle {
        match &self.content {
            Some(track) => track.descriptor.sample(*track.progress.current(), viewport),
            None => ContentStyle::REST,
        }
    }
}

fn drive(state: &mut AnimationState<f32>, value: &SharedValue, now: Instant) -> bool {
    if !state.is_animating() {
        return false;
    }
    match state.advance(now) {
        AdvanceResult::Changed(v) => {
            value.set(Writer::Animation, v);
            true
        }
        AdvanceResult::Finished(v) => {
            value.set(Writer::Animation, v);
            false
        }
        AdvanceResult::NoChange => true,
    }
}
