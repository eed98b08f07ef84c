//! The modal component: configuration, orchestration and presentation.
//!
//! A [`Modal`] is driven entirely by its host:
//!
//! - [`set_visible`](Modal::set_visible) whenever the application's
//!   visibility flag changes,
//! - touch events through [`touch_start`](Modal::touch_start),
//!   [`touch_move`](Modal::touch_move), [`touch_end`](Modal::touch_end) and
//!   [`touch_cancel`](Modal::touch_cancel),
//! - [`frame`](Modal::frame) once per frame to advance animations and deliver
//!   their completions,
//! - [`scene`](Modal::scene) to obtain what should be drawn.
//!
//! ```ignore
//! let mut modal = Modal::new()
//!     .swipe_direction(Direction::Down)
//!     .on_swipe_complete(move |_| visible.set(false))
//!     .on_modal_hide(|| log::info!("closed"));
//!
//! modal.set_visible(true, Instant::now());
//! ```

mod animator;
mod callbacks;
mod config;
mod shell;

pub use animator::Animator;
pub use callbacks::{Callback, ModalCallbacks, SwipeComplete};
pub use config::{
    BackdropConfig, ElementHandle, HostOptions, ModalConfig, Orientation, PresentationStyle,
};
pub use shell::{
    BackdropFill, BackdropLayer, ContentLayer, HostSurface, KeyboardAvoidance, KeyboardBehavior,
    Scene,
};

use std::time::{Duration, Instant};

use crate::animation::{AnimationPair, AnimationSpec};
use crate::gesture::{
    Capture, Direction, Directions, GestureInterpreter, GestureState, MoveOutcome, NestedScroll,
    PropagateSwipe, ReleaseOutcome, ScrollRequest, TouchStart, DEFAULT_DEADZONE,
};
use crate::lifecycle::{Lifecycle, LifecycleEffect, LifecycleState};
use crate::primitives::{Color, EventResponse, Viewport};
use crate::reactive::{Mailbox, MessageSender, ModalMessage, PresentationValues, Writer};
use crate::Result;

use callbacks::{fire, fire_with};

/// Imperative open/close handle. Requests are applied on the modal's next
/// pump, on the thread that owns the modal.
#[derive(Clone)]
pub struct ModalHandle {
    sender: MessageSender,
}

impl ModalHandle {
    pub fn open(&self) {
        self.sender.send(ModalMessage::Open);
    }

    pub fn close(&self) {
        self.sender.send(ModalMessage::Close);
    }
}

pub struct Modal {
    config: ModalConfig,
    callbacks: ModalCallbacks,
    animations: AnimationPair,
    lifecycle: Lifecycle,
    /// Last visibility flag received from the application
    intent: bool,
    gesture: GestureInterpreter,
    values: PresentationValues,
    animator: Animator,
    mailbox: Mailbox,
    reported_viewport: Viewport,
}

impl Modal {
    pub fn new() -> Self {
        Self::with_config(ModalConfig::default())
    }

    pub fn with_config(config: ModalConfig) -> Self {
        let mailbox = Mailbox::new();
        let animator = Animator::new(mailbox.sender(), Instant::now());
        let animations = resolve_animations(&config);
        Self {
            config,
            callbacks: ModalCallbacks::default(),
            animations,
            lifecycle: Lifecycle::new(),
            intent: false,
            gesture: GestureInterpreter::new(),
            values: PresentationValues::new(),
            animator,
            mailbox,
            reported_viewport: Viewport::default(),
        }
    }

    // ------------------------------------------------------------------
    // Builder: animation
    // ------------------------------------------------------------------

    pub fn animation_in(mut self, spec: impl Into<AnimationSpec>) -> Self {
        self.config.animation_in = spec.into();
        self.refresh_animations();
        self
    }

    pub fn animation_out(mut self, spec: impl Into<AnimationSpec>) -> Self {
        self.config.animation_out = spec.into();
        self.refresh_animations();
        self
    }

    pub fn animation_in_timing(mut self, timing: Duration) -> Self {
        self.config.animation_in_timing = timing;
        self.refresh_animations();
        self
    }

    pub fn animation_out_timing(mut self, timing: Duration) -> Self {
        self.config.animation_out_timing = timing;
        self.refresh_animations();
        self
    }

    // ------------------------------------------------------------------
    // Builder: backdrop
    // ------------------------------------------------------------------

    pub fn has_backdrop(mut self, enabled: bool) -> Self {
        self.config.backdrop.enabled = enabled;
        self
    }

    pub fn backdrop_color(mut self, color: Color) -> Self {
        self.config.backdrop.color = color;
        self
    }

    /// Set the backdrop color from a CSS-style string. Unparsable colors fall
    /// back to black.
    pub fn backdrop_color_str(mut self, color: &str) -> Self {
        self.config.backdrop.color = color.parse().unwrap_or_else(|e| {
            log::warn!("{}, using black", e);
            Color::BLACK
        });
        self
    }

    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.config.backdrop.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn backdrop_transition_in_timing(mut self, timing: Duration) -> Self {
        self.config.backdrop.transition_in = timing;
        self
    }

    pub fn backdrop_transition_out_timing(mut self, timing: Duration) -> Self {
        self.config.backdrop.transition_out = timing;
        self
    }

    pub fn custom_backdrop(mut self, element: ElementHandle) -> Self {
        self.config.backdrop.custom = Some(element);
        self
    }

    // ------------------------------------------------------------------
    // Builder: swipe
    // ------------------------------------------------------------------

    pub fn swipe_direction(mut self, directions: impl Into<Directions>) -> Self {
        self.config.swipe.directions = directions.into();
        self
    }

    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.config.swipe.threshold = threshold;
        self
    }

    /// Movement needed before a swipe picks its direction. Zero or less
    /// restores the default of 4.
    pub fn pan_responder_threshold(mut self, deadzone: f32) -> Self {
        self.config.swipe.deadzone = if deadzone > 0.0 {
            deadzone
        } else {
            DEFAULT_DEADZONE
        };
        self
    }

    pub fn propagate_swipe(mut self, propagate: bool) -> Self {
        self.callbacks.propagate_swipe = PropagateSwipe::Fixed(propagate);
        self
    }

    pub fn propagate_swipe_when(mut self, predicate: impl Fn(&GestureState) -> bool + 'static) -> Self {
        self.callbacks.propagate_swipe = PropagateSwipe::When(Box::new(predicate));
        self
    }

    pub fn on_swipe_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_swipe_start = Some(Box::new(f));
        self
    }

    pub fn on_swipe_move(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.callbacks.on_swipe_move = Some(Box::new(f));
        self
    }

    pub fn on_swipe_complete(mut self, f: impl FnMut(SwipeComplete) + 'static) -> Self {
        self.callbacks.on_swipe_complete = Some(Box::new(f));
        self
    }

    pub fn on_swipe_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_swipe_cancel = Some(Box::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Builder: nested scroll
    // ------------------------------------------------------------------

    pub fn scroll_to(mut self, f: impl FnMut(ScrollRequest) + 'static) -> Self {
        self.callbacks.scroll_to = Some(Box::new(f));
        self
    }

    pub fn scroll_offset(mut self, offset: f32) -> Self {
        self.config.scroll.offset = offset;
        self
    }

    pub fn scroll_offset_max(mut self, max: f32) -> Self {
        self.config.scroll.offset_max = max;
        self
    }

    pub fn scroll_horizontal(mut self, horizontal: bool) -> Self {
        self.config.scroll.horizontal = horizontal;
        self
    }

    // ------------------------------------------------------------------
    // Builder: lifecycle notifications
    // ------------------------------------------------------------------

    pub fn on_modal_will_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_modal_will_show = Some(Box::new(f));
        self
    }

    pub fn on_modal_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_modal_show = Some(Box::new(f));
        self
    }

    pub fn on_modal_will_hide(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_modal_will_hide = Some(Box::new(f));
        self
    }

    pub fn on_modal_hide(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_modal_hide = Some(Box::new(f));
        self
    }

    pub fn on_backdrop_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_backdrop_press = Some(Box::new(f));
        self
    }

    pub fn on_back_button_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_back_button_press = Some(Box::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Builder: presentation
    // ------------------------------------------------------------------

    pub fn cover_screen(mut self, cover: bool) -> Self {
        self.config.cover_screen = cover;
        self
    }

    pub fn avoid_keyboard(mut self, avoid: bool) -> Self {
        self.config.avoid_keyboard = avoid;
        self
    }

    pub fn device_size(mut self, width: f32, height: f32) -> Self {
        self.config.device_width = Some(width);
        self.config.device_height = Some(height);
        self
    }

    pub fn content_margin(mut self, margin: f32) -> Self {
        self.config.content_margin = Some(margin);
        self
    }

    pub fn host_options(mut self, options: HostOptions) -> Self {
        self.config.host = options;
        self
    }

    pub fn on_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_show = Some(Box::new(f));
        self
    }

    pub fn on_dismiss(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_dismiss = Some(Box::new(f));
        self
    }

    pub fn on_orientation_change(mut self, f: impl FnMut(Orientation) + 'static) -> Self {
        self.callbacks.on_orientation_change = Some(Box::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Runtime configuration
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Change configuration in place, e.g. when the application re-renders
    /// with new props. Animation descriptors are re-resolved; a running
    /// animation keeps the descriptor it started with.
    pub fn update_config(&mut self, f: impl FnOnce(&mut ModalConfig)) {
        f(&mut self.config);
        self.refresh_animations();
    }

    /// Report the scroll position of the nested scrollable.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.config.scroll.offset = offset;
    }

    /// Report the size of the viewport the host renders into.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.reported_viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport(self.reported_viewport)
    }

    fn refresh_animations(&mut self) {
        self.animations = resolve_animations(&self.config);
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Apply the application's visibility flag. Only changes take effect.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.intent {
            return;
        }
        self.intent = visible;
        let effects = self.lifecycle.request(visible);
        self.apply(effects, now);
    }

    /// The flag last passed to [`set_visible`](Self::set_visible). Does not
    /// follow `open`/`close`, the handle or swipe dismissal; see
    /// [`state`](Self::state) for what the modal is doing.
    pub fn visibility_intent(&self) -> bool {
        self.intent
    }

    pub fn open(&mut self, now: Instant) {
        let effects = self.lifecycle.request(true);
        self.apply(effects, now);
    }

    pub fn close(&mut self, now: Instant) {
        let effects = self.lifecycle.request(false);
        self.apply(effects, now);
    }

    /// A handle that can open and close the modal from elsewhere, including
    /// other threads.
    pub fn handle(&self) -> ModalHandle {
        ModalHandle {
            sender: self.mailbox.sender(),
        }
    }

    /// Wake a calloop event loop whenever the modal has messages to pump.
    pub fn attach_wakeup(&self) -> Result<calloop::ping::PingSource> {
        self.mailbox.attach_wakeup()
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn is_overlay_mounted(&self) -> bool {
        self.lifecycle.state().is_overlay_mounted()
    }

    pub fn is_content_mounted(&self) -> bool {
        self.lifecycle.state().is_content_mounted()
    }

    pub fn values(&self) -> &PresentationValues {
        &self.values
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advance animations to `now` and handle whatever they completed.
    /// Returns whether another frame is needed.
    pub fn frame(&mut self, now: Instant) -> bool {
        let animating = self.animator.tick(&self.values, now);
        self.pump(now);
        animating
    }

    /// Handle posted animation completions and open/close requests.
    pub fn pump(&mut self, now: Instant) {
        for message in self.mailbox.drain() {
            let effects = match message {
                ModalMessage::AnimationFinished { phase, generation } => {
                    self.lifecycle.animation_finished(phase, generation)
                }
                ModalMessage::Open => self.lifecycle.request(true),
                ModalMessage::Close => self.lifecycle.request(false),
            };
            self.apply(effects, now);
        }
    }

    fn apply(&mut self, effects: Vec<LifecycleEffect>, now: Instant) {
        for effect in effects {
            match effect {
                LifecycleEffect::MountOverlay | LifecycleEffect::MountContent => {
                    log::trace!("{:?}", effect);
                }
                LifecycleEffect::WillShow => {
                    self.take_back_values();
                    self.animator.reset_pan(&self.values);
                    fire(&mut self.callbacks.on_modal_will_show);
                }
                LifecycleEffect::StartEnter { generation } => {
                    let backdrop = &self.config.backdrop;
                    self.animator.fade_backdrop(
                        &self.values,
                        backdrop.opacity,
                        millis(backdrop.transition_in),
                        now,
                    );
                    self.animator.play(&self.animations.enter, generation, now);
                }
                LifecycleEffect::DidShow => fire(&mut self.callbacks.on_modal_show),
                LifecycleEffect::WillHide => {
                    self.take_back_values();
                    fire(&mut self.callbacks.on_modal_will_hide);
                }
                LifecycleEffect::StartExit { generation } => {
                    self.animator.fade_backdrop(
                        &self.values,
                        0.0,
                        millis(self.config.backdrop.transition_out),
                        now,
                    );
                    self.animator.play(&self.animations.exit, generation, now);
                }
                LifecycleEffect::UnmountContent => self.animator.clear_content(),
                LifecycleEffect::UnmountOverlay => log::trace!("{:?}", effect),
                LifecycleEffect::DidHide => fire(&mut self.callbacks.on_modal_hide),
            }
        }
    }

    /// End any gesture and give the live values back to the animator.
    fn take_back_values(&mut self) {
        if self.gesture.terminate().is_some() {
            log::debug!("Active swipe abandoned by visibility change");
        }
        self.values.claim_all(Writer::Animation);
    }

    // ------------------------------------------------------------------
    // Touch input
    // ------------------------------------------------------------------

    fn accepts_touches(&self) -> bool {
        matches!(
            self.lifecycle.state(),
            LifecycleState::Showing | LifecycleState::Shown
        )
    }

    /// Scroll state of the nested scrollable, when the application can
    /// scroll it.
    fn nested_scroll(&self) -> Option<NestedScroll> {
        self.callbacks.scroll_to.is_some().then_some(self.config.scroll)
    }

    /// A touch went down on the content panel.
    pub fn touch_start(&mut self, touch: TouchStart) -> EventResponse {
        if !self.accepts_touches() {
            return EventResponse::Ignored;
        }
        let nested = self.nested_scroll();
        let capture = self.gesture.begin(
            touch,
            &self.config.swipe,
            &self.callbacks.propagate_swipe,
            nested.as_ref(),
        );
        if capture == Capture::Claim {
            fire(&mut self.callbacks.on_swipe_start);
        }
        EventResponse::from(capture == Capture::Claim)
    }

    /// The touch moved. `gesture` carries the accumulated displacement.
    pub fn touch_move(&mut self, gesture: GestureState) -> EventResponse {
        if self.gesture.session().is_none() {
            return EventResponse::Ignored;
        }
        let was_captured = self.gesture.is_captured();
        let nested = self.nested_scroll();
        let viewport = self.viewport();
        let outcome = self.gesture.update(
            &gesture,
            &self.config.swipe,
            &self.callbacks.propagate_swipe,
            nested.as_ref(),
            viewport,
        );
        if !was_captured && self.gesture.is_captured() {
            fire(&mut self.callbacks.on_swipe_start);
        }

        match outcome {
            MoveOutcome::Track {
                direction,
                offset,
                percentage_shown,
            } => {
                if self.values.backdrop_opacity.writer() != Writer::Gesture {
                    self.animator.stop_values(&self.values);
                    self.values.claim_all(Writer::Gesture);
                }
                let pan = if direction.is_horizontal() {
                    &self.values.pan_x
                } else {
                    &self.values.pan_y
                };
                pan.set(Writer::Gesture, offset);
                self.values.backdrop_opacity.set(
                    Writer::Gesture,
                    self.config.backdrop.opacity * percentage_shown,
                );
                fire_with(&mut self.callbacks.on_swipe_move, percentage_shown);
            }
            MoveOutcome::Scroll(request) => fire_with(&mut self.callbacks.scroll_to, request),
            MoveOutcome::Ignored => {}
        }

        EventResponse::from(self.gesture.is_captured())
    }

    /// The touch was lifted.
    pub fn touch_end(&mut self, gesture: GestureState, now: Instant) -> EventResponse {
        let nested = self.nested_scroll();
        match self
            .gesture
            .release(&gesture, &self.config.swipe, nested.as_ref())
        {
            ReleaseOutcome::Commit(direction) => {
                self.complete_swipe(direction, now);
                EventResponse::Handled
            }
            ReleaseOutcome::Cancel { restore_scroll } => {
                fire(&mut self.callbacks.on_swipe_cancel);
                self.spring_back(now);
                if let Some(request) = restore_scroll {
                    fire_with(&mut self.callbacks.scroll_to, request);
                }
                EventResponse::Handled
            }
            ReleaseOutcome::Ignored => EventResponse::Ignored,
        }
    }

    /// The host took the touch away, e.g. to a competing gesture.
    pub fn touch_cancel(&mut self, now: Instant) {
        if let Some(session) = self.gesture.terminate() {
            if session.committed.is_some() {
                fire(&mut self.callbacks.on_swipe_cancel);
            }
            self.spring_back(now);
        }
    }

    fn complete_swipe(&mut self, direction: Direction, now: Instant) {
        fire_with(
            &mut self.callbacks.on_swipe_complete,
            SwipeComplete {
                swiping_direction: direction,
            },
        );
        self.close(now);
    }

    /// Return the content and backdrop to rest after an abandoned swipe.
    fn spring_back(&mut self, now: Instant) {
        if self.values.backdrop_opacity.writer() != Writer::Gesture {
            return;
        }
        self.values.claim_all(Writer::Animation);
        self.animator.fade_backdrop(
            &self.values,
            self.config.backdrop.opacity,
            millis(self.config.backdrop.transition_in),
            now,
        );
        self.animator.spring_pan_home(&self.values, now);
    }

    // ------------------------------------------------------------------
    // Host events
    // ------------------------------------------------------------------

    /// The default backdrop scrim was tapped.
    pub fn press_backdrop(&mut self) -> EventResponse {
        let backdrop = &self.config.backdrop;
        if !self.is_overlay_mounted() || !backdrop.enabled || backdrop.custom.is_some() {
            return EventResponse::Ignored;
        }
        fire(&mut self.callbacks.on_backdrop_press);
        EventResponse::Handled
    }

    /// Hardware back button, or the host overlay asking to close. Consumed
    /// while the modal is visible and a callback is set.
    pub fn back_button(&mut self) -> EventResponse {
        if !self.lifecycle.should_show() {
            return EventResponse::Ignored;
        }
        match self.callbacks.on_back_button_press.as_mut() {
            Some(cb) => {
                cb();
                EventResponse::Handled
            }
            None => EventResponse::Ignored,
        }
    }

    /// The host overlay asked to close, e.g. from a platform gesture.
    pub fn request_close(&mut self) -> EventResponse {
        self.back_button()
    }

    /// The host overlay finished presenting.
    pub fn host_shown(&mut self) {
        fire(&mut self.callbacks.on_show);
    }

    /// The host overlay was dismissed.
    pub fn host_dismissed(&mut self) {
        fire(&mut self.callbacks.on_dismiss);
    }

    pub fn orientation_changed(&mut self, orientation: Orientation) {
        fire_with(&mut self.callbacks.on_orientation_change, orientation);
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_animations(config: &ModalConfig) -> AnimationPair {
    AnimationPair::resolve(
        &config.animation_in,
        config.animation_in_timing,
        &config.animation_out,
        config.animation_out_timing,
    )
}

fn millis(duration: Duration) -> f32 {
    duration.as_secs_f32() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    fn shown(modal: &mut Modal, t0: Instant) {
        modal.set_visible(true, t0);
        modal.frame(t0 + Duration::from_millis(300));
        assert_eq!(modal.state(), LifecycleState::Shown);
    }

    #[test]
    fn test_set_visible_acts_only_on_change() {
        let (will_show, cb) = counter();
        let mut modal = Modal::new().on_modal_will_show(cb);
        let t0 = Instant::now();

        modal.set_visible(false, t0);
        assert_eq!(modal.state(), LifecycleState::Hidden);
        modal.set_visible(true, t0);
        modal.set_visible(true, t0);
        assert_eq!(will_show.get(), 1);
        assert!(modal.visibility_intent());
    }

    #[test]
    fn test_back_button_consumed_only_while_visible() {
        let (presses, cb) = counter();
        let mut modal = Modal::new().on_back_button_press(cb);
        let t0 = Instant::now();

        assert_eq!(modal.back_button(), EventResponse::Ignored);
        modal.set_visible(true, t0);
        assert_eq!(modal.back_button(), EventResponse::Handled);
        assert_eq!(modal.request_close(), EventResponse::Handled);
        assert_eq!(presses.get(), 2);

        modal.set_visible(false, t0);
        assert_eq!(modal.back_button(), EventResponse::Ignored);
        assert_eq!(presses.get(), 2);
    }

    #[test]
    fn test_back_button_without_callback_is_not_consumed() {
        let mut modal = Modal::new();
        modal.set_visible(true, Instant::now());
        assert_eq!(modal.back_button(), EventResponse::Ignored);
    }

    #[test]
    fn test_backdrop_press() {
        let (presses, cb) = counter();
        let mut modal = Modal::new().on_backdrop_press(cb);
        assert_eq!(modal.press_backdrop(), EventResponse::Ignored);

        shown(&mut modal, Instant::now());
        assert_eq!(modal.press_backdrop(), EventResponse::Handled);
        assert_eq!(presses.get(), 1);

        modal.update_config(|c| c.backdrop.custom = Some(ElementHandle(1)));
        assert_eq!(modal.press_backdrop(), EventResponse::Ignored);
        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_touches_ignored_unless_showing_or_shown() {
        let mut modal = Modal::new().swipe_direction(Direction::Down);
        let t0 = Instant::now();
        assert_eq!(
            modal.touch_start(TouchStart::new(10.0, 10.0)),
            EventResponse::Ignored
        );

        modal.set_visible(true, t0);
        assert_eq!(
            modal.touch_start(TouchStart::new(10.0, 10.0)),
            EventResponse::Handled
        );

        modal.set_visible(false, t0);
        assert_eq!(
            modal.touch_start(TouchStart::new(10.0, 10.0)),
            EventResponse::Ignored
        );
    }

    #[test]
    fn test_swipe_disabled_by_default() {
        let mut modal = Modal::new();
        shown(&mut modal, Instant::now());
        assert_eq!(
            modal.touch_start(TouchStart::new(10.0, 10.0)),
            EventResponse::Ignored
        );
    }

    #[test]
    fn test_swipe_move_reports_percentage_shown() {
        let seen = Rc::new(Cell::new(-1.0));
        let s = seen.clone();
        let mut modal = Modal::new()
            .device_size(400.0, 800.0)
            .swipe_direction(Direction::Down)
            .on_swipe_move(move |p| s.set(p));
        shown(&mut modal, Instant::now());

        let origin = GestureState::at(200.0, 400.0);
        modal.touch_start(TouchStart::new(200.0, 400.0));
        modal.touch_move(origin.moved_by(0.0, 100.0));

        assert!((seen.get() - 0.75).abs() < 1e-5);
        assert_eq!(modal.values().pan(), (0.0, 100.0));
        assert!((modal.values().backdrop_opacity.get() - 0.7 * 0.75).abs() < 1e-5);
        assert_eq!(modal.values().pan_y.writer(), Writer::Gesture);
    }

    #[test]
    fn test_touch_cancel_restores_rest() {
        let (cancels, cb) = counter();
        let mut modal = Modal::new()
            .swipe_direction(Direction::Left)
            .on_swipe_cancel(cb);
        let t0 = Instant::now();
        shown(&mut modal, t0);

        let origin = GestureState::at(300.0, 400.0);
        modal.touch_start(TouchStart::new(300.0, 400.0));
        modal.touch_move(origin.moved_by(-80.0, 0.0));
        assert_eq!(modal.values().pan_x.get(), -80.0);

        modal.touch_cancel(t0);
        assert_eq!(cancels.get(), 1);
        assert_eq!(modal.values().pan_x.writer(), Writer::Animation);

        let mut now = t0;
        while modal.frame(now) {
            now += Duration::from_millis(16);
        }
        assert_eq!(modal.values().pan(), (0.0, 0.0));

        // Nothing left to release
        assert_eq!(
            modal.touch_end(origin.moved_by(-200.0, 0.0), now),
            EventResponse::Ignored
        );
    }

    #[test]
    fn test_hide_during_swipe_abandons_gesture() {
        let mut modal = Modal::new().swipe_direction(Direction::Down);
        let t0 = Instant::now();
        shown(&mut modal, t0);

        let origin = GestureState::at(200.0, 400.0);
        modal.touch_start(TouchStart::new(200.0, 400.0));
        modal.touch_move(origin.moved_by(0.0, 60.0));
        modal.set_visible(false, t0);

        assert_eq!(modal.values().backdrop_opacity.writer(), Writer::Animation);
        assert_eq!(
            modal.touch_end(origin.moved_by(0.0, 300.0), t0),
            EventResponse::Ignored
        );
    }

    #[test]
    fn test_pan_resets_when_shown_again() {
        let mut modal = Modal::new().swipe_direction(Direction::Down);
        let t0 = Instant::now();
        shown(&mut modal, t0);

        let origin = GestureState::at(200.0, 400.0);
        modal.touch_start(TouchStart::new(200.0, 400.0));
        modal.touch_move(origin.moved_by(0.0, 150.0));
        modal.touch_end(origin.moved_by(0.0, 150.0), t0);
        assert_eq!(modal.state(), LifecycleState::Hiding);
        assert_eq!(modal.values().pan(), (0.0, 150.0));

        // The application acknowledges the dismissal, then shows again
        modal.set_visible(false, t0);
        modal.set_visible(true, t0);
        assert_eq!(modal.values().pan(), (0.0, 0.0));
    }

    #[test]
    fn test_non_positive_deadzone_uses_default() {
        let modal = Modal::new().pan_responder_threshold(0.0);
        assert_eq!(modal.config().swipe.deadzone, DEFAULT_DEADZONE);
        let modal = Modal::new().pan_responder_threshold(-2.0);
        assert_eq!(modal.config().swipe.deadzone, DEFAULT_DEADZONE);
        let modal = Modal::new().pan_responder_threshold(10.0);
        assert_eq!(modal.config().swipe.deadzone, 10.0);
    }

    #[test]
    fn test_swipe_from_a_still_first_sample_dismisses() {
        let mut modal = Modal::new()
            .swipe_direction(Direction::Down)
            .pan_responder_threshold(0.0);
        let t0 = Instant::now();
        shown(&mut modal, t0);

        let origin = GestureState::at(200.0, 300.0);
        modal.touch_start(TouchStart::new(200.0, 300.0));
        modal.touch_move(origin);
        modal.touch_move(origin.moved_by(0.0, 150.0));
        modal.touch_end(origin.moved_by(0.0, 150.0), t0);
        assert_eq!(modal.state(), LifecycleState::Hiding);
    }

    #[test]
    fn test_update_config_reresolves_animations() {
        let mut modal = Modal::new();
        modal.update_config(|c| c.animation_in = AnimationSpec::from("zoomIn"));
        assert_eq!(
            modal.animations.enter.animation,
            crate::animation::ResolvedAnimation::Preset(crate::animation::Preset::ZoomIn)
        );
    }

    #[test]
    fn test_backdrop_color_str_falls_back_to_black() {
        let modal = Modal::new().backdrop_color_str("rgb(255, 0, 0)");
        assert_eq!(modal.config().backdrop.color, Color::rgb(1.0, 0.0, 0.0));
        let modal = Modal::new().backdrop_color_str("not a color");
        assert_eq!(modal.config().backdrop.color, Color::BLACK);
    }

    #[test]
    fn test_host_notifications() {
        let orientation = Rc::new(Cell::new(None));
        let o = orientation.clone();
        let (shows, on_show) = counter();
        let (dismissals, on_dismiss) = counter();
        let mut modal = Modal::new()
            .on_show(on_show)
            .on_dismiss(on_dismiss)
            .on_orientation_change(move |v| o.set(Some(v)));

        modal.host_shown();
        modal.host_dismissed();
        modal.orientation_changed(Orientation::LandscapeLeft);

        assert_eq!(shows.get(), 1);
        assert_eq!(dismissals.get(), 1);
        assert_eq!(orientation.get(), Some(Orientation::LandscapeLeft));
    }
}
