//! Visibility state machine.
//!
//! ```text
//!            show                     enter finished
//!  Hidden ───────────▶ Showing ─────────────────────▶ Shown
//!    ▲                  │  ▲                            │
//!    │ exit finished    │  │ show                       │ hide
//!    │                  ▼  │                            │
//!    └──────────────── Hiding ◀─────────────────────────┘
//! ```
//!
//! Every transition into `Showing` or `Hiding` starts a new generation.
//! Animation completions carry the generation that started them and are
//! ignored once a newer transition has superseded it, so an exit animation
//! interrupted by a new show can never unmount the modal.

use crate::animation::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Hidden,
    Showing,
    Shown,
    Hiding,
}

impl LifecycleState {
    /// Whether the content panel is rendered.
    pub fn is_content_mounted(self) -> bool {
        matches!(
            self,
            LifecycleState::Showing | LifecycleState::Shown | LifecycleState::Hiding
        )
    }

    /// Whether the host overlay exists.
    pub fn is_overlay_mounted(self) -> bool {
        self != LifecycleState::Hidden
    }
}

/// Work the modal must carry out after a transition, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEffect {
    MountOverlay,
    MountContent,
    WillShow,
    /// Fade the backdrop in and play the enter animation
    StartEnter { generation: u64 },
    DidShow,
    WillHide,
    /// Fade the backdrop out and play the exit animation
    StartExit { generation: u64 },
    UnmountContent,
    UnmountOverlay,
    DidHide,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
    should_show: bool,
    generation: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn should_show(&self) -> bool {
        self.should_show
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set whether the modal should be visible and move towards it.
    pub fn request(&mut self, show: bool) -> Vec<LifecycleEffect> {
        use LifecycleEffect::*;
        use LifecycleState::*;

        self.should_show = show;
        match (show, self.state) {
            (true, Hidden) => {
                let generation = self.advance(Showing);
                vec![MountOverlay, MountContent, WillShow, StartEnter { generation }]
            }
            (true, Hiding) => {
                let generation = self.advance(Showing);
                vec![WillShow, StartEnter { generation }]
            }
            (false, Showing | Shown) => {
                let generation = self.advance(Hiding);
                vec![WillHide, StartExit { generation }]
            }
            _ => Vec::new(),
        }
    }

    /// An enter or exit animation finished.
    pub fn animation_finished(&mut self, phase: Phase, generation: u64) -> Vec<LifecycleEffect> {
        use LifecycleEffect::*;
        use LifecycleState::*;

        if generation != self.generation {
            log::debug!(
                "Ignoring {:?} completion from generation {} (current {})",
                phase,
                generation,
                self.generation
            );
            return Vec::new();
        }

        match (phase, self.state) {
            (Phase::Enter, Showing) if self.should_show => {
                self.set_state(Shown);
                vec![DidShow]
            }
            (Phase::Exit, Hiding) if !self.should_show => {
                self.set_state(Hidden);
                vec![UnmountContent, UnmountOverlay, DidHide]
            }
            _ => Vec::new(),
        }
    }

    fn advance(&mut self, state: LifecycleState) -> u64 {
        self.generation += 1;
        self.set_state(state);
        self.generation
    }

    fn set_state(&mut self, state: LifecycleState) {
        log::debug!("Modal {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::LifecycleEffect::*;
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut lc = Lifecycle::new();
        assert_eq!(
            lc.request(true),
            vec![MountOverlay, MountContent, WillShow, StartEnter { generation: 1 }]
        );
        assert_eq!(lc.state(), LifecycleState::Showing);

        assert_eq!(lc.animation_finished(Phase::Enter, 1), vec![DidShow]);
        assert_eq!(lc.state(), LifecycleState::Shown);

        assert_eq!(lc.request(false), vec![WillHide, StartExit { generation: 2 }]);
        assert_eq!(
            lc.animation_finished(Phase::Exit, 2),
            vec![UnmountContent, UnmountOverlay, DidHide]
        );
        assert_eq!(lc.state(), LifecycleState::Hidden);
    }

    #[test]
    fn test_repeated_requests_are_idempotent() {
        let mut lc = Lifecycle::new();
        assert!(lc.request(false).is_empty());
        lc.request(true);
        assert!(lc.request(true).is_empty());
        assert_eq!(lc.generation(), 1);
    }

    #[test]
    fn test_hide_while_showing() {
        let mut lc = Lifecycle::new();
        lc.request(true);
        assert_eq!(lc.request(false), vec![WillHide, StartExit { generation: 2 }]);
        // The enter animation's completion is stale now
        assert!(lc.animation_finished(Phase::Enter, 1).is_empty());
        assert_eq!(lc.state(), LifecycleState::Hiding);
    }

    #[test]
    fn test_show_while_hiding_never_reaches_hidden() {
        let mut lc = Lifecycle::new();
        lc.request(true);
        lc.animation_finished(Phase::Enter, 1);
        lc.request(false);

        assert_eq!(lc.request(true), vec![WillShow, StartEnter { generation: 3 }]);
        // Exit completion from the interrupted hide arrives late
        assert!(lc.animation_finished(Phase::Exit, 2).is_empty());
        assert_eq!(lc.state(), LifecycleState::Showing);

        lc.animation_finished(Phase::Enter, 3);
        assert_eq!(lc.state(), LifecycleState::Shown);
    }

    #[test]
    fn test_completion_for_wrong_phase_is_ignored() {
        let mut lc = Lifecycle::new();
        lc.request(true);
        assert!(lc.animation_finished(Phase::Exit, 1).is_empty());
        assert_eq!(lc.state(), LifecycleState::Showing);
    }

    #[test]
    fn test_mount_invariants() {
        use LifecycleState::*;
        assert!(!Hidden.is_content_mounted() && !Hidden.is_overlay_mounted());
        for state in [Showing, Shown, Hiding] {
            assert!(state.is_content_mounted());
            assert!(state.is_overlay_mounted());
        }
    }
}
