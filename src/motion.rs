//! Entrance animations.
//!
//! An animated element starts in an initial [`Pose`] and moves to its resting
//! pose (fully opaque, untransformed) when its [`Trigger`] fires. The server
//! renders the initial pose and timing as CSS custom properties and the
//! current [`RevealState`] as `data-reveal`; the inlined reveal script drives
//! the same [`RevealMachine`] transitions in the browser.
//!
//! Reveals are one-shot: once an element has started animating it never goes
//! back to `unseen`, no matter how often it scrolls in and out of view.

use std::fmt::Write as _;

/// Visual pose an element starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in pixels.
    pub offset_y: i16,
    pub scale: f32,
}

impl Pose {
    /// The resting pose every reveal ends in.
    pub const REST: Self = Self {
        opacity: 1.0,
        offset_y: 0,
        scale: 1.0,
    };

    /// Transparent, otherwise at rest.
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    /// Transparent and pushed down by `offset_y` pixels.
    pub const fn rising(offset_y: i16) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
            scale: 1.0,
        }
    }

    /// Fully visible but scaled.
    pub const fn scaled(scale: f32) -> Self {
        Self {
            scale,
            ..Self::REST
        }
    }
}

/// Transition timing in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// What starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires once the document has loaded.
    Mount,
    /// Fires the first time the element intersects the viewport.
    InView,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::InView => "in-view",
        }
    }
}

/// A declarative entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub trigger: Trigger,
    pub timing: Timing,
}

impl Motion {
    pub const fn on_mount(initial: Pose) -> Self {
        Self {
            initial,
            trigger: Trigger::Mount,
            timing: Timing {
                duration_ms: 300,
                delay_ms: 0,
            },
        }
    }

    pub const fn in_view(initial: Pose) -> Self {
        Self {
            initial,
            trigger: Trigger::InView,
            timing: Timing {
                duration_ms: 300,
                delay_ms: 0,
            },
        }
    }

    #[must_use]
    pub const fn duration(mut self, ms: u32) -> Self {
        self.timing.duration_ms = ms;
        self
    }

    #[must_use]
    pub const fn delay(mut self, ms: u32) -> Self {
        self.timing.delay_ms = ms;
        self
    }

    /// Inline style carrying the initial pose and timing as custom properties.
    pub fn style(&self) -> String {
        let mut style = String::with_capacity(128);
        let Pose {
            opacity,
            offset_y,
            scale,
        } = self.initial;
        let _ = write!(
            style,
            "--reveal-opacity:{opacity};--reveal-y:{offset_y}px;--reveal-scale:{scale};\
             --reveal-duration:{}ms;--reveal-delay:{}ms",
            self.timing.duration_ms, self.timing.delay_ms
        );
        style
    }
}

/// Lifecycle of one animated element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unseen,
    Animating,
    Settled,
}

impl RevealState {
    /// Value of the `data-reveal` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Animating => "animating",
            Self::Settled => "settled",
        }
    }
}

/// Input observed by a [`RevealMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The document finished loading.
    Mounted,
    /// The element crossed into the viewport.
    Intersected,
    /// The element left the viewport.
    LeftViewport,
    /// The transition to the resting pose finished.
    AnimationComplete,
}

/// One-shot reveal state machine for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealMachine {
    trigger: Trigger,
    state: RevealState,
}

impl RevealMachine {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            state: RevealState::Unseen,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Apply `event`. Returns `true` only when the visible pose fires, which
    /// happens at most once per machine.
    pub fn handle(&mut self, event: RevealEvent) -> bool {
        match (self.state, self.trigger, event) {
            (RevealState::Unseen, Trigger::Mount, RevealEvent::Mounted)
            | (RevealState::Unseen, Trigger::InView, RevealEvent::Intersected) => {
                self.state = RevealState::Animating;
                true
            }
            (RevealState::Animating, _, RevealEvent::AnimationComplete) => {
                self.state = RevealState::Settled;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_view_fires_once_across_repeated_intersections() {
        let mut machine = RevealMachine::new(Trigger::InView);

        assert!(machine.handle(RevealEvent::Intersected));
        assert_eq!(machine.state(), RevealState::Animating);

        machine.handle(RevealEvent::LeftViewport);
        assert!(!machine.handle(RevealEvent::Intersected));
        assert_eq!(machine.state(), RevealState::Animating);
    }

    #[test]
    fn test_settled_never_rearms() {
        let mut machine = RevealMachine::new(Trigger::InView);
        machine.handle(RevealEvent::Intersected);
        machine.handle(RevealEvent::AnimationComplete);
        assert_eq!(machine.state(), RevealState::Settled);

        for event in [
            RevealEvent::LeftViewport,
            RevealEvent::Intersected,
            RevealEvent::Mounted,
            RevealEvent::AnimationComplete,
        ] {
            assert!(!machine.handle(event));
            assert_eq!(machine.state(), RevealState::Settled);
        }
    }

    #[test]
    fn test_mount_trigger_ignores_intersections() {
        let mut machine = RevealMachine::new(Trigger::Mount);

        assert!(!machine.handle(RevealEvent::Intersected));
        assert_eq!(machine.state(), RevealState::Unseen);

        assert!(machine.handle(RevealEvent::Mounted));
        assert!(!machine.handle(RevealEvent::Mounted));
    }

    #[test]
    fn test_completion_before_start_is_ignored() {
        let mut machine = RevealMachine::new(Trigger::InView);
        assert!(!machine.handle(RevealEvent::AnimationComplete));
        assert_eq!(machine.state(), RevealState::Unseen);
    }

    #[test]
    fn test_style_carries_pose_and_timing() {
        let motion = Motion::in_view(Pose::rising(30)).duration(600).delay(200);
        assert_eq!(
            motion.style(),
            "--reveal-opacity:0;--reveal-y:30px;--reveal-scale:1;\
             --reveal-duration:600ms;--reveal-delay:200ms"
        );
    }

    #[test]
    fn test_scaled_pose_stays_visible() {
        let pose = Pose::scaled(0.95);
        assert!((pose.opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(pose.offset_y, 0);
        assert!((pose.scale - 0.95).abs() < f32::EPSILON);
    }
}
