//! Choreography phases and the renderer-facing state snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named step of the hover choreography.
///
/// Phases only ever advance in declaration order and wrap from
/// [`FinalBlink`](Self::FinalBlink) back to [`Idle`](Self::Idle).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Hidden and waiting for hover. Initial and terminal state.
    #[default]
    Idle,
    /// Single blink before peeking.
    InitialBlink,
    /// Moving up into view.
    Peeking,
    /// Holding the peeked-up position.
    Suspended,
    /// Rapid blinking while held up.
    BlinkingSuspended,
    /// Moving back down.
    Descending,
    /// Single blink after descending.
    FinalBlink,
}

impl Phase {
    /// Every phase of one complete run, starting and ending at `Idle`.
    pub const CYCLE: [Self; 8] = [
        Self::Idle,
        Self::InitialBlink,
        Self::Peeking,
        Self::Suspended,
        Self::BlinkingSuspended,
        Self::Descending,
        Self::FinalBlink,
        Self::Idle,
    ];

    /// The phase that follows this one in the choreography.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::InitialBlink,
            Self::InitialBlink => Self::Peeking,
            Self::Peeking => Self::Suspended,
            Self::Suspended => Self::BlinkingSuspended,
            Self::BlinkingSuspended => Self::Descending,
            Self::Descending => Self::FinalBlink,
            Self::FinalBlink => Self::Idle,
        }
    }

    /// Whether this is the resting phase.
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Stable kebab-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InitialBlink => "initial-blink",
            Self::Peeking => "peeking",
            Self::Suspended => "suspended",
            Self::BlinkingSuspended => "blinking-suspended",
            Self::Descending => "descending",
            Self::FinalBlink => "final-blink",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot handed to renderers.
///
/// `peeking` and `blinking` follow from the running choreography; callers
/// only influence `hovered`, and only through hover events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct AnimationState {
    /// Pointer is over the trigger region.
    pub hovered: bool,
    /// Character is in (or moving toward) the peeked-up position.
    pub peeking: bool,
    /// Eyes are closed.
    pub blinking: bool,
    /// Current choreography step.
    pub phase: Phase,
}

impl AnimationState {
    /// Resting state with the given hover flag.
    pub(crate) fn settled(hovered: bool) -> Self {
        Self {
            hovered,
            ..Self::default()
        }
    }
}
