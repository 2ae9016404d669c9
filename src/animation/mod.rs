//! Hover-triggered peek-a-boo animation.
//!
//! A [`BunAnimation`] plays a fixed [`Choreography`]: blink, peek up, hold,
//! blink rapidly, descend, blink. Renderers read [`AnimationState`]
//! snapshots or subscribe to changes.

mod choreography;
mod phase;
mod sequencer;

pub use choreography::{Choreography, Step};
pub use phase::{AnimationState, Phase};
pub use sequencer::{BunAnimation, RunOutcome, SubscriptionId, Tick};
