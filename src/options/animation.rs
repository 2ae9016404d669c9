use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::Choreography;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing of the hover peek-a-boo choreography.
pub struct AnimationOptions {
    /// Duration of the peek-up and descend moves, and of the settle grace
    /// window after hover ends.
    #[schemars(title = "Move Duration (ms)", range(min = 0, max = 10_000), extend("step" = 10))]
    pub animation_duration_ms: u64,
    /// How long the character hangs in the peeked-up position.
    #[schemars(title = "Suspension Time (ms)", range(min = 0, max = 10_000), extend("step" = 10))]
    pub suspension_time_ms: u64,
    /// On and off time of the initial and final blink.
    #[schemars(title = "Blink (ms)", range(min = 0, max = 1_000), extend("step" = 10))]
    pub blink_ms: u64,
    /// Number of rapid blinks while suspended.
    #[schemars(title = "Suspended Blinks", range(min = 0, max = 20))]
    pub suspended_blink_count: u32,
    /// On and off time of each rapid blink while suspended.
    #[schemars(title = "Suspended Blink (ms)", range(min = 0, max = 1_000), extend("step" = 5))]
    pub suspended_blink_ms: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            animation_duration_ms: 600,
            suspension_time_ms: 500,
            blink_ms: 100,
            suspended_blink_count: 5,
            suspended_blink_ms: 60,
        }
    }
}

impl AnimationOptions {
    /// Options with the given move and suspension durations and the default
    /// blink timings.
    #[must_use]
    pub fn with_durations(animation: Duration, suspension: Duration) -> Self {
        Self {
            animation_duration_ms: animation.as_millis() as u64,
            suspension_time_ms: suspension.as_millis() as u64,
            ..Self::default()
        }
    }

    /// Peek/descend duration and settle grace window.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Suspension duration.
    pub fn suspension_time(&self) -> Duration {
        Duration::from_millis(self.suspension_time_ms)
    }

    /// Build the step list these timings describe.
    #[must_use]
    pub fn choreography(&self) -> Choreography {
        Choreography::new(self)
    }
}
