//! The fixed peek-a-boo step list, built from animation options.

use web_time::Duration;

use super::phase::Phase;
use crate::options::AnimationOptions;

/// A single timed wait within the choreography.
///
/// Entering a step applies its flags; the step then waits `duration`.
/// When `checkpoint` is set the run stops after the wait if hover has been
/// released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Phase reported while this step runs.
    pub phase: Phase,
    /// Eyes closed during this step.
    pub blinking: bool,
    /// New peek position, if this step moves the character.
    pub peeking: Option<bool>,
    /// Length of the wait.
    pub duration: Duration,
    /// Re-check hover once the wait completes.
    pub checkpoint: bool,
}

impl Step {
    fn hold(phase: Phase, duration: Duration) -> Self {
        Self {
            phase,
            blinking: false,
            peeking: None,
            duration,
            checkpoint: true,
        }
    }

    fn moving(phase: Phase, peeking: bool, duration: Duration) -> Self {
        Self {
            peeking: Some(peeking),
            ..Self::hold(phase, duration)
        }
    }
}

/// Ordered steps of one hover run plus the settle grace window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choreography {
    steps: Vec<Step>,
    settle_delay: Duration,
}

impl Choreography {
    /// Build the step list for the given timings.
    pub fn new(options: &AnimationOptions) -> Self {
        let blink = Duration::from_millis(options.blink_ms);
        let rapid = Duration::from_millis(options.suspended_blink_ms);
        let travel = options.animation_duration();

        let mut steps = Vec::new();
        push_blinks(&mut steps, Phase::InitialBlink, 1, blink, true);
        steps.push(Step::moving(Phase::Peeking, true, travel));
        steps.push(Step::hold(Phase::Suspended, options.suspension_time()));
        if options.suspended_blink_count == 0 {
            steps.push(Step::hold(Phase::BlinkingSuspended, Duration::ZERO));
        } else {
            push_blinks(
                &mut steps,
                Phase::BlinkingSuspended,
                options.suspended_blink_count,
                rapid,
                true,
            );
        }
        steps.push(Step::moving(Phase::Descending, false, travel));
        push_blinks(&mut steps, Phase::FinalBlink, 1, blink, false);

        Self {
            steps,
            settle_delay: travel,
        }
    }

    /// All steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Grace window between hover ending and the forced reset.
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Length of one uninterrupted run.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Distinct phases in the order a run visits them (excluding the
    /// surrounding `Idle`).
    pub fn phases(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> =
            self.steps.iter().map(|s| s.phase).collect();
        phases.dedup();
        phases
    }
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(&AnimationOptions::default())
    }
}

/// Append `count` on/off blink cycles. Only the final "off" wait carries the
/// hover checkpoint.
fn push_blinks(
    steps: &mut Vec<Step>,
    phase: Phase,
    count: u32,
    half_period: Duration,
    checkpoint: bool,
) {
    for i in 0..count {
        let last = i + 1 == count;
        steps.push(Step {
            phase,
            blinking: true,
            peeking: None,
            duration: half_period,
            checkpoint: false,
        });
        steps.push(Step {
            phase,
            blinking: false,
            peeking: None,
            duration: half_period,
            checkpoint: checkpoint && last,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_lasts_2700ms() {
        let c = Choreography::default();
        // 200 blink + 600 peek + 500 hold + 600 rapid blinks + 600 descend
        // + 200 blink
        assert_eq!(c.total_duration(), Duration::from_millis(2700));
        assert_eq!(c.settle_delay(), Duration::from_millis(600));
        assert_eq!(c.steps().len(), 17);
    }

    #[test]
    fn phases_follow_the_cycle() {
        let c = Choreography::default();
        assert_eq!(c.phases(), Phase::CYCLE[1..7].to_vec());
    }

    #[test]
    fn checkpoints_close_every_phase_but_the_last() {
        let c = Choreography::default();
        let checkpoints: Vec<Phase> = c
            .steps()
            .iter()
            .filter(|s| s.checkpoint)
            .map(|s| s.phase)
            .collect();
        assert_eq!(
            checkpoints,
            vec![
                Phase::InitialBlink,
                Phase::Peeking,
                Phase::Suspended,
                Phase::BlinkingSuspended,
                Phase::Descending,
            ]
        );
    }

    #[test]
    fn only_travel_steps_move_the_character() {
        let c = Choreography::default();
        let moves: Vec<(Phase, bool)> = c
            .steps()
            .iter()
            .filter_map(|s| s.peeking.map(|p| (s.phase, p)))
            .collect();
        assert_eq!(
            moves,
            vec![(Phase::Peeking, true), (Phase::Descending, false)]
        );
    }

    #[test]
    fn suspended_blinks_alternate() {
        let c = Choreography::default();
        let rapid: Vec<&Step> = c
            .steps()
            .iter()
            .filter(|s| s.phase == Phase::BlinkingSuspended)
            .collect();
        assert_eq!(rapid.len(), 10);
        for (i, step) in rapid.iter().enumerate() {
            assert_eq!(step.blinking, i % 2 == 0);
            assert_eq!(step.duration, Duration::from_millis(60));
        }
    }

    #[test]
    fn zero_suspended_blinks_keeps_the_phase() {
        let options = AnimationOptions {
            suspended_blink_count: 0,
            ..AnimationOptions::default()
        };
        let c = Choreography::new(&options);
        assert!(c.phases().contains(&Phase::BlinkingSuspended));
        assert_eq!(c.total_duration(), Duration::from_millis(2100));
    }
}
