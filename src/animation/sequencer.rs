//! Hover-driven sequencer that plays the choreography against a clock.

use web_time::{Duration, Instant};

use super::choreography::{Choreography, Step};
use super::phase::{AnimationState, Phase};
use crate::options::AnimationOptions;

/// How a hover run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step played and the character is back at rest.
    Completed,
    /// Hover was released; the run stopped during `at`.
    Aborted {
        /// Phase the run was in when it stopped.
        at: Phase,
    },
}

/// What happened since the previous [`BunAnimation::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// The observable state changed at least once.
    pub changed: bool,
    /// The active run ended.
    pub finished: Option<RunOutcome>,
}

/// Handle returned by [`BunAnimation::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AnimationState)>;

/// Position of the active run within the choreography.
#[derive(Debug, Clone, Copy)]
struct ActiveRun {
    step: usize,
    /// When the current step's wait completes.
    deadline: Instant,
}

/// Hover peek-a-boo state machine.
///
/// Time is supplied by the caller: hover events and [`update`](Self::update)
/// all take `now`, and every timer that has elapsed by `now` fires in
/// chronological order. Step deadlines chain from one another, so the
/// choreography keeps its timing regardless of how often `update` runs.
///
/// Releasing hover has two effects. The run stops at its next checkpoint
/// without touching visual state, and a settle fires one grace window later
/// that resets to `Idle` if hover is still released.
pub struct BunAnimation {
    choreography: Choreography,
    state: AnimationState,
    run: Option<ActiveRun>,
    /// Pending settle deadlines. Fire-once, never cancelled.
    settles: Vec<Instant>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    pending: Tick,
}

impl BunAnimation {
    /// Sequencer with default timings (600ms moves, 500ms suspension).
    pub fn new() -> Self {
        Self::from_choreography(Choreography::default())
    }

    /// Sequencer with timings taken from options.
    pub fn with_options(options: &AnimationOptions) -> Self {
        Self::from_choreography(options.choreography())
    }

    /// Sequencer with custom move and suspension durations.
    pub fn with_durations(animation: Duration, suspension: Duration) -> Self {
        Self::with_options(&AnimationOptions::with_durations(
            animation, suspension,
        ))
    }

    /// Sequencer for a prebuilt step list.
    pub fn from_choreography(choreography: Choreography) -> Self {
        Self {
            choreography,
            state: AnimationState::default(),
            run: None,
            settles: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            pending: Tick::default(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// The step list being played.
    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Earliest pending timer, if any. Hosts can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.run
            .map(|r| r.deadline)
            .into_iter()
            .chain(self.settles.iter().copied())
            .min()
    }

    /// Register a callback invoked with every state change.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&AnimationState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Pointer entered the trigger region.
    ///
    /// Starts a run and returns true when at rest. Any other phase
    /// (including the grace window after hover ended) is a no-op.
    pub fn hover_start(&mut self, now: Instant) -> bool {
        self.advance(now);
        if !self.state.phase.is_idle() {
            log::trace!("hover ignored during {}", self.state.phase);
            return false;
        }

        self.set_state(AnimationState {
            hovered: true,
            ..self.state
        });
        log::debug!("hover started, running peek sequence");
        self.enter_step(0, now);
        true
    }

    /// Pointer left the trigger region.
    ///
    /// Clears the hover flag right away and schedules a settle one grace
    /// window from `now`.
    pub fn hover_end(&mut self, now: Instant) {
        self.advance(now);
        self.set_state(AnimationState {
            hovered: false,
            ..self.state
        });
        self.settles.push(now + self.choreography.settle_delay());
    }

    /// Fire every timer due by `now` and report what happened since the
    /// previous call.
    pub fn update(&mut self, now: Instant) -> Tick {
        self.advance(now);
        std::mem::take(&mut self.pending)
    }

    fn advance(&mut self, now: Instant) {
        loop {
            let step_due = self.run.map(|r| r.deadline).filter(|d| *d <= now);
            let settle_due = self
                .settles
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, d)| *d <= now)
                .min_by_key(|(_, d)| *d);

            // Ties go to the run so its checkpoint sees the step complete.
            match (step_due, settle_due) {
                (None, None) => break,
                (Some(deadline), None) => self.finish_step(deadline),
                (Some(deadline), Some((_, settle))) if deadline <= settle => {
                    self.finish_step(deadline);
                }
                (_, Some((idx, _))) => {
                    let _ = self.settles.remove(idx);
                    self.settle();
                }
            }
        }
    }

    /// The current step's wait completed at `deadline`.
    fn finish_step(&mut self, deadline: Instant) {
        let Some(run) = self.run else {
            return;
        };
        let Some(step) = self.choreography.steps().get(run.step).copied()
        else {
            self.run = None;
            return;
        };

        if step.checkpoint && !self.state.hovered {
            log::debug!("hover released, stopping during {}", step.phase);
            self.end_run(RunOutcome::Aborted { at: step.phase });
            return;
        }

        let next = run.step + 1;
        if next < self.choreography.steps().len() {
            self.enter_step(next, deadline);
        } else {
            self.set_state(AnimationState {
                phase: Phase::Idle,
                blinking: false,
                ..self.state
            });
            log::debug!("peek sequence complete");
            self.end_run(RunOutcome::Completed);
        }
    }

    fn enter_step(&mut self, index: usize, start: Instant) {
        let Some(step) = self.choreography.steps().get(index).copied() else {
            return;
        };
        self.run = Some(ActiveRun {
            step: index,
            deadline: start + step.duration,
        });

        if step.phase != self.state.phase {
            log::debug!("bun phase {} -> {}", self.state.phase, step.phase);
        }
        if step.blinking != self.state.blinking {
            log::trace!("blink {}", if step.blinking { "on" } else { "off" });
        }
        self.set_state(apply_step(self.state, &step));
    }

    /// Grace window elapsed after a hover end.
    fn settle(&mut self) {
        if self.state.hovered {
            return;
        }
        if self.run.is_some() {
            self.end_run(RunOutcome::Aborted {
                at: self.state.phase,
            });
        }
        if self.state != AnimationState::settled(false) {
            log::debug!("settling from {} to idle", self.state.phase);
        }
        self.set_state(AnimationState::settled(false));
    }

    fn end_run(&mut self, outcome: RunOutcome) {
        self.run = None;
        self.pending.finished = Some(outcome);
    }

    fn set_state(&mut self, next: AnimationState) {
        if next == self.state {
            return;
        }
        self.state = next;
        self.pending.changed = true;
        for (_, callback) in &mut self.subscribers {
            callback(&next);
        }
    }
}

fn apply_step(state: AnimationState, step: &Step) -> AnimationState {
    AnimationState {
        phase: step.phase,
        blinking: step.blinking,
        peeking: step.peeking.unwrap_or(state.peeking),
        hovered: state.hovered,
    }
}

impl Default for BunAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BunAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunAnimation")
            .field("state", &self.state)
            .field("step", &self.run.map(|r| r.step))
            .field("pending_settles", &self.settles.len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Record the distinct phases a sequencer passes through.
    fn record_phases(anim: &mut BunAnimation) -> Rc<RefCell<Vec<Phase>>> {
        let seen = Rc::new(RefCell::new(vec![anim.state().phase]));
        let sink = Rc::clone(&seen);
        let _ = anim.subscribe(move |state| {
            let mut phases = sink.borrow_mut();
            if phases.last() != Some(&state.phase) {
                phases.push(state.phase);
            }
        });
        seen
    }

    #[test]
    fn uninterrupted_run_visits_every_phase_in_order() {
        let mut anim = BunAnimation::new();
        let seen = record_phases(&mut anim);
        let t0 = Instant::now();

        assert!(anim.hover_start(t0));
        let mut t = t0;
        while anim.is_running() {
            t += ms(10);
            let _ = anim.update(t);
        }

        assert_eq!(*seen.borrow(), Phase::CYCLE.to_vec());
        assert_eq!(t, t0 + ms(2700));
    }

    #[test]
    fn one_late_update_replays_all_intermediate_states() {
        let mut anim = BunAnimation::new();
        let seen = record_phases(&mut anim);
        let t0 = Instant::now();

        assert!(anim.hover_start(t0));
        let tick = anim.update(t0 + ms(5000));

        assert!(tick.changed);
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
        assert_eq!(*seen.borrow(), Phase::CYCLE.to_vec());
        assert_eq!(anim.state(), AnimationState::settled(true));
    }

    #[test]
    fn step_timing_matches_default_choreography() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));

        let s = anim.state();
        assert_eq!(s.phase, Phase::InitialBlink);
        assert!(s.hovered && s.blinking && !s.peeking);

        let _ = anim.update(t0 + ms(100));
        assert_eq!(anim.state().phase, Phase::InitialBlink);
        assert!(!anim.state().blinking);

        let _ = anim.update(t0 + ms(200));
        assert_eq!(anim.state().phase, Phase::Peeking);
        assert!(anim.state().peeking);

        let _ = anim.update(t0 + ms(799));
        assert_eq!(anim.state().phase, Phase::Peeking);
        let _ = anim.update(t0 + ms(800));
        assert_eq!(anim.state().phase, Phase::Suspended);

        let _ = anim.update(t0 + ms(1300));
        assert_eq!(anim.state().phase, Phase::BlinkingSuspended);
        assert!(anim.state().blinking);
        let _ = anim.update(t0 + ms(1360));
        assert!(!anim.state().blinking);
        let _ = anim.update(t0 + ms(1420));
        assert!(anim.state().blinking);

        let _ = anim.update(t0 + ms(1900));
        assert_eq!(anim.state().phase, Phase::Descending);
        assert!(!anim.state().peeking);
        assert!(!anim.state().blinking);

        let _ = anim.update(t0 + ms(2500));
        assert_eq!(anim.state().phase, Phase::FinalBlink);
        assert!(anim.state().blinking);

        let tick = anim.update(t0 + ms(2700));
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
        assert_eq!(anim.state().phase, Phase::Idle);
        assert!(!anim.state().blinking);
    }

    #[test]
    fn release_stops_at_checkpoint_then_settles() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        let _ = anim.update(t0 + ms(300));
        anim.hover_end(t0 + ms(300));
        assert!(!anim.state().hovered);

        // The peek wait still completes before hover is inspected.
        let tick = anim.update(t0 + ms(799));
        assert!(tick.finished.is_none());
        assert_eq!(anim.state().phase, Phase::Peeking);

        let tick = anim.update(t0 + ms(800));
        assert_eq!(
            tick.finished,
            Some(RunOutcome::Aborted { at: Phase::Peeking })
        );
        // Visual state is left alone until the settle.
        assert_eq!(anim.state().phase, Phase::Peeking);
        assert!(anim.state().peeking);

        let _ = anim.update(t0 + ms(899));
        assert_eq!(anim.state().phase, Phase::Peeking);

        let tick = anim.update(t0 + ms(900));
        assert!(tick.changed);
        assert_eq!(anim.state(), AnimationState::settled(false));
    }

    #[test]
    fn release_mid_blink_waits_for_the_cycle() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        anim.hover_end(t0 + ms(50));

        let _ = anim.update(t0 + ms(100));
        assert_eq!(anim.state().phase, Phase::InitialBlink);
        assert!(anim.is_running());

        let tick = anim.update(t0 + ms(200));
        assert_eq!(
            tick.finished,
            Some(RunOutcome::Aborted {
                at: Phase::InitialBlink
            })
        );
        assert_eq!(anim.state().phase, Phase::InitialBlink);

        let _ = anim.update(t0 + ms(650));
        assert_eq!(anim.state(), AnimationState::settled(false));
    }

    #[test]
    fn second_start_while_running_is_ignored() {
        let mut anim = BunAnimation::new();
        let seen = record_phases(&mut anim);
        let t0 = Instant::now();

        assert!(anim.hover_start(t0));
        assert!(!anim.hover_start(t0 + ms(50)));
        assert!(!anim.hover_start(t0 + ms(1000)));

        let tick = anim.update(t0 + ms(2700));
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
        assert_eq!(*seen.borrow(), Phase::CYCLE.to_vec());
        assert!(!anim.is_running());
    }

    #[test]
    fn rehover_during_grace_window_is_a_noop() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        anim.hover_end(t0 + ms(300));

        assert!(!anim.hover_start(t0 + ms(400)));
        assert!(!anim.state().hovered);

        let _ = anim.update(t0 + ms(900));
        assert_eq!(anim.state(), AnimationState::settled(false));

        assert!(anim.hover_start(t0 + ms(1000)));
        assert_eq!(anim.state().phase, Phase::InitialBlink);
    }

    #[test]
    fn stale_settle_is_harmless_once_hovered_again() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        let _ = anim.update(t0 + ms(2700));

        anim.hover_end(t0 + ms(2800));
        assert!(anim.hover_start(t0 + ms(3000)));

        // Settle from the earlier hover end fires at 3400.
        let _ = anim.update(t0 + ms(3400));
        let s = anim.state();
        assert_eq!(s.phase, Phase::Peeking);
        assert!(s.hovered && s.peeking);

        let tick = anim.update(t0 + ms(5700));
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
    }

    #[test]
    fn release_during_final_blink_still_completes() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        let _ = anim.update(t0 + ms(2550));
        anim.hover_end(t0 + ms(2550));

        let tick = anim.update(t0 + ms(2700));
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
        assert_eq!(anim.state(), AnimationState::settled(false));
    }

    #[test]
    fn settle_drops_an_orphaned_long_wait() {
        let mut anim = BunAnimation::with_durations(ms(100), ms(5000));
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        let _ = anim.update(t0 + ms(300));
        assert_eq!(anim.state().phase, Phase::Suspended);

        anim.hover_end(t0 + ms(400));
        let tick = anim.update(t0 + ms(500));
        assert_eq!(
            tick.finished,
            Some(RunOutcome::Aborted {
                at: Phase::Suspended
            })
        );
        assert_eq!(anim.state(), AnimationState::settled(false));

        // A fresh run is not disturbed by the old suspension deadline.
        assert!(anim.hover_start(t0 + ms(600)));
        let _ = anim.update(t0 + ms(5300));
        assert_eq!(anim.state().phase, Phase::Suspended);
        assert!(anim.is_running());
    }

    #[test]
    fn zero_durations_only_leave_blink_time() {
        let mut anim = BunAnimation::with_durations(ms(0), ms(0));
        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        assert_eq!(anim.choreography().total_duration(), ms(1000));

        let _ = anim.update(t0 + ms(999));
        assert!(anim.is_running());
        let tick = anim.update(t0 + ms(1000));
        assert_eq!(tick.finished, Some(RunOutcome::Completed));
    }

    #[test]
    fn next_deadline_tracks_steps_and_settles() {
        let mut anim = BunAnimation::new();
        let t0 = Instant::now();
        assert_eq!(anim.next_deadline(), None);

        assert!(anim.hover_start(t0));
        assert_eq!(anim.next_deadline(), Some(t0 + ms(100)));

        anim.hover_end(t0 + ms(50));
        assert_eq!(anim.next_deadline(), Some(t0 + ms(100)));

        let _ = anim.update(t0 + ms(200));
        assert_eq!(anim.next_deadline(), Some(t0 + ms(650)));
        let _ = anim.update(t0 + ms(650));
        assert_eq!(anim.next_deadline(), None);
    }

    #[test]
    fn update_without_timers_reports_nothing() {
        let mut anim = BunAnimation::new();
        assert_eq!(anim.update(Instant::now()), Tick::default());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut anim = BunAnimation::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = anim.subscribe(move |_| *sink.borrow_mut() += 1);

        let t0 = Instant::now();
        assert!(anim.hover_start(t0));
        let after_start = *count.borrow();
        assert!(after_start > 0);

        assert!(anim.unsubscribe(id));
        assert!(!anim.unsubscribe(id));
        let _ = anim.update(t0 + ms(2700));
        assert_eq!(*count.borrow(), after_start);
    }
}
