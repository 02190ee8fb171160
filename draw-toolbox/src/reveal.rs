//! Timed presentation of a finished draw.
//!
//! The winners are all known up front, the sequence only decides when each
//! of them is shown: every round counts down, reveals its winner, then waits
//! before the next round starts. Nothing here sleeps, the caller feeds the
//! elapsed time through [`RevealSequence::tick`].
use crate::draw::Award;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    CountingDown { round: usize, remaining: Duration },
    Revealing { round: usize, remaining: Duration },
    WaitingForNext { round: usize, remaining: Duration },
    Complete,
}

impl Phase {
    pub fn round(&self) -> Option<usize> {
        match *self {
            Phase::CountingDown { round, .. }
            | Phase::Revealing { round, .. }
            | Phase::WaitingForNext { round, .. } => Some(round),
            Phase::Complete => None,
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        match *self {
            Phase::CountingDown { remaining, .. }
            | Phase::Revealing { remaining, .. }
            | Phase::WaitingForNext { remaining, .. } => Some(remaining),
            Phase::Complete => None,
        }
    }

    fn with_remaining(self, remaining: Duration) -> Self {
        match self {
            Phase::CountingDown { round, .. } => Phase::CountingDown { round, remaining },
            Phase::Revealing { round, .. } => Phase::Revealing { round, remaining },
            Phase::WaitingForNext { round, .. } => Phase::WaitingForNext { round, remaining },
            Phase::Complete => Phase::Complete,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    CountdownStarted { round: usize, category: String },
    Revealed(Award),
    Completed,
}

pub struct RevealSequence {
    awards: Vec<Award>,
    pause: Duration,
    phase: Phase,
    /// Index into `awards` of the round on stage. Award rounds are only
    /// labels, a sequence may hold any subset of a draw.
    position: usize,
}

impl RevealSequence {
    /// Starts counting down the first round right away. Without awards the
    /// sequence is complete from the start.
    pub fn new(awards: Vec<Award>, pause: Duration) -> Self {
        let phase = match awards.first() {
            Some(first) => Phase::CountingDown {
                round: first.round,
                remaining: first.timing.countdown(),
            },
            None => Phase::Complete,
        };
        Self {
            awards,
            pause,
            phase,
            position: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Award of the round currently on stage.
    pub fn current(&self) -> Option<&Award> {
        match self.phase {
            Phase::Complete => None,
            _ => self.awards.get(self.position),
        }
    }

    /// Advance the clock by `elapsed`, crossing as many phase boundaries as it
    /// covers.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let mut budget = elapsed;
        while let Some(remaining) = self.phase.remaining() {
            if budget < remaining {
                self.phase = self.phase.with_remaining(remaining - budget);
                break;
            }
            budget -= remaining;
            self.finish_phase(&mut events);
        }
        events
    }

    /// End the current phase now, whatever time it had left.
    pub fn skip(&mut self) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        self.finish_phase(&mut events);
        events
    }

    /// Time until the whole sequence is complete, saturating at
    /// [`Duration::MAX`].
    pub fn time_remaining(&self) -> Duration {
        let current = match self.phase {
            Phase::CountingDown { remaining, .. } => remaining
                .saturating_add(self.awards[self.position].timing.reveal())
                .saturating_add(self.pause_after(self.position)),
            Phase::Revealing { remaining, .. } => remaining.saturating_add(self.pause_after(self.position)),
            Phase::WaitingForNext { remaining, .. } => remaining,
            Phase::Complete => return Duration::ZERO,
        };
        self.awards
            .iter()
            .enumerate()
            .skip(self.position + 1)
            .map(|(position, award)| {
                award
                    .timing
                    .countdown()
                    .saturating_add(award.timing.reveal())
                    .saturating_add(self.pause_after(position))
            })
            .fold(current, Duration::saturating_add)
    }

    fn is_last(&self, position: usize) -> bool {
        position + 1 == self.awards.len()
    }

    fn pause_after(&self, position: usize) -> Duration {
        if self.is_last(position) {
            Duration::ZERO
        } else {
            self.pause
        }
    }

    fn finish_phase(&mut self, events: &mut Vec<RevealEvent>) {
        let next = match self.phase {
            Phase::CountingDown { round, .. } => {
                let award = &self.awards[self.position];
                events.push(RevealEvent::Revealed(award.clone()));
                Phase::Revealing {
                    round,
                    remaining: award.timing.reveal(),
                }
            }
            Phase::Revealing { .. } if self.is_last(self.position) => {
                events.push(RevealEvent::Completed);
                Phase::Complete
            }
            Phase::Revealing { round, .. } => Phase::WaitingForNext {
                round,
                remaining: self.pause,
            },
            Phase::WaitingForNext { .. } => {
                self.position += 1;
                let award = &self.awards[self.position];
                events.push(RevealEvent::CountdownStarted {
                    round: award.round,
                    category: award.category.clone(),
                });
                Phase::CountingDown {
                    round: award.round,
                    remaining: award.timing.countdown(),
                }
            }
            Phase::Complete => Phase::Complete,
        };
        debug!(from = ?self.phase, to = ?next, "reveal phase finished");
        self.phase = next;
    }
}
