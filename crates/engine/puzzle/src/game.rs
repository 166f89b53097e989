//! Game session state machine
//!
//! ```text
//!                    select(i)
//!  AwaitingSelection ─────────► ShowingFeedback
//!        ▲   │                     │      │
//!        │   │ request_restart()   │      │ acknowledge()
//!        │   ▼                     │      │ (correct)
//!        │  Transitioning ◄────────┼──────┘
//!        │   │                     │
//!        └───┴─────────────────────┘
//!   commit_transition()     acknowledge() (incorrect)
//! ```
//!
//! Only `AwaitingSelection` accepts a selection or a restart. The next round
//! is generated before it replaces the current one, so a failed transition
//! leaves the old round in place.

use crate::round::RoundState;
use crate::toast::Toast;
use crate::{Error, Result, Settings, View};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Selected option index
    pub selected: usize,
    /// Whether it matched the correct pattern
    pub correct: bool,
    /// The view of the round that was judged
    pub view: View,
}

impl Feedback {
    /// Message shown to the player
    pub fn message(&self) -> String {
        if self.correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect. The correct view is {}. Try again!", self.view)
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to pick an option
    AwaitingSelection,
    /// A selection was judged and feedback is on screen
    ShowingFeedback(Feedback),
    /// A new round is about to replace the current one
    Transitioning,
}

impl Phase {
    /// The phase without its payload
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::AwaitingSelection => PhaseKind::AwaitingSelection,
            Phase::ShowingFeedback(_) => PhaseKind::ShowingFeedback,
            Phase::Transitioning => PhaseKind::Transitioning,
        }
    }
}

/// Payload-free phase tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    AwaitingSelection,
    ShowingFeedback,
    Transitioning,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhaseKind::AwaitingSelection => "awaiting a selection",
            PhaseKind::ShowingFeedback => "showing feedback",
            PhaseKind::Transitioning => "transitioning to a new round",
        })
    }
}

/// Running tally for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
    /// Rounds that were replaced by a new one (solved or skipped)
    pub rounds_played: u32,
}

/// A game session: the current round, its phase, and the feedback toast
#[derive(Debug)]
pub struct Game<R> {
    rng: R,
    settings: Settings,
    round: RoundState,
    phase: Phase,
    next_round_id: u64,
    score: Score,
    toast: Toast,
}

impl<R: Rng> Game<R> {
    /// Start a session with a freshly generated first round
    pub fn new(settings: Settings, mut rng: R) -> Result<Self> {
        let round = RoundState::generate(0, settings.difficulty, &mut rng)?;
        Ok(Self::with_round(settings, rng, round))
    }

    /// Start a session from a prepared first round
    pub fn with_round(settings: Settings, rng: R, round: RoundState) -> Self {
        let toast = Toast::new(settings.toast_duration());
        Game {
            rng,
            next_round_id: round.id() + 1,
            settings,
            round,
            phase: Phase::AwaitingSelection,
            score: Score::default(),
            toast,
        }
    }

    /// The round on screen
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session tally
    pub fn score(&self) -> Score {
        self.score
    }

    /// Session settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The feedback toast
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Status text for the current round, if a message is up
    pub fn status(&self) -> Option<&str> {
        self.toast.message_for(self.round.id())
    }

    /// Judge option `index`
    ///
    /// Moves to `ShowingFeedback` and arms the toast. An out-of-range index
    /// is rejected without leaving `AwaitingSelection`.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<Feedback> {
        self.expect_phase(PhaseKind::AwaitingSelection, "select an option")?;
        let correct = self.round.evaluate(index)?;

        let feedback = Feedback {
            selected: index,
            correct,
            view: self.round.view(),
        };
        if correct {
            self.score.correct += 1;
        } else {
            self.score.incorrect += 1;
        }
        self.toast.show(feedback.message(), self.round.id(), now);
        self.phase = Phase::ShowingFeedback(feedback);

        tracing::debug!(round = self.round.id(), index, correct, "option selected");
        Ok(feedback)
    }

    /// Dismiss feedback
    ///
    /// A correct answer moves on to `Transitioning`; an incorrect one goes
    /// back to `AwaitingSelection` on the same round.
    pub fn acknowledge(&mut self) -> Result<PhaseKind> {
        let Phase::ShowingFeedback(feedback) = self.phase else {
            return Err(Error::InvalidPhase {
                action: "acknowledge feedback",
                actual: self.phase.kind(),
            });
        };

        self.phase = if feedback.correct {
            Phase::Transitioning
        } else {
            Phase::AwaitingSelection
        };
        Ok(self.phase.kind())
    }

    /// Ask for a new round without answering
    pub fn request_restart(&mut self) -> Result<()> {
        self.expect_phase(PhaseKind::AwaitingSelection, "restart")?;
        self.phase = Phase::Transitioning;
        tracing::debug!(round = self.round.id(), "restart requested");
        Ok(())
    }

    /// Generate the next round and make it current
    ///
    /// Cancels any pending toast. On error the phase stays `Transitioning`
    /// and the current round is untouched, so the call can be retried.
    pub fn commit_transition(&mut self) -> Result<&RoundState> {
        self.expect_phase(PhaseKind::Transitioning, "start the next round")?;

        let next = RoundState::generate(self.next_round_id, self.settings.difficulty, &mut self.rng)?;
        self.next_round_id += 1;
        self.round = next;
        self.toast.cancel();
        self.score.rounds_played += 1;
        self.phase = Phase::AwaitingSelection;

        tracing::debug!(round = self.round.id(), "round committed");
        Ok(&self.round)
    }

    /// Request a restart and commit it in one step
    pub fn restart(&mut self) -> Result<&RoundState> {
        self.request_restart()?;
        self.commit_transition()
    }

    /// Advance the toast timer, returning true if the message just cleared
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(now)
    }

    fn expect_phase(&self, expected: PhaseKind, action: &'static str) -> Result<()> {
        let actual = self.phase.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(Error::InvalidPhase { action, actual })
        }
    }
}
