// SPDX-License-Identifier: GPL-3.0-only

//! Timed multi-shot photobooth session
//!
//! A session runs N timed captures with a one-second countdown between
//! each, accumulating [`CapturedImage`] records. The state machine is
//! driven by explicit [`BoothSession::tick`] calls so it can be tested
//! without wall-clock waits; [`driver::run`] supplies real one-second
//! ticks on tokio time.
//!
//! At most one session is active at a time: starting while active fails
//! with `SessionError::AlreadyActive`, and manual shutter requests are
//! rejected while the machine is not idle.

pub mod driver;

use crate::capture::{self, CapturedImage, FrameSource};
use crate::compositor::AdjustmentParams;
use crate::constants::booth_limits;
use crate::errors::{AppResult, SessionError};
use crate::filters::FilterEffect;
use rand::Rng;
use tracing::{info, warn};

/// Photobooth state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoothState {
    /// No session running
    #[default]
    Idle,
    /// Counting down to the next shot; 0 is the final-cue tick
    Countdown(u32),
    /// A capture is in progress (transient within one tick)
    Capturing,
    /// All shots taken; awaiting acknowledgment
    Complete,
    /// Session aborted; images discarded
    Cancelled,
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown advanced; holds the remaining seconds (0 = final cue)
    Countdown(u32),
    /// A shot was captured; holds its index in capture order
    Captured(usize),
    /// The final shot was captured and the session is complete
    Complete,
    /// Tick arrived while no session was running
    Ignored,
}

/// A timed multi-shot capture session.
pub struct BoothSession {
    shot_count: u32,
    timer_seconds: u32,
    shots: Vec<CapturedImage>,
    state: BoothState,
    params: AdjustmentParams,
    filter: Option<&'static FilterEffect>,
    // Bumped on every reset; outstanding tick schedules check it.
    generation: u64,
}

impl Default for BoothSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BoothSession {
    pub fn new() -> Self {
        Self {
            shot_count: booth_limits::SHOTS_DEFAULT,
            timer_seconds: 3,
            shots: Vec::new(),
            state: BoothState::Idle,
            params: AdjustmentParams::default(),
            filter: None,
            generation: 0,
        }
    }

    /// Adjustments applied to every shot in the session.
    pub fn set_adjustments(&mut self, params: AdjustmentParams) {
        self.params = params;
    }

    /// Filter applied to every shot in the session.
    pub fn set_filter(&mut self, filter: Option<&'static FilterEffect>) {
        self.filter = filter;
    }

    pub fn state(&self) -> BoothState {
        self.state
    }

    pub fn shots(&self) -> &[CapturedImage] {
        &self.shots
    }

    pub fn shot_count(&self) -> u32 {
        self.shot_count
    }

    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    /// Whether a session is currently running.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            BoothState::Countdown(_) | BoothState::Capturing
        )
    }

    /// Generation counter; bumped on every reset so stale tick schedules
    /// can detect that they were invalidated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new session.
    ///
    /// The shot count is clamped to the supported range and the timer to
    /// at least one second. Fails with `AlreadyActive` while a session is
    /// running; leftover shots from a finished session are discarded.
    pub fn start(&mut self, shot_count: u32, timer_seconds: u32) -> AppResult<()> {
        if self.is_active() {
            return Err(SessionError::AlreadyActive.into());
        }
        self.shot_count = shot_count.clamp(booth_limits::SHOTS_MIN, booth_limits::SHOTS_MAX);
        self.timer_seconds = timer_seconds.max(1);
        self.shots.clear();
        self.state = BoothState::Countdown(self.timer_seconds);
        info!(
            shots = self.shot_count,
            timer = self.timer_seconds,
            "Photobooth session started"
        );
        Ok(())
    }

    /// Advance the state machine by one one-second tick.
    ///
    /// `Countdown(n)` counts down through the reserved final-cue tick at
    /// zero; the tick after that performs one capture. A capture failure
    /// cancels the whole session and surfaces the error.
    pub fn tick<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> AppResult<TickOutcome> {
        self.tick_with_rng(source, &mut rand::rng())
    }

    /// [`Self::tick`] with an injected random source for the grain pass.
    pub fn tick_with_rng<S: FrameSource + ?Sized, R: Rng + ?Sized>(
        &mut self,
        source: &mut S,
        rng: &mut R,
    ) -> AppResult<TickOutcome> {
        match self.state {
            BoothState::Countdown(remaining) if remaining > 0 => {
                self.state = BoothState::Countdown(remaining - 1);
                Ok(TickOutcome::Countdown(remaining - 1))
            }
            BoothState::Countdown(_) => {
                self.state = BoothState::Capturing;
                match capture::capture_single_with_rng(source, &self.params, self.filter, rng) {
                    Ok(shot) => {
                        self.shots.push(shot);
                        let index = self.shots.len() - 1;
                        if (self.shots.len() as u32) < self.shot_count {
                            // Next round begins immediately, no gap.
                            self.state = BoothState::Countdown(self.timer_seconds);
                            Ok(TickOutcome::Captured(index))
                        } else {
                            self.state = BoothState::Complete;
                            info!(shots = self.shots.len(), "Photobooth session complete");
                            Ok(TickOutcome::Complete)
                        }
                    }
                    Err(err) => {
                        // No silent slot skipping: a failed capture aborts
                        // the session.
                        warn!(error = %err, "Capture failed, cancelling session");
                        self.shots.clear();
                        self.state = BoothState::Cancelled;
                        self.generation += 1;
                        Err(err)
                    }
                }
            }
            BoothState::Idle | BoothState::Complete | BoothState::Cancelled => {
                Ok(TickOutcome::Ignored)
            }
            BoothState::Capturing => {
                // Captures complete within the tick that enters Capturing,
                // so a tick observing this state was scheduled before a
                // reset; ignore it.
                Ok(TickOutcome::Ignored)
            }
        }
    }

    /// Manual shutter press outside of a session.
    ///
    /// Rejected while the session state machine is not idle.
    pub fn manual_capture<S: FrameSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> AppResult<CapturedImage> {
        if self.state != BoothState::Idle {
            return Err(SessionError::CaptureRejected.into());
        }
        capture::capture_single(source, &self.params, self.filter)
    }

    /// Cancel the session: discard images and return to idle.
    ///
    /// Invalidates any pending tick via the generation counter.
    pub fn reset(&mut self) {
        if self.is_active() {
            info!("Photobooth session cancelled");
        }
        self.shots.clear();
        self.state = BoothState::Idle;
        self.generation += 1;
    }

    /// Acknowledge completion, taking ownership of the shots and
    /// returning the machine to idle.
    pub fn take_shots(&mut self) -> Vec<CapturedImage> {
        let shots = std::mem::take(&mut self.shots);
        self.state = BoothState::Idle;
        self.generation += 1;
        shots
    }
}
