//! Blocking Playback Driver
//!
//! Pairs a [`Sequencer`] with a backend and a cadence clock and runs one
//! sound to completion. The original target realizes the 8/16/32/64 ms
//! cadence with a blocking delay; [`SystemClock`] reproduces that, and
//! tests substitute a clock that records (or skips) the waits.
//!
//! Callers that prefer a cooperative tick loop can drive
//! [`Sequencer::advance`] directly and skip this module.

use std::thread;
use std::time::Duration;

use crate::backend::Mea8000Backend;
use crate::sequencer::{AdvanceResult, CancelToken, Sequencer, SequencerState};
use crate::sound::NamedSound;
use crate::{Mea8000Error, Result};

/// Cadence wait abstraction.
pub trait FrameClock {
    /// Wait out one frame duration.
    fn wait(&mut self, duration: Duration);
}

/// Real-time clock backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Summary of one completed playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Frames dispatched to the backend, terminal marker included.
    pub frames_dispatched: usize,
    /// Sum of the cadence waits prescribed by the dispatched frames.
    pub total_wait: Duration,
    /// Final sequencer state (`Stopped` or `Cancelled`).
    pub final_state: SequencerState,
}

/// Blocking player: owns the backend and clock, drives the sequencer.
#[derive(Debug)]
pub struct Player<B, C = SystemClock> {
    backend: B,
    clock: C,
}

impl<B: Mea8000Backend> Player<B> {
    /// Create a player with real-time cadence.
    pub fn new(backend: B) -> Self {
        Player {
            backend,
            clock: SystemClock,
        }
    }
}

impl<B: Mea8000Backend, C: FrameClock> Player<B, C> {
    /// Create a player with a custom cadence clock.
    pub fn with_clock(backend: B, clock: C) -> Self {
        Player { backend, clock }
    }

    /// Play one sound to completion, blocking between frames.
    ///
    /// An empty sound completes immediately with zero dispatches; the
    /// benign [`Mea8000Error::EmptySound`] signal is absorbed here and
    /// reflected in the summary instead.
    pub fn play(&mut self, sound: NamedSound<'_>) -> Result<PlaySummary> {
        self.play_with_token(sound, CancelToken::new())
    }

    /// Play one sound, honoring an externally held cancellation token.
    ///
    /// Cancellation takes effect once the in-flight frame's wait completes;
    /// no further frame is dispatched after that.
    pub fn play_with_token(
        &mut self,
        sound: NamedSound<'_>,
        cancel: CancelToken,
    ) -> Result<PlaySummary> {
        let mut sequencer = Sequencer::new();
        match sequencer.start_with_token(sound, cancel) {
            Ok(()) => {}
            Err(Mea8000Error::EmptySound { .. }) => {
                return Ok(PlaySummary {
                    frames_dispatched: 0,
                    total_wait: Duration::ZERO,
                    final_state: SequencerState::Stopped,
                });
            }
            Err(err) => return Err(err),
        }

        let mut total_wait = Duration::ZERO;
        loop {
            match sequencer.advance(&mut self.backend) {
                AdvanceResult::Dispatched { wait } => {
                    total_wait += wait;
                    self.clock.wait(wait);
                }
                AdvanceResult::Finished | AdvanceResult::Cancelled | AdvanceResult::Idle => {
                    break;
                }
            }
        }

        Ok(PlaySummary {
            frames_dispatched: sequencer.dispatched(),
            total_wait,
            final_state: sequencer.state(),
        })
    }

    /// Access the backend, e.g. to inspect a [`crate::backend::RecordingBackend`].
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the player, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
