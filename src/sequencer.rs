//! Frame Sequencer
//!
//! Drives playback of one [`NamedSound`] by walking its segments 4 bytes at
//! a time, decoding each window and forwarding the result to the chip
//! backend. The sequencer is cooperative: each [`Sequencer::advance`] call
//! performs one dispatch and returns the frame's duration, and the caller
//! (a blocking loop or a periodic tick) waits it out before advancing again.
//!
//! Frames are applied in strict byte order, segment order then offset order;
//! no reordering, batching or skipping. Skipping would alter the pitch and
//! formant transitions audibly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::backend::Mea8000Backend;
use crate::frame::SoundFrame;
use crate::sound::{Frames, NamedSound};
use crate::{Mea8000Error, Result};

/// Sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// No sound loaded.
    Idle,
    /// Positioned at a frame boundary, about to fetch the next 4 bytes.
    Loading,
    /// Frame dispatched; its duration is being waited out by the caller.
    Playing,
    /// Terminal marker reached or all segments exhausted.
    Stopped,
    /// External cancellation honored.
    Cancelled,
}

impl SequencerState {
    /// True for the terminal states (`Stopped`, `Cancelled`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, SequencerState::Stopped | SequencerState::Cancelled)
    }
}

/// Outcome of one [`Sequencer::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// A frame was dispatched; wait this long before advancing again.
    Dispatched {
        /// Cadence wait prescribed by the frame's FD field.
        wait: Duration,
    },
    /// The terminal marker was dispatched, or no bytes remain. No wait.
    Finished,
    /// Cancellation was honored at the frame boundary. No dispatch occurred.
    Cancelled,
    /// Nothing to do: no sound loaded or the run already ended.
    Idle,
}

/// Cooperative cancellation flag shared between a sequencer and its callers.
///
/// Cancellation is checked when the next frame would otherwise be
/// dispatched; the in-flight frame is never interrupted mid-write.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// True once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Playback cursor over one named sound.
///
/// Owns nothing but the cursor: the sound's segments are borrowed read-only
/// data and are never freed or mutated by this component.
#[derive(Debug)]
pub struct Sequencer<'a> {
    sound: Option<NamedSound<'a>>,
    cursor: Option<Frames<'a>>,
    state: SequencerState,
    cancel: CancelToken,
    dispatched: usize,
}

impl<'a> Sequencer<'a> {
    /// Create an idle sequencer with no sound loaded.
    pub fn new() -> Self {
        Sequencer {
            sound: None,
            cursor: None,
            state: SequencerState::Idle,
            cancel: CancelToken::new(),
            dispatched: 0,
        }
    }

    /// Start a run over the given sound with a fresh cancellation token.
    ///
    /// A sound with zero frames transitions directly to `Stopped` and
    /// reports [`Mea8000Error::EmptySound`]; this is a benign no-op signal,
    /// not a fatal error. Restarting from any state reinitializes fully.
    pub fn start(&mut self, sound: NamedSound<'a>) -> Result<()> {
        self.start_with_token(sound, CancelToken::new())
    }

    /// Start a run with an externally held cancellation token.
    pub fn start_with_token(&mut self, sound: NamedSound<'a>, cancel: CancelToken) -> Result<()> {
        self.dispatched = 0;
        self.cancel = cancel;

        if sound.frame_count() == 0 {
            log::debug!("sound '{}' is empty, nothing to play", sound.name());
            self.sound = Some(sound);
            self.cursor = None;
            self.state = SequencerState::Stopped;
            return Err(Mea8000Error::EmptySound {
                name: sound.name().to_string(),
            });
        }

        log::debug!(
            "starting sound '{}' ({} frames, {} segment(s))",
            sound.name(),
            sound.frame_count(),
            sound.segments().len()
        );
        self.sound = Some(sound);
        self.cursor = Some(sound.frames());
        self.state = SequencerState::Loading;
        Ok(())
    }

    /// Perform one sequencing step: fetch the next 4-byte window, decode it,
    /// dispatch the frame to the backend and report the cadence wait.
    ///
    /// The caller waits out the returned duration before calling `advance`
    /// again; that wait is the only suspension point in the component.
    pub fn advance<B: Mea8000Backend>(&mut self, backend: &mut B) -> AdvanceResult {
        match self.state {
            SequencerState::Loading | SequencerState::Playing => {}
            SequencerState::Idle | SequencerState::Stopped | SequencerState::Cancelled => {
                return AdvanceResult::Idle;
            }
        }

        // Boundary check: honor a pending cancellation before dispatching.
        if self.cancel.is_cancelled() {
            log::debug!("cancellation honored after {} frame(s)", self.dispatched);
            self.state = SequencerState::Cancelled;
            return AdvanceResult::Cancelled;
        }
        self.state = SequencerState::Loading;

        let window = match self.cursor.as_mut().and_then(|cursor| cursor.next_window()) {
            Some(window) => window,
            None => {
                log::debug!("segments exhausted after {} frame(s)", self.dispatched);
                self.state = SequencerState::Stopped;
                return AdvanceResult::Finished;
            }
        };

        let frame = SoundFrame::decode(window);
        backend.apply_frame(&frame);
        self.dispatched += 1;
        log::trace!("frame {}: {}", self.dispatched, frame);

        if frame.is_terminal() {
            // Defensive bound: stop here even if raw bytes remain.
            log::debug!("terminal marker after {} frame(s)", self.dispatched);
            self.state = SequencerState::Stopped;
            return AdvanceResult::Finished;
        }

        self.state = SequencerState::Playing;
        AdvanceResult::Dispatched {
            wait: frame.duration.as_duration(),
        }
    }

    /// Request cancellation and transition immediately when not already in
    /// a terminal state. In-flight dispatch is unaffected.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        if !self.state.is_terminal() {
            self.state = SequencerState::Cancelled;
        }
    }

    /// Shared cancellation token for the current run.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Current state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Frames dispatched to the backend during the current run.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// The sound of the current run, if one was loaded.
    pub fn sound(&self) -> Option<NamedSound<'a>> {
        self.sound
    }
}

impl Default for Sequencer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
