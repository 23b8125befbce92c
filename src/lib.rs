//! MEA8000 Frame Decoder and Playback Sequencer
//!
//! Support library for the Philips MEA8000 formant-synthesis voice chip's
//! precomputed speech dataset. The dataset stores each utterance as a byte
//! array of 4-byte synthesis frames; this crate provides the two pieces any
//! consumer of that data needs:
//!
//! - Bit-exact decoding of each 32-bit frame into formant, amplitude, pitch
//!   and duration parameters ([`SoundFrame`])
//! - A sequencer that walks a named sound's storage segments frame by frame,
//!   dispatches each decoded frame to a chip-interface backend and observes
//!   the 8/16/32/64 ms cadence ([`Sequencer`], [`Player`])
//!
//! Formant synthesis itself happens in hardware on the real chip: the crate
//! never touches audio, only the chip's parameter stream. The translation of
//! formant enumerant indices into physical register values is the backend's
//! responsibility ([`Mea8000Backend`]).
//!
//! # Crate feature flags
//! - `serde` (optional): Serialize/Deserialize derives on decoded frame types
//!
//! # Quick start
//! ```
//! use mea8000::{Player, RecordingBackend, sounds};
//!
//! let mut player = Player::new(RecordingBackend::new());
//! let summary = player.play(sounds::A).unwrap();
//! assert_eq!(summary.frames_dispatched, 8);
//! ```
//!
//! For a cooperative tick loop instead of blocking playback, drive
//! [`Sequencer::advance`] directly and wait out the returned durations
//! between calls.

#![warn(missing_docs)]

pub mod backend;
pub mod frame;
pub mod player;
pub mod sequencer;
pub mod sound;
pub mod sounds;

/// Error types for dataset registration and playback
///
/// Decoding itself cannot fail: every 32-bit pattern is a well-formed frame.
/// The variants here cover the structural invariants checked at sound
/// registration time and the benign empty-sound signal.
#[derive(thiserror::Error, Debug)]
pub enum Mea8000Error {
    /// Sound holds no frames; playback completes immediately. Benign.
    #[error("sound '{name}' contains no frames")]
    EmptySound {
        /// Name of the empty sound.
        name: String,
    },

    /// Segment length is not a multiple of 4: corrupted dataset entry.
    #[error("sound '{name}' segment {segment} is {len} bytes, not a multiple of 4")]
    TruncatedBuffer {
        /// Name of the offending sound.
        name: String,
        /// Index of the offending segment.
        segment: usize,
        /// Length of the offending segment in bytes.
        len: usize,
    },

    /// A sound with this name is already registered.
    #[error("sound '{name}' is already registered")]
    DuplicateSound {
        /// The duplicated name.
        name: String,
    },

    /// No sound with this name is registered.
    #[error("no sound named '{name}' is registered")]
    UnknownSound {
        /// The unresolved name.
        name: String,
    },
}

/// Result type for dataset and playback operations
pub type Result<T> = std::result::Result<T, Mea8000Error>;

// Public API exports
pub use backend::{Mea8000Backend, NullBackend, RecordingBackend};
pub use frame::{
    AMPLITUDE_TABLE, BANDWIDTH_HZ, BW4_RESONANCE_HZ, FRAME_BYTES, FrameDuration, PitchMode,
    SoundFrame,
};
pub use player::{FrameClock, PlaySummary, Player, SystemClock};
pub use sequencer::{AdvanceResult, CancelToken, Sequencer, SequencerState};
pub use sound::{Frames, NamedSound, SoundBank};
