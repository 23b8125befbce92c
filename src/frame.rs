//! MEA8000 Synthesis Frame
//!
//! Each frame is exactly 4 bytes (32 bits, most-significant byte first) and
//! carries one parameter update for the chip: per-formant bandwidth selectors,
//! three formant resonance selectors, amplitude, frame duration and pitch
//! increment. Decoding is a total function: every 32-bit pattern maps to a
//! well-formed frame.
//!
//! Bit layout:
//!
//! ```text
//! byte 0: BW1 BW1 BW2 BW2 BW3 BW3 BW4 BW4
//! byte 1: FM3 FM3 FM3 FM2 FM2 FM2 FM2 FM2
//! byte 2: FM1 FM1 FM1 FM1 FM1 AM3 AM2 AM1
//! byte 3: FD  FD  AM0 PI  PI  PI  PI  PI
//! ```
//!
//! The formant selectors (BW1-BW4, FM1-FM3) are raw enumerant indices; the
//! translation into physical register values is the job of the chip-interface
//! collaborator, see [`crate::backend::Mea8000Backend`]. The two tables the
//! chip documentation specifies completely are provided here:
//! [`BANDWIDTH_HZ`] and [`AMPLITUDE_TABLE`].

use std::fmt;
use std::time::Duration;

/// Number of bytes per synthesis frame.
pub const FRAME_BYTES: usize = 4;

/// Formant bandwidth in Hz per BW selector value (0-3).
pub const BANDWIDTH_HZ: [u16; 4] = [726, 309, 125, 50];

/// Fixed resonance frequency of the 4th formant in Hz.
///
/// BW4 selects only the bandwidth; the resonance itself is not programmable.
pub const BW4_RESONANCE_HZ: u16 = 3500;

/// Amplitude register values (0-15) mapped to normalized output levels.
///
/// The chip uses a nonlinear amplitude curve; each step is roughly 3 dB.
pub const AMPLITUDE_TABLE: [f32; 16] = [
    0.000, 0.008, 0.011, 0.016, 0.022, 0.031, 0.044, 0.062, 0.088, 0.125, 0.177, 0.250, 0.354,
    0.500, 0.707, 1.000,
];

/// Frame duration selector (FD field).
///
/// Determines how long the chip holds the frame's parameters before the
/// next frame must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameDuration {
    /// 8 ms
    Ms8 = 0,
    /// 16 ms
    Ms16 = 1,
    /// 32 ms
    Ms32 = 2,
    /// 64 ms
    Ms64 = 3,
}

impl FrameDuration {
    /// Decode the 2-bit FD field (upper bits are masked off).
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => FrameDuration::Ms8,
            1 => FrameDuration::Ms16,
            2 => FrameDuration::Ms32,
            _ => FrameDuration::Ms64,
        }
    }

    /// Raw 2-bit field value.
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Duration in milliseconds.
    pub fn millis(&self) -> u64 {
        8 << self.bits()
    }

    /// Duration as a [`std::time::Duration`], for cadence timing.
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

impl fmt::Display for FrameDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis())
    }
}

/// Pitch control (PI field).
///
/// The 5-bit field is two's complement, but the most-negative code (-16)
/// is not a pitch step: it switches the excitation source to noise. The
/// sum type makes that special case impossible to mishandle as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchMode {
    /// Voiced excitation; pitch changes by this many Hz every 8 ms (-15..=15).
    Increment(i8),
    /// Unvoiced/noise excitation.
    Noise,
}

/// Bit pattern of the PI field reserved for noise excitation.
const PI_NOISE_BITS: u8 = 0x10;

impl PitchMode {
    /// Decode the 5-bit PI field (upper bits are masked off).
    pub fn from_bits(bits: u8) -> Self {
        let bits = bits & 0x1F;
        if bits == PI_NOISE_BITS {
            PitchMode::Noise
        } else if bits & PI_NOISE_BITS != 0 {
            PitchMode::Increment(bits as i8 - 32)
        } else {
            PitchMode::Increment(bits as i8)
        }
    }

    /// Raw 5-bit field value.
    ///
    /// Increments outside -15..=15 cannot occur in decoded frames; values
    /// constructed by hand are clamped into range before encoding.
    pub fn bits(&self) -> u8 {
        match *self {
            PitchMode::Noise => PI_NOISE_BITS,
            PitchMode::Increment(delta) => (delta.clamp(-15, 15) as u8) & 0x1F,
        }
    }

    /// True for the noise sentinel.
    pub fn is_noise(&self) -> bool {
        matches!(self, PitchMode::Noise)
    }
}

impl fmt::Display for PitchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchMode::Increment(delta) => write!(f, "{:+}Hz/8ms", delta),
            PitchMode::Noise => f.write_str("noise"),
        }
    }
}

/// One decoded synthesis frame.
///
/// Plain value type; the bit-packed layout is never relied upon in memory,
/// only in [`SoundFrame::decode`] / [`SoundFrame::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundFrame {
    /// Bandwidth selectors for formants 1-4 (each 0-3, see [`BANDWIDTH_HZ`]).
    pub bw: [u8; 4],
    /// 3rd formant resonance selector (0-7).
    pub fm3: u8,
    /// 2nd formant resonance selector (0-31).
    pub fm2: u8,
    /// 1st formant resonance selector (0-31).
    pub fm1: u8,
    /// Amplitude (0-15, nonlinear; see [`AMPLITUDE_TABLE`]).
    pub amplitude: u8,
    /// Frame duration.
    pub duration: FrameDuration,
    /// Pitch increment or noise excitation.
    pub pitch: PitchMode,
}

impl SoundFrame {
    /// Decode a 4-byte window into a frame.
    ///
    /// Total over all inputs; a well-formed window cannot fail to decode.
    pub fn decode(bytes: [u8; FRAME_BYTES]) -> Self {
        let [b0, b1, b2, b3] = bytes;
        SoundFrame {
            bw: [(b0 >> 6) & 3, (b0 >> 4) & 3, (b0 >> 2) & 3, b0 & 3],
            fm3: (b1 >> 5) & 0x07,
            fm2: b1 & 0x1F,
            fm1: (b2 >> 3) & 0x1F,
            amplitude: ((b2 & 0x07) << 1) | ((b3 >> 5) & 1),
            duration: FrameDuration::from_bits(b3 >> 6),
            pitch: PitchMode::from_bits(b3),
        }
    }

    /// Encode the frame back into its 4-byte wire form.
    ///
    /// Field values wider than their declared bit widths are masked; for
    /// any decoded frame this is the bit-exact inverse of [`SoundFrame::decode`].
    pub fn encode(&self) -> [u8; FRAME_BYTES] {
        let b0 = ((self.bw[0] & 3) << 6) | ((self.bw[1] & 3) << 4) | ((self.bw[2] & 3) << 2)
            | (self.bw[3] & 3);
        let b1 = ((self.fm3 & 0x07) << 5) | (self.fm2 & 0x1F);
        let b2 = ((self.fm1 & 0x1F) << 3) | ((self.amplitude >> 1) & 0x07);
        let b3 = (self.duration.bits() << 6) | ((self.amplitude & 1) << 5) | self.pitch.bits();
        [b0, b1, b2, b3]
    }

    /// True for the terminal marker (an all-zero frame).
    ///
    /// Named sounds in the dataset end with one of these; the sequencer
    /// dispatches it and then stops feeding frames even if raw bytes remain.
    pub fn is_terminal(&self) -> bool {
        self.encode() == [0u8; FRAME_BYTES]
    }

    /// Normalized amplitude level (0.0-1.0) via the chip's nonlinear curve.
    pub fn amplitude_level(&self) -> f32 {
        AMPLITUDE_TABLE[(self.amplitude & 0x0F) as usize]
    }

    /// Silence frame holding for the given duration.
    ///
    /// Amplitude zero but a nonzero FD field, so it is not a terminal marker
    /// unless the duration is 8 ms and the pitch increment is zero.
    pub fn silence(duration: FrameDuration) -> Self {
        SoundFrame {
            bw: [0; 4],
            fm3: 0,
            fm2: 0,
            fm1: 0,
            amplitude: 0,
            duration,
            pitch: PitchMode::Increment(0),
        }
    }
}

impl fmt::Display for SoundFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fm1={} fm2={} fm3={} bw={:?} ampl={} fd={} pi={}",
            self.fm1, self.fm2, self.fm3, self.bw, self.amplitude, self.duration, self.pitch
        )
    }
}
