//! Backend trait abstraction for MEA8000 chip interfaces
//!
//! This module defines the collaborator contract the sequencer dispatches
//! decoded frames to. The real implementation translates the raw formant
//! enumerant indices (BW1-BW4, FM1-FM3) into physical register values via
//! the chip's lookup tables and issues them over its native bus; those
//! tables are chip-specific and deliberately not part of this crate.
//!
//! The write is fire-and-forget: the chip interface exposes no return value
//! per frame, and a write is assumed short relative to the frame duration.

use crate::frame::SoundFrame;

/// Common interface for MEA8000 chip backends.
///
/// Implementations range from a real register-mapped bus driver to test
/// doubles such as [`RecordingBackend`].
pub trait Mea8000Backend: Send {
    /// Apply one decoded frame's parameters to the chip.
    ///
    /// Enumerant indices outside the backend's lookup tables are the
    /// backend's decision to clamp or reject; the decoder makes no
    /// correctness claims about chip-specific table bounds.
    fn apply_frame(&mut self, frame: &SoundFrame);

    /// Reset the chip to its quiescent state.
    ///
    /// Default implementation is a no-op for backends with nothing to reset.
    fn reset(&mut self) {}
}

/// Backend that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl Mea8000Backend for NullBackend {
    fn apply_frame(&mut self, _frame: &SoundFrame) {}
}

/// Backend that records every dispatched frame, in order.
///
/// Useful as a test double and as the reference for what a sequencing run
/// delivered to the chip.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    frames: Vec<SoundFrame>,
    resets: usize,
}

impl RecordingBackend {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames received so far, in dispatch order.
    pub fn frames(&self) -> &[SoundFrame] {
        &self.frames
    }

    /// Number of frames received so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame has been received.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of `reset` calls received.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.resets = 0;
    }
}

impl Mea8000Backend for RecordingBackend {
    fn apply_frame(&mut self, frame: &SoundFrame) {
        self.frames.push(*frame);
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_backend_captures_in_order() {
        let mut backend = RecordingBackend::new();
        let first = SoundFrame::decode([0x86, 0xB3, 0xCD, 0xA0]);
        let second = SoundFrame::decode([0x00, 0x00, 0x00, 0x00]);
        backend.apply_frame(&first);
        backend.apply_frame(&second);
        assert_eq!(backend.frames(), &[first, second]);
        backend.reset();
        assert_eq!(backend.resets(), 1);
        backend.clear();
        assert!(backend.is_empty());
    }
}
