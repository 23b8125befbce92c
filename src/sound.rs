//! Named Sounds and the Sound Bank
//!
//! A named sound is an ordered list of read-only byte segments that together
//! hold one utterance. Long sounds are split across several segments purely
//! because of a storage/transfer limit on the original host (256 bytes per
//! segment); the segments concatenate into one continuous frame stream with
//! no semantic break at the split points.
//!
//! Segments are borrowed, never copied: on the original target they live in
//! flash, here they are `&'static` constants or any caller-owned byte store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::frame::{FRAME_BYTES, SoundFrame};
use crate::{Mea8000Error, Result};

/// One named utterance: a phoneme, a word, a digit or a full sentence.
///
/// Immutable; every segment's length is a multiple of 4 so that no frame
/// ever straddles a segment boundary ([`NamedSound::validate`] enforces
/// this up front, before any playback attempt).
#[derive(Debug, Clone, Copy)]
pub struct NamedSound<'a> {
    name: &'a str,
    segments: &'a [&'a [u8]],
}

impl<'a> NamedSound<'a> {
    /// Create a sound from its storage segments.
    ///
    /// Usable in `const`/`static` context, which is how the built-in dataset
    /// in [`crate::sounds`] is declared.
    pub const fn new(name: &'a str, segments: &'a [&'a [u8]]) -> Self {
        NamedSound { name, segments }
    }

    /// Identity of the sound.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The storage segments, in playback order.
    pub fn segments(&self) -> &'a [&'a [u8]] {
        self.segments
    }

    /// Total byte length across all segments.
    pub fn byte_len(&self) -> usize {
        self.segments.iter().map(|seg| seg.len()).sum()
    }

    /// Total frame count across all segments.
    pub fn frame_count(&self) -> usize {
        self.byte_len() / FRAME_BYTES
    }

    /// True when the sound holds no frames at all.
    pub fn is_empty(&self) -> bool {
        self.byte_len() == 0
    }

    /// Check the structural invariant: every segment length is a multiple
    /// of 4. A violation indicates a corrupted dataset entry and is fatal
    /// at registration time, never discovered mid-playback.
    pub fn validate(&self) -> Result<()> {
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.len() % FRAME_BYTES != 0 {
                return Err(Mea8000Error::TruncatedBuffer {
                    name: self.name.to_string(),
                    segment: index,
                    len: segment.len(),
                });
            }
        }
        Ok(())
    }

    /// Iterate the decoded frames of the whole sound, crossing segment
    /// boundaries transparently. Trailing bytes that do not fill a frame
    /// are ignored (they cannot occur in a validated sound).
    pub fn frames(&self) -> Frames<'a> {
        Frames {
            segments: self.segments,
            segment: 0,
            offset: 0,
        }
    }
}

/// Iterator over the decoded frames of a [`NamedSound`].
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    segments: &'a [&'a [u8]],
    segment: usize,
    offset: usize,
}

impl<'a> Frames<'a> {
    /// Fetch the next 4-byte window, advancing to the next segment when the
    /// current one is exhausted.
    pub(crate) fn next_window(&mut self) -> Option<[u8; FRAME_BYTES]> {
        while let Some(segment) = self.segments.get(self.segment) {
            if self.offset + FRAME_BYTES <= segment.len() {
                let mut window = [0u8; FRAME_BYTES];
                window.copy_from_slice(&segment[self.offset..self.offset + FRAME_BYTES]);
                self.offset += FRAME_BYTES;
                return Some(window);
            }
            self.segment += 1;
            self.offset = 0;
        }
        None
    }
}

impl Iterator for Frames<'_> {
    type Item = SoundFrame;

    fn next(&mut self) -> Option<SoundFrame> {
        self.next_window().map(SoundFrame::decode)
    }
}

/// Registry of named sounds with validated-at-registration semantics.
///
/// The sounds themselves are immutable and freely shareable; the lock only
/// guards the name map, so a bank can be consulted from several threads
/// while playback is running.
#[derive(Debug, Default)]
pub struct SoundBank {
    sounds: RwLock<HashMap<String, NamedSound<'static>>>,
}

impl SoundBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank pre-seeded with the given sounds.
    pub fn with_sounds<I>(sounds: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamedSound<'static>>,
    {
        let bank = Self::new();
        for sound in sounds {
            bank.register(sound)?;
        }
        Ok(bank)
    }

    /// Register a sound under its name.
    ///
    /// Validates the multiple-of-4 invariant and rejects duplicate names.
    pub fn register(&self, sound: NamedSound<'static>) -> Result<()> {
        sound.validate()?;
        let mut sounds = self.sounds.write();
        if sounds.contains_key(sound.name()) {
            return Err(Mea8000Error::DuplicateSound {
                name: sound.name().to_string(),
            });
        }
        log::debug!(
            "registered sound '{}' ({} frames, {} segment(s))",
            sound.name(),
            sound.frame_count(),
            sound.segments().len()
        );
        sounds.insert(sound.name().to_string(), sound);
        Ok(())
    }

    /// Look up a sound by name.
    pub fn get(&self, name: &str) -> Option<NamedSound<'static>> {
        self.sounds.read().get(name).copied()
    }

    /// Look up a sound by name, reporting a miss as an error.
    pub fn lookup(&self, name: &str) -> Result<NamedSound<'static>> {
        self.get(name).ok_or_else(|| Mea8000Error::UnknownSound {
            name: name.to_string(),
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sounds.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered sounds.
    pub fn len(&self) -> usize {
        self.sounds.read().len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.sounds.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEG_A: [u8; 8] = [0x86, 0xB3, 0xCD, 0xA0, 0x12, 0x34, 0x56, 0x78];
    static SEG_B: [u8; 4] = [0x00, 0x00, 0x00, 0x00];
    static GOOD_SEGMENTS: [&[u8]; 2] = [&SEG_A, &SEG_B];
    static GOOD: NamedSound<'static> = NamedSound::new("good", &GOOD_SEGMENTS);

    static ODD_SEG: [u8; 6] = [1, 2, 3, 4, 5, 6];
    static ODD_SEGMENTS: [&[u8]; 2] = [&SEG_A, &ODD_SEG];
    static TRUNCATED: NamedSound<'static> = NamedSound::new("truncated", &ODD_SEGMENTS);

    #[test]
    fn test_frame_count_and_validation() {
        assert_eq!(GOOD.byte_len(), 12);
        assert_eq!(GOOD.frame_count(), 3);
        assert!(GOOD.validate().is_ok());

        match TRUNCATED.validate() {
            Err(Mea8000Error::TruncatedBuffer { segment, len, .. }) => {
                assert_eq!(segment, 1);
                assert_eq!(len, 6);
            }
            other => panic!("expected TruncatedBuffer, got {:?}", other),
        }
    }

    #[test]
    fn test_frames_cross_segment_boundary() {
        let frames: Vec<SoundFrame> = GOOD.frames().collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], SoundFrame::decode([0x86, 0xB3, 0xCD, 0xA0]));
        assert_eq!(frames[1], SoundFrame::decode([0x12, 0x34, 0x56, 0x78]));
        assert!(frames[2].is_terminal());
    }

    #[test]
    fn test_empty_sound() {
        static NO_SEGMENTS: [&[u8]; 0] = [];
        let empty = NamedSound::new("empty", &NO_SEGMENTS);
        assert!(empty.is_empty());
        assert_eq!(empty.frame_count(), 0);
        assert_eq!(empty.frames().count(), 0);
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_bank_register_and_lookup() {
        let bank = SoundBank::new();
        bank.register(GOOD).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.lookup("good").unwrap().frame_count(), 3);
        assert!(matches!(
            bank.lookup("missing"),
            Err(Mea8000Error::UnknownSound { .. })
        ));
    }

    #[test]
    fn test_bank_rejects_duplicates_and_truncated() {
        let bank = SoundBank::new();
        bank.register(GOOD).unwrap();
        assert!(matches!(
            bank.register(GOOD),
            Err(Mea8000Error::DuplicateSound { .. })
        ));
        assert!(matches!(
            bank.register(TRUNCATED),
            Err(Mea8000Error::TruncatedBuffer { .. })
        ));
        // The failed registrations must not have been recorded.
        assert_eq!(bank.names(), vec!["good".to_string()]);
    }
}
