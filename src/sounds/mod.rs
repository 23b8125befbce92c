//! Built-in Sound Dataset (curated subset)
//!
//! Precomputed synthesis frames for the MEA8000, as shipped with the
//! original dataset: each sound is a read-only byte array whose length is a
//! multiple of 4, ending in the all-zero terminal frame. Only the entries
//! the crate's own tests and demo exercise are carried here; a consumer
//! with the full dataset registers its own tables the same way.
//!
//! Frame layout reminder (see [`crate::frame`] for the full description):
//!
//! ```text
//! byte 0: BW1 BW1 BW2 BW2 BW3 BW3 BW4 BW4
//! byte 1: FM3 FM3 FM3 FM2 FM2 FM2 FM2 FM2
//! byte 2: FM1 FM1 FM1 FM1 FM1 AM3 AM2 AM1
//! byte 3: FD  FD  AM0 PI  PI  PI  PI  PI
//! ```
//!
//! Long sounds are split into segments of at most 256 bytes, a storage
//! limit of the original host; the split carries no meaning at run time.
//! The original source lists the phoneme catalog in hexadecimal and the
//! word/sentence catalogs in decimal, a source-encoding difference with no
//! run-time effect; both spellings appear below unchanged.

use crate::sound::NamedSound;

/// Phoneme "a" (8 frames).
pub const SOUND_A: [u8; 32] = [
    0x86, 0xB3, 0xCD, 0xA0, 0x86, 0xB3, 0xCE, 0xA1, 0x86, 0xB3, 0xD7, 0x81,
    0x86, 0xB4, 0xDF, 0x80, 0x86, 0xB4, 0xE6, 0xBF, 0x86, 0xB5, 0xED, 0x5F,
    0x86, 0xB5, 0xF3, 0x5E, 0x00, 0x00, 0x00, 0x00,
];

/// Phoneme "e" (8 frames).
pub const SOUND_E: [u8; 32] = [
    0x96, 0xD8, 0xB5, 0xA0, 0x96, 0xD8, 0xBE, 0xA1, 0x96, 0xD9, 0xC7, 0x81,
    0x96, 0xD9, 0xCF, 0x80, 0x96, 0xDA, 0xD6, 0xBF, 0x96, 0xDA, 0xDD, 0x5F,
    0x96, 0xDB, 0xE3, 0x5E, 0x00, 0x00, 0x00, 0x00,
];

/// Phoneme "i" (8 frames).
pub const SOUND_I: [u8; 32] = [
    0x5A, 0xFC, 0x95, 0xA0, 0x5A, 0xFC, 0x9E, 0xA1, 0x5A, 0xFD, 0xA7, 0x81,
    0x5A, 0xFD, 0xAF, 0x80, 0x5A, 0xFE, 0xB6, 0xBF, 0x5A, 0xFE, 0xBD, 0x5F,
    0x5A, 0xFF, 0xC3, 0x5E, 0x00, 0x00, 0x00, 0x00,
];

/// Phoneme "o" (8 frames).
pub const SOUND_O: [u8; 32] = [
    0xA7, 0x89, 0x65, 0xA0, 0xA7, 0x89, 0x6E, 0xA1, 0xA7, 0x8A, 0x77, 0x81,
    0xA7, 0x8A, 0x7F, 0x80, 0xA7, 0x8B, 0x86, 0xBF, 0xA7, 0x8B, 0x8D, 0x5F,
    0xA7, 0x8C, 0x93, 0x5E, 0x00, 0x00, 0x00, 0x00,
];

/// Phoneme "u" (8 frames).
pub const SOUND_U: [u8; 32] = [
    0xE7, 0x66, 0x45, 0xA0, 0xE7, 0x66, 0x4E, 0xA1, 0xE7, 0x67, 0x57, 0x81,
    0xE7, 0x67, 0x5F, 0x80, 0xE7, 0x68, 0x66, 0xBF, 0xE7, 0x68, 0x6D, 0x5F,
    0xE7, 0x69, 0x73, 0x5E, 0x00, 0x00, 0x00, 0x00,
];

/// One 16 ms silence frame plus the terminal marker (2 frames).
pub const SOUND_NOSOUND: [u8; 8] = [0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00];

/// Digit "zero" (20 frames; noise onset for the fricative).
pub const SOUND_ZERO: [u8; 80] = [
    150, 104, 80, 112, 150, 137, 97, 80, 150, 170, 114, 80,
    150, 203, 131, 161, 150, 108, 148, 162, 150, 141, 165, 190,
    150, 174, 174, 159, 150, 207, 182, 160, 150, 112, 190, 161,
    150, 145, 190, 162, 150, 178, 190, 190, 150, 211, 190, 159,
    150, 116, 181, 160, 150, 149, 172, 161, 150, 182, 163, 162,
    150, 215, 146, 190, 150, 120, 129, 191, 150, 153, 112, 160,
    150, 186, 96, 161, 0, 0, 0, 0,
];

/// Introduction sentence, segment 1 of 3 (storage limit: 256 bytes each).
pub const SOUND_INTRO_MEA8000_1: [u8; 256] = [
    18, 152, 132, 144, 18, 153, 140, 144, 18, 185, 148, 95,
    18, 186, 156, 128, 18, 218, 172, 129, 18, 218, 180, 130,
    18, 218, 188, 67, 18, 218, 196, 157, 82, 218, 204, 190,
    82, 218, 212, 191, 82, 218, 212, 96, 82, 218, 220, 161,
    82, 218, 220, 162, 82, 218, 220, 163, 82, 185, 220, 125,
    82, 185, 220, 190, 150, 152, 221, 159, 150, 152, 221, 128,
    150, 119, 213, 65, 150, 86, 213, 130, 150, 86, 205, 131,
    150, 85, 197, 157, 150, 52, 189, 94, 150, 51, 181, 159,
    214, 50, 173, 144, 214, 49, 165, 176, 214, 48, 157, 127,
    214, 48, 141, 160, 214, 47, 133, 161, 214, 46, 125, 162,
    214, 45, 117, 99, 214, 76, 101, 189, 26, 75, 93, 190,
    26, 106, 85, 191, 26, 105, 78, 64, 26, 136, 70, 129,
    26, 135, 62, 130, 26, 166, 54, 131, 26, 166, 46, 93,
    26, 197, 46, 158, 90, 196, 38, 159, 90, 196, 38, 128,
    90, 195, 38, 65, 90, 194, 38, 130, 90, 194, 38, 163,
    90, 194, 38, 189, 90, 193, 38, 126, 90, 193, 46, 191,
    158, 161, 46, 176, 158, 161, 54, 176, 158, 129, 62, 127,
    158, 129, 70, 160, 158, 97, 78, 161, 158, 97, 86, 162,
    158, 65, 102, 99, 158, 65, 110, 189, 222, 34, 118, 190,
    222, 34, 127, 159, 222, 34, 143, 64, 222, 35, 151, 129,
    222, 36, 159, 130, 222, 36, 175, 131, 222, 37, 183, 93,
    222, 38, 191, 158,
];

/// Introduction sentence, segment 2 of 3.
pub const SOUND_INTRO_MEA8000_2: [u8; 256] = [
    18, 38, 199, 159, 18, 71, 207, 128, 18, 72, 215, 65,
    18, 105, 215, 130, 18, 106, 223, 131, 18, 139, 223, 157,
    18, 140, 223, 94, 18, 173, 223, 159, 82, 174, 223, 144,
    82, 207, 223, 144, 82, 208, 223, 95, 82, 208, 215, 128,
    82, 209, 215, 129, 82, 210, 207, 130, 82, 211, 199, 67,
    82, 212, 191, 157, 150, 213, 183, 158, 150, 214, 175, 159,
    150, 182, 167, 64, 150, 183, 159, 129, 150, 152, 143, 130,
    150, 152, 135, 131, 150, 121, 127, 93, 150, 121, 119, 158,
    214, 90, 103, 159, 214, 90, 95, 128, 214, 58, 87, 65,
    214, 58, 79, 130, 214, 58, 71, 131, 214, 58, 63, 157,
    214, 58, 55, 94, 214, 58, 47, 159, 26, 58, 47, 144,
    26, 58, 39, 144, 26, 58, 39, 95, 26, 89, 39, 128,
    26, 89, 39, 129, 26, 120, 39, 130, 26, 120, 39, 67,
    26, 151, 39, 157, 90, 151, 47, 158, 90, 182, 47, 159,
    90, 181, 55, 64, 90, 212, 63, 129, 90, 212, 71, 130,
    90, 211, 79, 131, 90, 210, 87, 93, 90, 209, 103, 158,
    158, 208, 111, 159, 158, 207, 119, 128, 158, 206, 127, 65,
    158, 205, 142, 162, 158, 172, 150, 163, 158, 171, 158, 189,
    158, 138, 174, 126, 158, 137, 182, 191, 222, 105, 190, 176,
    222, 104, 198, 176, 222, 71, 206, 127, 222, 70, 214, 160,
    222, 37, 214, 161, 222, 37, 222, 162, 222, 36, 222, 99,
    222, 35, 222, 189,
];

/// Introduction sentence, segment 3 of 3.
pub const SOUND_INTRO_MEA8000_3: [u8; 176] = [
    18, 35, 222, 158, 18, 34, 222, 159, 18, 34, 222, 64,
    18, 33, 222, 129, 18, 33, 214, 130, 18, 65, 214, 131,
    18, 65, 206, 93, 18, 97, 198, 158, 82, 97, 190, 159,
    82, 129, 182, 128, 82, 129, 173, 97, 82, 161, 165, 162,
    82, 161, 157, 163, 82, 193, 141, 189, 82, 194, 133, 126,
    82, 194, 125, 191, 150, 195, 117, 176, 150, 195, 101, 176,
    150, 196, 93, 127, 150, 197, 85, 128, 150, 197, 77, 129,
    150, 198, 69, 130, 150, 167, 61, 67, 150, 168, 53, 157,
    214, 168, 45, 158, 214, 137, 45, 159, 214, 106, 37, 64,
    214, 107, 37, 129, 214, 76, 36, 162, 214, 77, 36, 163,
    214, 46, 36, 125, 214, 47, 36, 190, 26, 48, 36, 191,
    26, 49, 44, 160, 26, 50, 44, 97, 26, 51, 52, 162,
    26, 52, 60, 131, 26, 52, 68, 157, 26, 53, 76, 94,
    26, 54, 84, 159, 90, 87, 100, 144, 90, 87, 108, 144,
    90, 120, 116, 95, 0, 0, 0, 0,
];

const A_SEGMENTS: [&[u8]; 1] = [&SOUND_A];
const E_SEGMENTS: [&[u8]; 1] = [&SOUND_E];
const I_SEGMENTS: [&[u8]; 1] = [&SOUND_I];
const O_SEGMENTS: [&[u8]; 1] = [&SOUND_O];
const U_SEGMENTS: [&[u8]; 1] = [&SOUND_U];
const NOSOUND_SEGMENTS: [&[u8]; 1] = [&SOUND_NOSOUND];
const ZERO_SEGMENTS: [&[u8]; 1] = [&SOUND_ZERO];
const INTRO_SEGMENTS: [&[u8]; 3] = [
    &SOUND_INTRO_MEA8000_1,
    &SOUND_INTRO_MEA8000_2,
    &SOUND_INTRO_MEA8000_3,
];

/// Phoneme "a".
pub const A: NamedSound<'static> = NamedSound::new("a", &A_SEGMENTS);
/// Phoneme "e".
pub const E: NamedSound<'static> = NamedSound::new("e", &E_SEGMENTS);
/// Phoneme "i".
pub const I: NamedSound<'static> = NamedSound::new("i", &I_SEGMENTS);
/// Phoneme "o".
pub const O: NamedSound<'static> = NamedSound::new("o", &O_SEGMENTS);
/// Phoneme "u".
pub const U: NamedSound<'static> = NamedSound::new("u", &U_SEGMENTS);
/// Silence placeholder.
pub const NOSOUND: NamedSound<'static> = NamedSound::new("NoSound", &NOSOUND_SEGMENTS);
/// Digit "zero".
pub const ZERO: NamedSound<'static> = NamedSound::new("zero", &ZERO_SEGMENTS);
/// Introduction sentence, stitched from its three storage segments.
pub const INTRO_MEA8000: NamedSound<'static> =
    NamedSound::new("INTRO_MEA8000", &INTRO_SEGMENTS);

static ALL: [NamedSound<'static>; 8] = [A, E, I, O, U, NOSOUND, ZERO, INTRO_MEA8000];

/// Every built-in sound.
pub fn all() -> &'static [NamedSound<'static>] {
    &ALL
}

/// Look up a built-in sound by name.
pub fn lookup(name: &str) -> Option<NamedSound<'static>> {
    ALL.iter().find(|sound| sound.name() == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FRAME_BYTES;

    #[test]
    fn test_every_sound_validates() {
        for sound in all() {
            sound.validate().unwrap();
            assert_eq!(
                sound.byte_len() % FRAME_BYTES,
                0,
                "{} has a truncated segment",
                sound.name()
            );
        }
    }

    #[test]
    fn test_declared_frame_counts() {
        assert_eq!(A.byte_len(), 32);
        assert_eq!(A.frame_count(), 8);
        assert_eq!(NOSOUND.frame_count(), 2);
        assert_eq!(ZERO.frame_count(), 20);
        assert_eq!(INTRO_MEA8000.byte_len(), 256 + 256 + 176);
        assert_eq!(INTRO_MEA8000.frame_count(), 172);
    }

    #[test]
    fn test_every_sound_ends_in_terminal_marker() {
        for sound in all() {
            let last = sound.frames().last().unwrap();
            assert!(
                last.is_terminal(),
                "{} does not end in the terminal marker",
                sound.name()
            );
        }
    }

    #[test]
    fn test_terminal_marker_appears_only_last() {
        for sound in all() {
            let terminal_at = sound
                .frames()
                .position(|frame| frame.is_terminal())
                .unwrap();
            assert_eq!(
                terminal_at,
                sound.frame_count() - 1,
                "{} has a premature terminal marker",
                sound.name()
            );
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("a").unwrap().frame_count(), 8);
        assert_eq!(lookup("INTRO_MEA8000").unwrap().segments().len(), 3);
        assert!(lookup("nonexistent").is_none());
    }
}
