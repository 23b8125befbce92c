//! End-to-end sequencing properties over the built-in dataset.

use std::time::Duration;

use mea8000::{
    AdvanceResult, CancelToken, FrameClock, NamedSound, Player, RecordingBackend, Sequencer,
    SequencerState, SoundBank, SoundFrame, sounds,
};

/// Clock that skips the cadence waits entirely.
#[derive(Debug, Default, Clone, Copy)]
struct InstantClock;

impl FrameClock for InstantClock {
    fn wait(&mut self, _duration: Duration) {}
}

fn run_uninterrupted(sound: NamedSound<'_>) -> (RecordingBackend, SequencerState) {
    let mut sequencer = Sequencer::new();
    let mut backend = RecordingBackend::new();
    sequencer.start(sound).unwrap();
    loop {
        match sequencer.advance(&mut backend) {
            AdvanceResult::Dispatched { .. } => {}
            _ => break,
        }
    }
    (backend, sequencer.state())
}

#[test]
fn dispatch_count_matches_frames_up_to_terminal_marker() {
    for sound in sounds::all() {
        let (backend, state) = run_uninterrupted(*sound);
        let up_to_terminal = sound
            .frames()
            .position(|frame| frame.is_terminal())
            .map(|index| index + 1)
            .unwrap_or(sound.frame_count());

        assert_eq!(state, SequencerState::Stopped, "{}", sound.name());
        assert_eq!(backend.len(), up_to_terminal, "{}", sound.name());
        assert!(backend.len() <= sound.frame_count(), "{}", sound.name());
    }
}

#[test]
fn nosound_runs_as_two_frames_with_one_wait() {
    let mut player = Player::with_clock(RecordingBackend::new(), InstantClock::default());
    let summary = player.play(sounds::NOSOUND).unwrap();

    assert_eq!(summary.frames_dispatched, 2);
    assert_eq!(summary.final_state, SequencerState::Stopped);
    // One 16 ms silence frame; the terminal marker prescribes no wait.
    assert_eq!(summary.total_wait, Duration::from_millis(16));

    let frames = player.backend().frames();
    assert_eq!(frames[0].amplitude, 0);
    assert!(frames[1].is_terminal());
}

#[test]
fn intro_sequences_as_one_continuous_stream() {
    let intro = sounds::INTRO_MEA8000;
    assert_eq!(intro.segments().len(), 3);
    assert_eq!(intro.frame_count(), 172);

    let (backend, state) = run_uninterrupted(intro);
    assert_eq!(state, SequencerState::Stopped);
    assert_eq!(backend.len(), 172);

    // Zero boundary artifacts: the dispatched stream equals a manual decode
    // of the concatenated segment bytes, frame for frame.
    let mut concatenated = Vec::new();
    for segment in intro.segments() {
        concatenated.extend_from_slice(segment);
    }
    let expected: Vec<SoundFrame> = concatenated
        .chunks_exact(4)
        .map(|chunk| SoundFrame::decode([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    assert_eq!(backend.frames(), expected.as_slice());
}

#[test]
fn cancellation_stops_dispatch_after_current_frame() {
    /// Clock that cancels during the nth wait.
    struct CancelAfter {
        token: CancelToken,
        remaining: usize,
    }

    impl FrameClock for CancelAfter {
        fn wait(&mut self, _duration: Duration) {
            if self.remaining == 0 {
                return;
            }
            self.remaining -= 1;
            if self.remaining == 0 {
                self.token.cancel();
            }
        }
    }

    for cancel_after in [1usize, 5, 40] {
        let token = CancelToken::new();
        let clock = CancelAfter {
            token: token.clone(),
            remaining: cancel_after,
        };
        let mut player = Player::with_clock(RecordingBackend::new(), clock);
        let summary = player
            .play_with_token(sounds::INTRO_MEA8000, token)
            .unwrap();

        assert_eq!(summary.final_state, SequencerState::Cancelled);
        assert_eq!(summary.frames_dispatched, cancel_after);
        assert_eq!(player.backend().len(), cancel_after);
    }
}

#[test]
fn bank_seeded_from_dataset_drives_playback() {
    let bank = SoundBank::with_sounds(sounds::all().iter().copied()).unwrap();
    assert_eq!(bank.len(), sounds::all().len());

    let sound = bank.lookup("a").unwrap();
    let mut player = Player::with_clock(RecordingBackend::new(), InstantClock::default());
    let summary = player.play(sound).unwrap();

    assert_eq!(summary.frames_dispatched, 8);
    let first = player.backend().frames()[0];
    assert_eq!(first.encode(), [0x86, 0xB3, 0xCD, 0xA0]);
}

#[test]
fn waits_follow_each_frame_duration() {
    let mut sequencer = Sequencer::new();
    let mut backend = RecordingBackend::new();
    sequencer.start(sounds::A).unwrap();

    let mut waits = Vec::new();
    loop {
        match sequencer.advance(&mut backend) {
            AdvanceResult::Dispatched { wait } => waits.push(wait),
            _ => break,
        }
    }

    let expected: Vec<Duration> = sounds::A
        .frames()
        .take_while(|frame| !frame.is_terminal())
        .map(|frame| frame.duration.as_duration())
        .collect();
    assert_eq!(waits, expected);
    assert_eq!(waits.len(), 7);
}
