//! MEA8000 Playback Demo
//!
//! Sequences every built-in sound through a console backend at real cadence,
//! printing the parameter stream a chip interface would receive.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example speak
//! ```

use mea8000::{Mea8000Backend, Player, SoundFrame, sounds};

/// Backend that prints each dispatched frame instead of driving a bus.
struct ConsoleBackend {
    frames: usize,
}

impl Mea8000Backend for ConsoleBackend {
    fn apply_frame(&mut self, frame: &SoundFrame) {
        self.frames += 1;
        println!("  frame {:3}: {}", self.frames, frame);
    }

    fn reset(&mut self) {
        self.frames = 0;
    }
}

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Debug)?;

    for sound in sounds::all() {
        println!(
            "▶ {} ({} frames, {} segment(s))",
            sound.name(),
            sound.frame_count(),
            sound.segments().len()
        );

        let mut player = Player::new(ConsoleBackend { frames: 0 });
        let summary = player.play(*sound)?;
        println!(
            "  done: {} frames, {:?} of cadence, state {:?}\n",
            summary.frames_dispatched, summary.total_wait, summary.final_state
        );
    }

    Ok(())
}
