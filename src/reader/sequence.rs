//! Sequential segment playback (dyslexia mode)
//!
//! The dyslexia reader receives pre-split audio segments and plays them
//! in order, advancing automatically when each segment ends. A single
//! play/pause toggle drives the whole sequence.

use super::playback::AudioSlot;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Playing { segment: usize },
    Paused { segment: usize },
}

/// Ordered-segment player
#[derive(Debug)]
pub struct SegmentPlayer {
    segment_count: usize,
    state: PlayerState,
    slot: AudioSlot,
}

impl SegmentPlayer {
    pub fn new(segment_count: usize) -> Self {
        Self {
            segment_count,
            state: PlayerState::Stopped,
            slot: AudioSlot::new(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Play/pause toggle. Starting from stopped begins at segment zero.
    pub fn toggle(&mut self) -> PlayerState {
        self.state = match self.state {
            PlayerState::Stopped => {
                if self.segment_count == 0 {
                    PlayerState::Stopped
                } else {
                    self.slot.acquire("segment-0");
                    PlayerState::Playing { segment: 0 }
                }
            }
            PlayerState::Playing { segment } => {
                self.slot.stop();
                PlayerState::Paused { segment }
            }
            PlayerState::Paused { segment } => {
                self.slot.acquire(format!("segment-{}", segment));
                PlayerState::Playing { segment }
            }
        };
        self.state
    }

    /// The active segment finished; advance or stop after the last one.
    pub fn segment_ended(&mut self) -> PlayerState {
        if let PlayerState::Playing { segment } = self.state {
            let next = segment + 1;
            self.state = if next < self.segment_count {
                self.slot.acquire(format!("segment-{}", next));
                PlayerState::Playing { segment: next }
            } else {
                self.slot.stop();
                PlayerState::Stopped
            };
        }
        self.state
    }

    /// Replace the segment list (a reading-level change re-fetches the
    /// audio) and reset playback.
    pub fn reset(&mut self, segment_count: usize) {
        self.slot.stop();
        self.segment_count = segment_count;
        self.state = PlayerState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_segments_in_order() {
        let mut p = SegmentPlayer::new(3);
        assert_eq!(p.toggle(), PlayerState::Playing { segment: 0 });
        assert_eq!(p.segment_ended(), PlayerState::Playing { segment: 1 });
        assert_eq!(p.segment_ended(), PlayerState::Playing { segment: 2 });
        assert_eq!(p.segment_ended(), PlayerState::Stopped);
    }

    #[test]
    fn test_pause_resume() {
        let mut p = SegmentPlayer::new(2);
        p.toggle();
        assert_eq!(p.toggle(), PlayerState::Paused { segment: 0 });
        assert_eq!(p.toggle(), PlayerState::Playing { segment: 0 });
    }

    #[test]
    fn test_empty_sequence_stays_stopped() {
        let mut p = SegmentPlayer::new(0);
        assert_eq!(p.toggle(), PlayerState::Stopped);
    }

    #[test]
    fn test_reset_on_level_change() {
        let mut p = SegmentPlayer::new(2);
        p.toggle();
        p.segment_ended();
        p.reset(5);
        assert_eq!(p.state(), PlayerState::Stopped);
        assert_eq!(p.toggle(), PlayerState::Playing { segment: 0 });
    }

    #[test]
    fn test_segment_ended_while_paused_is_noop() {
        let mut p = SegmentPlayer::new(2);
        p.toggle();
        p.toggle();
        assert_eq!(p.segment_ended(), PlayerState::Paused { segment: 0 });
    }
}
