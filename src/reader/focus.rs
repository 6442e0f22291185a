//! Focus reader core (ADHD mode)
//!
//! Three independent machines drive the focus reader: chunk progress, a
//! 25-minute focus countdown, and a per-chunk narration sub-machine that
//! owns the page's audio slot.

use std::collections::BTreeSet;

use super::playback::{AudioSlot, Clip};

/// Focus countdown length: 25 minutes
pub const FOCUS_SECONDS: u32 = 25 * 60;

/// Progress phase of the focus reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    /// Viewing a chunk (completed or not)
    Reading { index: usize },
    /// Every chunk marked complete
    AllComplete,
}

/// Event emitted by a progress transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Moved on to the next chunk
    Advanced { to: usize },
    /// The final chunk was just completed; fires exactly once
    AllComplete,
}

/// Chunk-by-chunk progress machine
#[derive(Debug)]
pub struct FocusSession {
    chunks: Vec<String>,
    completed: BTreeSet<usize>,
    phase: FocusPhase,
    celebrated: bool,
}

impl FocusSession {
    /// Start a session over the given chunks. Empty input is rejected:
    /// the reader redirects to upload instead of rendering nothing.
    pub fn new(chunks: Vec<String>) -> Option<Self> {
        if chunks.is_empty() {
            return None;
        }
        Some(Self {
            chunks,
            completed: BTreeSet::new(),
            phase: FocusPhase::Reading { index: 0 },
            celebrated: false,
        })
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Text of the chunk currently in view, if still reading.
    pub fn current_chunk(&self) -> Option<&str> {
        match self.phase {
            FocusPhase::Reading { index } => self.chunks.get(index).map(|s| s.as_str()),
            FocusPhase::AllComplete => None,
        }
    }

    /// Mark the current chunk complete. Advances to the next chunk, or
    /// terminates when the last chunk was in view. The completion event
    /// fires exactly once per session, even when the user re-reads
    /// chunks after finishing and completes the last one again.
    pub fn mark_complete(&mut self) -> Option<FocusEvent> {
        let FocusPhase::Reading { index } = self.phase else {
            return None;
        };

        self.completed.insert(index);

        if index + 1 < self.chunks.len() {
            self.phase = FocusPhase::Reading { index: index + 1 };
            return Some(FocusEvent::Advanced { to: index + 1 });
        }

        self.phase = FocusPhase::AllComplete;
        if self.celebrated {
            None
        } else {
            self.celebrated = true;
            Some(FocusEvent::AllComplete)
        }
    }

    /// Jump back to an earlier chunk for re-reading. Leaving the terminal
    /// phase this way does not reset completion flags.
    pub fn view_chunk(&mut self, index: usize) -> bool {
        if index >= self.chunks.len() {
            return false;
        }
        self.phase = FocusPhase::Reading { index };
        true
    }
}

/// Event emitted by the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown reached zero; fires once, then the timer resets
    /// to the full period and stops.
    BreakDue,
}

/// Independent 25-minute focus countdown with a start/pause toggle
#[derive(Debug)]
pub struct FocusTimer {
    remaining: u32,
    running: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self {
            remaining: FOCUS_SECONDS,
            running: false,
        }
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start/pause toggle.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance one second. Returns the one-shot break event at zero.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        if self.remaining <= 1 {
            self.remaining = FOCUS_SECONDS;
            self.running = false;
            return Some(TimerEvent::BreakDue);
        }

        self.remaining -= 1;
        None
    }
}

/// Narration sub-machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationState {
    Idle,
    Loading,
    Playing,
}

/// Per-chunk narration driver
///
/// One TTS request plus one playback per chunk; starting narration while
/// another clip plays stops the previous clip first via the audio slot.
#[derive(Debug, Default)]
pub struct Narrator {
    state: NarrationState,
    slot: AudioSlot,
    current: Option<Clip>,
    chunk_index: Option<usize>,
}

impl Default for NarrationState {
    fn default() -> Self {
        NarrationState::Idle
    }
}

impl Narrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Chunk the current request or playback belongs to.
    pub fn chunk_index(&self) -> Option<usize> {
        self.chunk_index
    }

    /// Begin fetching narration for a chunk. Allowed from Idle or
    /// Playing (which cancels the active clip); a request already in
    /// flight is not restarted.
    pub fn start(&mut self, chunk_index: usize) -> bool {
        match self.state {
            NarrationState::Loading => false,
            NarrationState::Idle | NarrationState::Playing => {
                if let Some(clip) = self.current.take() {
                    self.slot.release(clip.id);
                }
                self.state = NarrationState::Loading;
                self.chunk_index = Some(chunk_index);
                true
            }
        }
    }

    /// The TTS response arrived; start playback.
    pub fn clip_ready(&mut self, label: impl Into<String>) -> Option<Clip> {
        if self.state != NarrationState::Loading {
            return None;
        }
        let (clip, _released) = self.slot.acquire(label);
        self.current = Some(clip.clone());
        self.state = NarrationState::Playing;
        Some(clip)
    }

    /// Playback finished or was stopped.
    pub fn stop(&mut self) {
        if let Some(clip) = self.current.take() {
            self.slot.release(clip.id);
        }
        self.chunk_index = None;
        self.state = NarrationState::Idle;
    }

    /// The request failed; back to idle so the user can retry.
    pub fn failed(&mut self) {
        self.current = None;
        self.chunk_index = None;
        self.state = NarrationState::Idle;
    }
}
