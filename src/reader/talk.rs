//! Push-to-talk machine (blindness mode)
//!
//! The whole voice loop rides on one key. Down and up edges drive an
//! explicit state machine instead of nested boolean-flag checks:
//!
//! ```text
//! Idle --down--> Recording --up--> Processing --answer--> Speaking --done--> Idle
//!   ^                |                  |                     |
//!   |                +--up, empty-------+--down: cancel-------+--down: cancel
//!   +----------------------------------------------------------------+
//! ```
//!
//! Down while Recording is suppressed (no re-entrant start); down while
//! Processing or Speaking cancels immediately, aborting any clip.

use crate::providers::ChatMessage;

use super::playback::AudioSlot;

/// Named states of the push-to-talk loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkState {
    Idle,
    Recording,
    Processing,
    Speaking,
}

/// Action the surrounding page must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkAction {
    /// Begin capturing speech
    StartRecording,
    /// Stop capture and send the transcript as a question
    Process { transcript: String },
    /// Abort in-flight synthesis/processing
    Cancel,
    /// Edge suppressed by a guard
    Ignore,
}

/// Push-to-talk state machine with page-local conversation history
#[derive(Debug, Default)]
pub struct TalkMachine {
    state: TalkState,
    transcript: String,
    history: Vec<ChatMessage>,
    slot: AudioSlot,
}

impl Default for TalkState {
    fn default() -> Self {
        TalkState::Idle
    }
}

impl TalkMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TalkState {
        self.state
    }

    /// Ordered user/assistant turns so far. Append-only, in-memory for
    /// the lifetime of one viewing session.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Key pressed.
    pub fn key_down(&mut self) -> TalkAction {
        match self.state {
            TalkState::Idle => {
                self.transcript.clear();
                self.state = TalkState::Recording;
                TalkAction::StartRecording
            }
            // No re-entrant start while already recording
            TalkState::Recording => TalkAction::Ignore,
            TalkState::Processing | TalkState::Speaking => {
                self.cancel();
                TalkAction::Cancel
            }
        }
    }

    /// Key released.
    pub fn key_up(&mut self) -> TalkAction {
        match self.state {
            TalkState::Recording => {
                let transcript = self.transcript.trim().to_string();
                if transcript.is_empty() {
                    // Nothing heard; fall straight back
                    self.state = TalkState::Idle;
                    return TalkAction::Ignore;
                }
                self.state = TalkState::Processing;
                self.history.push(ChatMessage::user(transcript.clone()));
                TalkAction::Process { transcript }
            }
            _ => TalkAction::Ignore,
        }
    }

    /// Recognized speech arrived while recording.
    pub fn append_transcript(&mut self, text: &str) {
        if self.state == TalkState::Recording {
            if !self.transcript.is_empty() {
                self.transcript.push(' ');
            }
            self.transcript.push_str(text);
        }
    }

    /// The answer came back; start speaking it.
    pub fn answer_ready(&mut self, answer: &str) -> bool {
        if self.state != TalkState::Processing {
            return false;
        }
        self.history.push(ChatMessage::assistant(answer));
        self.slot.acquire("answer");
        self.state = TalkState::Speaking;
        true
    }

    /// The round trip failed; back to idle, question stays in history.
    pub fn answer_failed(&mut self) {
        if self.state == TalkState::Processing {
            self.state = TalkState::Idle;
        }
    }

    /// Speech playback finished naturally.
    pub fn speech_finished(&mut self) {
        if self.state == TalkState::Speaking {
            self.slot.stop();
            self.state = TalkState::Idle;
        }
    }

    /// Collapse to idle, aborting any active clip.
    pub fn cancel(&mut self) {
        self.slot.stop();
        self.transcript.clear();
        self.state = TalkState::Idle;
    }
}
