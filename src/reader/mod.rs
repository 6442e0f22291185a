//! Reader cores
//!
//! Mode-specific state machines behind the viewer pages. Each machine has
//! named states and guarded transitions; the shared audio output is an
//! owned single-instance resource (`playback::AudioSlot`), never a loose
//! mutable variable.

pub mod focus;
pub mod playback;
pub mod quiz;
pub mod sequence;
pub mod talk;

pub use focus::{FocusEvent, FocusPhase, FocusSession, FocusTimer, NarrationState, Narrator};
pub use playback::AudioSlot;
pub use quiz::{AnswerState, McqWidget, ShortAnswerWidget, TrueFalseWidget};
pub use sequence::{PlayerState, SegmentPlayer};
pub use talk::{TalkAction, TalkMachine, TalkState};
