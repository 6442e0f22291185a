//! Speech synthesis support

pub mod splitter;

pub use splitter::split_text;
