//! Mode-specific content model
//!
//! The result of a conversion is shaped by the accessibility mode that
//! requested it. Rather than trusting raw provider JSON, each mode has a
//! typed variant and its own decoder.

pub mod chunker;
pub mod decode;
pub mod lesson;
pub mod rewrite;

pub use lesson::Lesson;
pub use rewrite::RewriteResult;

use serde::{Deserialize, Serialize};

/// Accessibility mode selecting the pipeline and viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dyslexia,
    Blindness,
    Autism,
    Adhd,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Dyslexia => "dyslexia",
            Mode::Blindness => "blindness",
            Mode::Autism => "autism",
            Mode::Adhd => "adhd",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dyslexia" => Ok(Mode::Dyslexia),
            "blindness" | "visual" => Ok(Mode::Blindness),
            "autism" => Ok(Mode::Autism),
            "adhd" => Ok(Mode::Adhd),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// Converted content, tagged by mode
///
/// This is the payload carried through the session bridge between the
/// upload step and the reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", content = "content", rename_all = "lowercase")]
pub enum ModeContent {
    /// Summary plus reading-level rewrite of extracted text
    Dyslexia(RewriteResult),
    /// Spoken-style narration of the whole document
    Blindness { narration: String },
    /// One generated lesson section
    Autism(Lesson),
    /// Narrative split into focus-sized chunks
    Adhd { chunks: Vec<String> },
}

impl ModeContent {
    pub fn mode(&self) -> Mode {
        match self {
            ModeContent::Dyslexia(_) => Mode::Dyslexia,
            ModeContent::Blindness { .. } => Mode::Blindness,
            ModeContent::Autism(_) => Mode::Autism,
            ModeContent::Adhd { .. } => Mode::Adhd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("adhd".parse::<Mode>().unwrap(), Mode::Adhd);
        assert_eq!("Dyslexia".parse::<Mode>().unwrap(), Mode::Dyslexia);
        assert_eq!("visual".parse::<Mode>().unwrap(), Mode::Blindness);
        assert!("braille".parse::<Mode>().is_err());
    }

    #[test]
    fn test_content_round_trip_tagging() {
        let content = ModeContent::Adhd {
            chunks: vec!["one".to_string(), "two".to_string()],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["mode"], "adhd");

        let back: ModeContent = serde_json::from_value(json).unwrap();
        assert_eq!(back.mode(), Mode::Adhd);
    }
}
