//! Autism-mode lesson structure
//!
//! The lesson generator asks the document provider for one structured
//! section at a time. The wire casing ("Summary", "Draw-it", "Review
//! Plan") is part of the client contract and kept verbatim.

use serde::{Deserialize, Serialize};

use super::decode;

/// One generated lesson section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(rename = "Summary", default)]
    pub summary: Vec<String>,

    #[serde(rename = "Vocabulary", default)]
    pub vocabulary: Vec<VocabItem>,

    #[serde(rename = "Questions")]
    pub questions: QuestionSet,

    #[serde(rename = "Draw-it")]
    pub draw_it: DrawIt,

    #[serde(rename = "Review Plan", default)]
    pub review_plan: Vec<ReviewBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabItem {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub true_false: TrueFalseQuestion,
    pub mcq: MultipleChoiceQuestion,
    pub short_answer: ShortAnswerQuestion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrueFalseQuestion {
    pub q: String,
    pub answer: bool,
    #[serde(default)]
    pub explain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    pub q: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortAnswerQuestion {
    pub q: String,
    pub ideal_answer: String,
    #[serde(default)]
    pub rubric: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawIt {
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewBlock {
    pub when: String,
    pub minutes: u32,
    #[serde(default)]
    pub plan: Vec<String>,
}

impl Lesson {
    /// Decode a lesson from raw provider text.
    pub fn from_provider_text(raw: &str) -> Result<Self, serde_json::Error> {
        decode::from_provider_text(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_lesson_json() -> &'static str {
        r#"{
            "Summary": ["Plants make food from light.", "This is called photosynthesis."],
            "Vocabulary": [
                {"term": "chlorophyll", "definition": "Green pigment in leaves.", "example": "Leaves look green because of chlorophyll."}
            ],
            "Questions": {
                "trueFalse": {"q": "Plants eat soil.", "answer": false, "explain": "They make food from light."},
                "mcq": {"q": "Where does photosynthesis happen?", "options": ["Roots", "Leaves", "Flowers"], "answer": "Leaves", "explain": "Leaves hold chlorophyll."},
                "shortAnswer": {"q": "What do plants need to make food?", "idealAnswer": "Light, water, and carbon dioxide.", "rubric": ["mentions light", "mentions water"]}
            },
            "Draw-it": {"title": "A leaf in sunlight", "labels": ["sun", "leaf", "water"], "caption": "Light goes in, sugar comes out."},
            "Review Plan": [
                {"when": "tonight", "minutes": 10, "plan": ["Re-read the summary", "Say each vocabulary word"]}
            ]
        }"#
    }

    #[test]
    fn test_decode_lesson() {
        let lesson = Lesson::from_provider_text(sample_lesson_json()).unwrap();
        assert_eq!(lesson.summary.len(), 2);
        assert_eq!(lesson.vocabulary[0].term, "chlorophyll");
        assert!(!lesson.questions.true_false.answer);
        assert_eq!(lesson.questions.mcq.options.len(), 3);
        assert_eq!(lesson.draw_it.labels.len(), 3);
        assert_eq!(lesson.review_plan[0].minutes, 10);
    }

    #[test]
    fn test_decode_fenced_lesson() {
        let raw = format!("```json\n{}\n```", sample_lesson_json());
        let lesson = Lesson::from_provider_text(&raw).unwrap();
        assert_eq!(lesson.questions.short_answer.rubric.len(), 2);
    }

    #[test]
    fn test_round_trip_wire_casing() {
        let lesson = Lesson::from_provider_text(sample_lesson_json()).unwrap();
        let value = serde_json::to_value(&lesson).unwrap();
        assert!(value.get("Draw-it").is_some());
        assert!(value.get("Review Plan").is_some());
        assert!(value["Questions"].get("trueFalse").is_some());
        assert!(value["Questions"]["shortAnswer"].get("idealAnswer").is_some());
    }
}
