//! Quiz widgets (autism mode)
//!
//! Local, ungated, answer-once widgets. No server round-trip: the lesson
//! already carries the correct answers, and a widget that has been
//! answered rejects further attempts.

use crate::content::lesson::{MultipleChoiceQuestion, ShortAnswerQuestion, TrueFalseQuestion};

/// Answer state shared by the graded widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered { correct: bool },
}

/// Error for a second answer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question already answered")]
pub struct AlreadyAnswered;

/// True/false widget
#[derive(Debug)]
pub struct TrueFalseWidget {
    question: TrueFalseQuestion,
    state: AnswerState,
}

impl TrueFalseWidget {
    pub fn new(question: TrueFalseQuestion) -> Self {
        Self {
            question,
            state: AnswerState::Unanswered,
        }
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn question(&self) -> &TrueFalseQuestion {
        &self.question
    }

    /// Submit a choice; grading happens locally and exactly once.
    pub fn submit(&mut self, choice: bool) -> Result<bool, AlreadyAnswered> {
        if self.state != AnswerState::Unanswered {
            return Err(AlreadyAnswered);
        }
        let correct = choice == self.question.answer;
        self.state = AnswerState::Answered { correct };
        Ok(correct)
    }
}

/// Multiple-choice widget
#[derive(Debug)]
pub struct McqWidget {
    question: MultipleChoiceQuestion,
    state: AnswerState,
}

impl McqWidget {
    pub fn new(question: MultipleChoiceQuestion) -> Self {
        Self {
            question,
            state: AnswerState::Unanswered,
        }
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn question(&self) -> &MultipleChoiceQuestion {
        &self.question
    }

    pub fn submit(&mut self, option: &str) -> Result<bool, AlreadyAnswered> {
        if self.state != AnswerState::Unanswered {
            return Err(AlreadyAnswered);
        }
        let correct = option == self.question.answer;
        self.state = AnswerState::Answered { correct };
        Ok(correct)
    }
}

/// Short-answer widget: reveal-once, no grading
#[derive(Debug)]
pub struct ShortAnswerWidget {
    question: ShortAnswerQuestion,
    response: Option<String>,
    revealed: bool,
}

impl ShortAnswerWidget {
    pub fn new(question: ShortAnswerQuestion) -> Self {
        Self {
            question,
            response: None,
            revealed: false,
        }
    }

    pub fn question(&self) -> &ShortAnswerQuestion {
        &self.question
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Record the learner's answer and reveal the ideal one.
    pub fn reveal(&mut self, response: &str) -> Result<&str, AlreadyAnswered> {
        if self.revealed {
            return Err(AlreadyAnswered);
        }
        self.response = Some(response.to_string());
        self.revealed = true;
        Ok(&self.question.ideal_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf() -> TrueFalseQuestion {
        TrueFalseQuestion {
            q: "Plants eat soil.".to_string(),
            answer: false,
            explain: "They make food from light.".to_string(),
        }
    }

    fn mcq() -> MultipleChoiceQuestion {
        MultipleChoiceQuestion {
            q: "Where does photosynthesis happen?".to_string(),
            options: vec!["Roots".to_string(), "Leaves".to_string()],
            answer: "Leaves".to_string(),
            explain: String::new(),
        }
    }

    #[test]
    fn test_true_false_answer_once() {
        let mut w = TrueFalseWidget::new(tf());
        assert_eq!(w.state(), AnswerState::Unanswered);

        assert_eq!(w.submit(false), Ok(true));
        assert_eq!(w.state(), AnswerState::Answered { correct: true });

        // Second attempt is rejected, state unchanged
        assert_eq!(w.submit(true), Err(AlreadyAnswered));
        assert_eq!(w.state(), AnswerState::Answered { correct: true });
    }

    #[test]
    fn test_true_false_incorrect() {
        let mut w = TrueFalseWidget::new(tf());
        assert_eq!(w.submit(true), Ok(false));
        assert_eq!(w.state(), AnswerState::Answered { correct: false });
    }

    #[test]
    fn test_mcq_answer_once() {
        let mut w = McqWidget::new(mcq());
        assert_eq!(w.submit("Leaves"), Ok(true));
        assert_eq!(w.submit("Roots"), Err(AlreadyAnswered));
    }

    #[test]
    fn test_short_answer_reveal_once() {
        let mut w = ShortAnswerWidget::new(ShortAnswerQuestion {
            q: "What do plants need?".to_string(),
            ideal_answer: "Light, water, CO2.".to_string(),
            rubric: vec![],
        });

        assert!(!w.is_revealed());
        let ideal = w.reveal("light and water").unwrap().to_string();
        assert_eq!(ideal, "Light, water, CO2.");
        assert_eq!(w.response(), Some("light and water"));
        assert_eq!(w.reveal("again"), Err(AlreadyAnswered));
    }
}
