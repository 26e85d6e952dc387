//! Riddle value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A riddle and its expected answer
///
/// Answers are matched exactly (case and punctuation included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RiddleFields")]
pub struct Riddle {
    riddle: String,
    answer: String,
}

/// Unvalidated wire shape of a [`Riddle`]
#[derive(Deserialize)]
struct RiddleFields {
    riddle: String,
    answer: String,
}

impl TryFrom<RiddleFields> for Riddle {
    type Error = DomainError;

    fn try_from(fields: RiddleFields) -> Result<Self, Self::Error> {
        Self::new(fields.riddle, fields.answer)
    }
}

impl Riddle {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either the question or the answer
    /// is blank.
    pub fn new(riddle: impl Into<String>, answer: impl Into<String>) -> Result<Self, DomainError> {
        let riddle = riddle.into();
        let answer = answer.into();
        if riddle.trim().is_empty() {
            return Err(DomainError::validation("Riddle text cannot be empty"));
        }
        if answer.trim().is_empty() {
            return Err(DomainError::validation("Riddle answer cannot be empty"));
        }
        Ok(Self { riddle, answer })
    }

    pub fn riddle(&self) -> &str {
        &self.riddle
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_answered_by(&self, attempt: &str) -> bool {
        self.answer == attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_answer_only() {
        let riddle = Riddle::new(
            "What word becomes shorter when you add two letters to it?",
            "short",
        )
        .unwrap();
        assert!(riddle.is_answered_by("short"));
        assert!(!riddle.is_answered_by("Short"));
        assert!(!riddle.is_answered_by("e"));
    }

    #[test]
    fn rejects_blank_parts() {
        assert!(Riddle::new("", "short").is_err());
        assert!(Riddle::new("What?", "  ").is_err());
    }

    #[test]
    fn serializes_with_riddle_and_answer_keys() {
        let riddle = Riddle::new("How far can a fox run into a grove?", "Halfway").unwrap();
        let json = serde_json::to_value(&riddle).unwrap();
        assert_eq!(json["riddle"], "How far can a fox run into a grove?");
        assert_eq!(json["answer"], "Halfway");
    }

    #[test]
    fn deserializing_blank_parts_is_rejected() {
        let blank_answer = r#"{"riddle": "What has keys but no locks?", "answer": " "}"#;
        let blank_riddle = r#"{"riddle": "", "answer": "A piano"}"#;
        assert!(serde_json::from_str::<Riddle>(blank_answer).is_err());
        assert!(serde_json::from_str::<Riddle>(blank_riddle).is_err());

        let riddle: Riddle =
            serde_json::from_str(r#"{"riddle": "What has keys but no locks?", "answer": "A piano"}"#)
                .unwrap();
        assert!(riddle.is_answered_by("A piano"));
    }
}
