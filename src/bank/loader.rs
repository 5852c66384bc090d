//! Question bank loading and lookup

use crate::bank::question::{
    Flashcard, Question, Subject, SubjectFilter, ALL_SUBJECTS, OPTION_COUNT,
};
use crate::error::{QuizError, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw bank document as stored in the JSON data format
#[derive(Deserialize)]
struct BankDocument {
    subjects: HashMap<Subject, SubjectEntry>,
}

#[derive(Deserialize)]
struct SubjectEntry {
    #[serde(default)]
    questions: Vec<Question>,
    #[serde(default)]
    flashcards: Vec<Flashcard>,
}

/// Builtin dataset, parsed once and shared for the process lifetime
static BUILTIN_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    QuestionBank::from_json(include_str!("builtin.json"))
        .expect("builtin bank data is valid")
});

/// Immutable store of subject-tagged questions and flashcards
///
/// Lookup is read-only and referentially stable: the same filter always
/// yields the same questions in the same bank order.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_subject: AHashMap<Subject, Vec<usize>>,
    flashcards: AHashMap<Subject, Vec<Flashcard>>,
}

impl QuestionBank {
    /// Parse and validate a bank from its JSON data format
    ///
    /// Every question must carry exactly four options and a correct-option
    /// index inside `[0, 4)`; a document violating that is rejected whole.
    pub fn from_json(data: &str) -> Result<Self> {
        let mut doc: BankDocument =
            serde_json::from_str(data).map_err(|e| QuizError::BankFormat(e.to_string()))?;

        let mut questions = Vec::new();
        let mut by_subject: AHashMap<Subject, Vec<usize>> = AHashMap::new();
        let mut flashcards: AHashMap<Subject, Vec<Flashcard>> = AHashMap::new();

        // Iterate in fixed subject order so bank order is stable across loads
        for subject in ALL_SUBJECTS {
            let Some(entry) = doc.subjects.remove(&subject) else {
                continue;
            };

            let indices = by_subject.entry(subject).or_default();
            for mut question in entry.questions {
                if question.answer >= OPTION_COUNT {
                    return Err(QuizError::BankFormat(format!(
                        "correct option index {} out of range for \"{}\"",
                        question.answer, question.prompt
                    )));
                }
                question.subject = subject;
                indices.push(questions.len());
                questions.push(question);
            }

            flashcards.insert(subject, entry.flashcards);
        }

        Ok(Self {
            questions,
            by_subject,
            flashcards,
        })
    }

    /// The builtin study bank embedded in the crate
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN_BANK
    }

    /// Get all questions matching a subject filter, in bank order
    pub fn questions(&self, filter: SubjectFilter) -> Vec<&Question> {
        match filter {
            SubjectFilter::All => self.questions.iter().collect(),
            SubjectFilter::Only(subject) => self
                .by_subject
                .get(&subject)
                .map(|indices| indices.iter().map(|&i| &self.questions[i]).collect())
                .unwrap_or_default(),
        }
    }

    /// Flashcards for one subject, in bank order
    pub fn flashcards(&self, subject: Subject) -> &[Flashcard] {
        self.flashcards
            .get(&subject)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of questions across all subjects
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_subjects() {
        let bank = QuestionBank::builtin();
        for subject in ALL_SUBJECTS {
            assert!(
                !bank.questions(SubjectFilter::Only(subject)).is_empty(),
                "no questions for {}",
                subject
            );
            assert!(
                !bank.flashcards(subject).is_empty(),
                "no flashcards for {}",
                subject
            );
        }
    }

    #[test]
    fn test_builtin_answers_in_range() {
        for question in QuestionBank::builtin().questions(SubjectFilter::All) {
            assert!(question.answer < OPTION_COUNT);
        }
    }

    #[test]
    fn test_filter_all_matches_total() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.questions(SubjectFilter::All).len(), bank.len());
    }

    #[test]
    fn test_subject_filter_tags_match() {
        let bank = QuestionBank::builtin();
        for question in bank.questions(SubjectFilter::Only(Subject::Networks)) {
            assert_eq!(question.subject, Subject::Networks);
        }
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let data = r#"{
            "subjects": {
                "java": {
                    "questions": [
                        { "prompt": "p", "options": ["a", "b", "c", "d"], "answer": 4 }
                    ]
                }
            }
        }"#;
        let err = QuestionBank::from_json(data).unwrap_err();
        assert!(matches!(err, QuizError::BankFormat(_)));
    }

    #[test]
    fn test_rejects_malformed_document() {
        let err = QuestionBank::from_json("{ not json").unwrap_err();
        assert!(matches!(err, QuizError::BankFormat(_)));
    }

    #[test]
    fn test_missing_subject_yields_empty() {
        let data = r#"{ "subjects": { "ai": { "questions": [] } } }"#;
        let bank = QuestionBank::from_json(data).unwrap();
        assert!(bank.questions(SubjectFilter::Only(Subject::Java)).is_empty());
        assert!(bank.flashcards(Subject::Java).is_empty());
    }
}
