//! Question and flashcard data structures

use serde::Deserialize;
use std::fmt;

/// Number of answer options on every question
pub const OPTION_COUNT: usize = 4;

/// Study subject tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Java,
    Ai,
    Se,
    Stats,
    Networks,
}

/// All subjects in display order
pub const ALL_SUBJECTS: [Subject; 5] = [
    Subject::Java,
    Subject::Ai,
    Subject::Se,
    Subject::Stats,
    Subject::Networks,
];

impl Subject {
    /// Stable string id used in the bank data format
    pub fn id(&self) -> &'static str {
        match self {
            Subject::Java => "java",
            Subject::Ai => "ai",
            Subject::Se => "se",
            Subject::Stats => "stats",
            Subject::Networks => "networks",
        }
    }

    /// Human-readable subject name
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Java => "Java Programming",
            Subject::Ai => "Artificial Intelligence",
            Subject::Se => "Software Engineering",
            Subject::Stats => "Statistics",
            Subject::Networks => "Computer Networks",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Subject filter for session setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectFilter {
    /// All subjects mixed together
    All,
    /// A single subject only
    Only(Subject),
}

impl fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectFilter::All => f.write_str("all"),
            SubjectFilter::Only(subject) => f.write_str(subject.id()),
        }
    }
}

/// A multiple-choice question with exactly four options
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// Subject tag, filled in by the bank loader
    #[serde(skip, default = "default_subject")]
    pub subject: Subject,
    /// Question prompt text
    pub prompt: String,
    /// The four answer options, in display order
    pub options: [String; OPTION_COUNT],
    /// Index of the correct option, in [0, 4)
    pub answer: usize,
}

fn default_subject() -> Subject {
    Subject::Java
}

/// A two-sided flashcard
#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_ids_are_distinct() {
        let mut ids: Vec<&str> = ALL_SUBJECTS.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALL_SUBJECTS.len());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(SubjectFilter::All.to_string(), "all");
        assert_eq!(SubjectFilter::Only(Subject::Networks).to_string(), "networks");
    }

    #[test]
    fn test_subject_deserializes_from_id() {
        let subject: Subject = serde_json::from_str("\"stats\"").unwrap();
        assert_eq!(subject, Subject::Stats);
    }
}
