use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label of the option that marks a question as irrelevant to the project.
pub const NOT_APPLICABLE: &str = "Not applicable to this project";

/// Identifier of one of the seventeen Sustainable Development Goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SdgId(pub u8);

impl SdgId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 17;

    pub fn all() -> impl Iterator<Item = SdgId> {
        (Self::MIN..=Self::MAX).map(SdgId)
    }

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

impl fmt::Display for SdgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SDG {}", self.0)
    }
}

/// Thematic grouping ("five Ps") each SDG rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    People,
    Planet,
    Prosperity,
    Peace,
    Partnership,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::People,
            Self::Planet,
            Self::Prosperity,
            Self::Peace,
            Self::Partnership,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Planet => "Planet",
            Self::Prosperity => "Prosperity",
            Self::Peace => "Peace",
            Self::Partnership => "Partnership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Exemplary,
    Advanced,
    Basic,
    Minimal,
    #[serde(rename = "No Score")]
    NoScore,
}

impl PerformanceLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Exemplary,
            Self::Advanced,
            Self::Basic,
            Self::Minimal,
            Self::NoScore,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exemplary => "Exemplary",
            Self::Advanced => "Advanced",
            Self::Basic => "Basic",
            Self::Minimal => "Minimal",
            Self::NoScore => "No Score",
        }
    }
}

/// Static description of a goal and the category it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct SdgRecord {
    pub id: SdgId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// A user's answer: one label for single-choice questions, a set of labels otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(label) => label.is_empty(),
            Answer::Multiple(labels) => labels.is_empty(),
        }
    }

    /// True when the answer carries information beyond "nothing" or "not applicable".
    pub fn is_meaningful(&self) -> bool {
        match self {
            Answer::Single(label) => !label.is_empty() && label != NOT_APPLICABLE,
            Answer::Multiple(labels) => !labels.is_empty(),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Single(value.to_string())
    }
}

impl From<Vec<&str>> for Answer {
    fn from(value: Vec<&str>) -> Self {
        Answer::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

/// Answers keyed by question id, snapshotted by the caller before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, Answer>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace the answer for a question, returning the previous one.
    pub fn record(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.answers.insert(question_id.into(), answer)
    }

    pub fn with(mut self, question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.record(question_id, answer.into());
        self
    }

    pub fn clear(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers
            .iter()
            .map(|(question_id, answer)| (question_id.as_str(), answer))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn has_meaningful_answer(&self) -> bool {
        self.answers.values().any(Answer::is_meaningful)
    }
}

impl FromIterator<(String, Answer)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (String, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
