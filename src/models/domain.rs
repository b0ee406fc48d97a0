use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity of a question in the fixed question set
///
/// Two answers are comparable only when they reference the same question
/// identity (id and text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Value recorded for an answer, compared by equality only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Int(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// One recorded answer: a question identity plus a value
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: Question,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question: Question, value: impl Into<AnswerValue>) -> Self {
        Self {
            question,
            value: value.into(),
        }
    }

    /// Equality-based match test
    ///
    /// False when the other answer references a different question identity.
    pub fn matches(&self, other: &Answer) -> bool {
        self.question == other.question && self.value == other.value
    }
}

/// Importance of a criterion
///
/// `MustMatch` gates the overall verdict, `DontCare` never disqualifies and
/// never scores. The tiers in between contribute their configured value to
/// the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Weight {
    MustMatch,
    VeryImportant,
    Important,
    WouldPrefer,
    DontCare,
}

/// Score contribution per weighted tier
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub very_important: u32,
    pub important: u32,
    pub would_prefer: u32,
}

impl ScoringWeights {
    /// Contribution of a weight tier to the match score
    ///
    /// MustMatch and DontCare only participate in the gating and any-match
    /// rules; they never contribute to the sum.
    pub fn value_of(&self, weight: Weight) -> u32 {
        match weight {
            Weight::MustMatch | Weight::DontCare => 0,
            Weight::VeryImportant => self.very_important,
            Weight::Important => self.important,
            Weight::WouldPrefer => self.would_prefer,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            very_important: 5000,
            important: 1000,
            would_prefer: 100,
        }
    }
}

/// One desired answer plus its importance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub answer: Answer,
    pub weight: Weight,
}

impl Criterion {
    pub fn new(answer: Answer, weight: Weight) -> Self {
        Self { answer, weight }
    }

    /// Match test against a profile's answer for this criterion's question
    ///
    /// DontCare criteria match even when the profile never answered the
    /// question; everything else requires a present, equal answer.
    pub fn matches(&self, candidate: Option<&Answer>) -> bool {
        self.weight == Weight::DontCare
            || candidate.map_or(false, |answer| answer.matches(&self.answer))
    }
}

/// The full set of criteria for one search
///
/// Ordered for iteration only; order never affects the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria {
    criteria: Vec<Criterion>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

impl IntoIterator for Criteria {
    type Item = Criterion;
    type IntoIter = std::vec::IntoIter<Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.into_iter()
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Criterion>> for Criteria {
    fn from(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }
}

/// Per-profile answer store, keyed by question identity
///
/// One entry per question; adding a second answer for the same question
/// replaces the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerCollection {
    answers: HashMap<u32, Answer>,
}

impl AnswerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, answer: Answer) {
        self.answers.insert(answer.question.id, answer);
    }

    /// Criterion-directed lookup: the profile's answer to the question the
    /// criterion targets, if any
    pub fn answer_matching(&self, criterion: &Criterion) -> Option<&Answer> {
        self.answers.get(&criterion.answer.question.id)
    }

    pub fn get(&self, question: &Question) -> Option<&Answer> {
        self.answers.get(&question.id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<Answer> for AnswerCollection {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut collection = Self::new();
        for answer in iter {
            collection.add(answer);
        }
        collection
    }
}

/// One candidate's recorded answers
///
/// The id is assigned by the caller and must be unique within a matcher's
/// population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub answers: AnswerCollection,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            answers: AnswerCollection::new(),
        }
    }

    pub fn add(&mut self, answer: Answer) {
        self.answers.add(answer);
    }

    /// Evaluate this profile against a criteria set
    pub fn match_set(&self, criteria: &Criteria, weights: &ScoringWeights) -> crate::core::MatchSet {
        crate::core::MatchSet::new(&self.id, &self.answers, criteria, weights)
    }
}

/// Published record of one found match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchNotification {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "profileName")]
    pub profile_name: String,
    pub score: u32,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
}
