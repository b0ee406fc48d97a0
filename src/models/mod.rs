// Model exports
pub mod domain;

pub use domain::{
    Answer, AnswerCollection, AnswerValue, Criteria, Criterion, MatchNotification, Profile,
    Question, ScoringWeights, Weight,
};
