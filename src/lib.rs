//! Prospect Algo - profile matching engine for the Prospect talent search
//!
//! This library evaluates a population of candidate profiles against a
//! weighted criteria set and reports matches asynchronously through a
//! listener capability. Evaluation fans out across a bounded worker pool,
//! one task per profile.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use config::{Settings, SettingsError};
pub use core::{
    ChannelListener, LoggingListener, MatchListener, MatchRun, MatchSet, MatcherConfig,
    ProfileMatcher, RecordingListener, WorkerPool,
};
pub use models::{
    Answer, AnswerCollection, AnswerValue, Criteria, Criterion, MatchNotification, Profile,
    Question, ScoringWeights, Weight,
};
