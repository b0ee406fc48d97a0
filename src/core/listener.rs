use crate::core::MatchSet;
use crate::models::{MatchNotification, Profile};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Capability invoked once per profile whose match verdict is positive
///
/// Workers call `found_match` concurrently, so implementations must be safe
/// to invoke from multiple tasks at once. Absence of a match is silent; no
/// callback is ever made for a non-matching profile.
pub trait MatchListener: Send + Sync {
    fn found_match(&self, profile: &Profile, match_set: &MatchSet);
}

/// Listener that emits a structured log event per match
#[derive(Debug, Default)]
pub struct LoggingListener;

impl MatchListener for LoggingListener {
    fn found_match(&self, profile: &Profile, match_set: &MatchSet) {
        tracing::info!(
            profile_id = %profile.id,
            profile_name = %profile.name,
            score = match_set.score(),
            "profile matched"
        );
    }
}

/// Listener that records matches in memory
///
/// Intended for tests and synchronous callers that inspect results after a
/// run has drained.
#[derive(Debug, Default)]
pub struct RecordingListener {
    matches: Mutex<Vec<(String, u32)>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the profiles reported so far, in delivery order
    pub fn matched_ids(&self) -> Vec<String> {
        self.lock().iter().map(|(id, _)| id.clone()).collect()
    }

    /// (profile id, score) pairs reported so far
    pub fn matches(&self) -> Vec<(String, u32)> {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, u32)>> {
        // A panicking listener task cannot leave the record half-written,
        // so a poisoned lock still holds consistent data.
        self.matches.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MatchListener for RecordingListener {
    fn found_match(&self, profile: &Profile, match_set: &MatchSet) {
        self.lock().push((profile.id.clone(), match_set.score()));
    }
}

/// Listener that publishes each match to an async channel
///
/// For deployments where match consumers live on the async side: the
/// receiver half is handed to whoever processes notifications, while the
/// matcher's workers stay oblivious to the consumer's pace (the channel is
/// unbounded, so `found_match` never blocks a worker).
#[derive(Debug)]
pub struct ChannelListener {
    tx: mpsc::UnboundedSender<MatchNotification>,
}

impl ChannelListener {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MatchNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl MatchListener for ChannelListener {
    fn found_match(&self, profile: &Profile, match_set: &MatchSet) {
        let notification = MatchNotification {
            profile_id: profile.id.clone(),
            profile_name: profile.name.clone(),
            score: match_set.score(),
            matched_at: chrono::Utc::now(),
        };

        if self.tx.send(notification).is_err() {
            tracing::warn!(
                profile_id = %profile.id,
                "match notification dropped, receiver gone"
            );
        }
    }
}
