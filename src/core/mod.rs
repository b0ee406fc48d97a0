// Core algorithm exports
pub mod listener;
pub mod matcher;
pub mod pool;
pub mod scoring;

pub use listener::{ChannelListener, LoggingListener, MatchListener, RecordingListener};
pub use matcher::{MatchRun, MatcherConfig, ProfileMatcher};
pub use pool::WorkerPool;
pub use scoring::{calculate_score, MatchSet};
