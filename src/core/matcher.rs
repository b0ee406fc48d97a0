use crate::core::{MatchListener, MatchSet, WorkerPool};
use crate::models::{Criteria, Profile, ScoringWeights};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Matcher configuration: worker-pool size plus the weight table
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    pub pool_size: usize,
    pub weights: ScoringWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            pool_size: WorkerPool::DEFAULT_SIZE,
            weights: ScoringWeights::default(),
        }
    }
}

/// Handle to an in-flight matching run
///
/// Dispatch returns as soon as every evaluation task is scheduled; awaiting
/// the handle is how a caller explicitly observes pool drain (tests do this
/// for determinism). Dropping the handle detaches the tasks, which still run
/// to completion.
#[derive(Debug)]
pub struct MatchRun {
    handles: Vec<JoinHandle<()>>,
}

impl MatchRun {
    /// Number of evaluation tasks scheduled for this run
    pub fn task_count(&self) -> usize {
        self.handles.len()
    }

    /// Wait until every task of this run has finished
    ///
    /// A task that panicked (a listener, typically) is logged here and never
    /// re-raised; sibling tasks are unaffected.
    pub async fn wait(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    tracing::error!("matching task panicked: {e}");
                } else {
                    tracing::debug!("matching task cancelled: {e}");
                }
            }
        }
    }
}

/// Main matching orchestrator - owns the profile population and dispatches
/// concurrent evaluation
///
/// One evaluation task per profile per run goes onto the owned worker pool;
/// every profile whose MatchSet verdict is positive is reported to the
/// listener exactly once. Delivery order across profiles is unspecified.
///
/// The population is read-only during a run: callers must serialize `add`
/// against `find_matching_profiles`.
#[derive(Debug, Clone)]
pub struct ProfileMatcher {
    profiles: HashMap<String, Arc<Profile>>,
    weights: ScoringWeights,
    pool: WorkerPool,
}

impl ProfileMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            profiles: HashMap::new(),
            weights: config.weights,
            pool: WorkerPool::new(config.pool_size),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// Insert a profile at its id
    ///
    /// Id uniqueness is the caller's responsibility; a second add with the
    /// same id silently overwrites the first.
    pub fn add(&mut self, profile: Profile) {
        self.profiles.insert(profile.id.clone(), Arc::new(profile));
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Shut down the owned worker pool
    ///
    /// In-flight evaluation finishes; later dispatches schedule tasks that
    /// are dropped without running.
    pub fn shutdown(&self) {
        self.pool.shutdown();
    }

    /// One MatchSet per profile currently in the population
    pub fn collect_match_sets(&self, criteria: &Criteria) -> Vec<MatchSet> {
        self.profiles
            .values()
            .map(|profile| profile.match_set(criteria, &self.weights))
            .collect()
    }

    /// Evaluate the whole population against a criteria set
    ///
    /// Schedules one unit of work per profile on the worker pool and returns
    /// without blocking on evaluation. The listener is invoked from worker
    /// tasks, possibly concurrently, once per positive match.
    pub fn find_matching_profiles(
        &self,
        criteria: &Criteria,
        listener: Arc<dyn MatchListener>,
    ) -> MatchRun {
        let match_sets = self.collect_match_sets(criteria);

        tracing::debug!(
            profiles = self.profiles.len(),
            criteria = criteria.len(),
            pool_size = self.pool.size(),
            "dispatching matching run"
        );

        let mut handles = Vec::with_capacity(match_sets.len());
        for match_set in match_sets {
            // The population is read-only during the run, so resolving the
            // profile at dispatch time sees the same map the tasks would.
            let Some(profile) = self.profiles.get(match_set.profile_id()) else {
                continue;
            };
            let profile = Arc::clone(profile);
            let listener = Arc::clone(&listener);

            handles.push(
                self.pool
                    .spawn(move || process(listener.as_ref(), &profile, &match_set)),
            );
        }

        MatchRun { handles }
    }
}

impl Default for ProfileMatcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// One unit of matching work: report the profile iff its verdict is positive
fn process(listener: &dyn MatchListener, profile: &Profile, match_set: &MatchSet) {
    if match_set.matches() {
        listener.found_match(profile, match_set);
    }
}
