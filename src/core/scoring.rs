use crate::models::{AnswerCollection, Criteria, ScoringWeights, Weight};

/// Verdict and score for one profile evaluated against one criteria set
///
/// Both outputs are computed eagerly at construction and stored as immutable
/// fields, so a MatchSet can be read from any number of workers without
/// recomputation. A MatchSet is built fresh per matching run; it is never
/// reused across runs with different criteria.
#[derive(Debug, Clone)]
pub struct MatchSet {
    profile_id: String,
    score: u32,
    matched: bool,
}

impl MatchSet {
    /// Evaluate one (answers, criteria) pair
    ///
    /// Evaluation is three independent folds over the same criteria:
    ///
    /// 1. Gate: any failed MustMatch criterion forces a non-match verdict.
    /// 2. Score: sum of weighted-tier values over succeeding criteria,
    ///    computed whether or not the gate failed.
    /// 3. Any-match: at least one criterion (DontCare always counts)
    ///    succeeded.
    ///
    /// An empty criteria set never matches; an absent answer is an ordinary
    /// non-match, not an error.
    pub fn new(
        profile_id: impl Into<String>,
        answers: &AnswerCollection,
        criteria: &Criteria,
        weights: &ScoringWeights,
    ) -> Self {
        let score = calculate_score(answers, criteria, weights);
        let matched =
            !fails_any_must_match_criterion(answers, criteria) && any_matches(answers, criteria);

        Self {
            profile_id: profile_id.into(),
            score,
            matched,
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Sum of weighted-tier contributions of the criteria that matched
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True iff no MustMatch criterion failed and at least one criterion
    /// matched
    pub fn matches(&self) -> bool {
        self.matched
    }
}

/// Calculate the match score for one (answers, criteria) pair
///
/// Sums the configured value of every criterion whose match test succeeds.
/// MustMatch and DontCare contribute 0; the score is independent of the
/// match verdict.
pub fn calculate_score(
    answers: &AnswerCollection,
    criteria: &Criteria,
    weights: &ScoringWeights,
) -> u32 {
    criteria
        .iter()
        .filter(|criterion| criterion.matches(answers.answer_matching(criterion)))
        .map(|criterion| weights.value_of(criterion.weight))
        .sum()
}

/// True when at least one MustMatch criterion fails its resolved answer
fn fails_any_must_match_criterion(answers: &AnswerCollection, criteria: &Criteria) -> bool {
    criteria.iter().any(|criterion| {
        criterion.weight == Weight::MustMatch
            && !criterion.matches(answers.answer_matching(criterion))
    })
}

/// True when at least one criterion, of any weight, matches
fn any_matches(answers: &AnswerCollection, criteria: &Criteria) -> bool {
    criteria
        .iter()
        .any(|criterion| criterion.matches(answers.answer_matching(criterion)))
}
