// Unit tests for Prospect Algo

use prospect_algo::core::calculate_score;
use prospect_algo::{
    Answer, AnswerCollection, Criteria, Criterion, MatchSet, Profile, Question, ScoringWeights,
    Weight,
};

fn relocation() -> Question {
    Question::new(1, "Relocation package?")
}

fn remote() -> Question {
    Question::new(2, "Remote work allowed?")
}

fn on_call() -> Question {
    Question::new(3, "On-call rotation?")
}

fn profile_with(answers: Vec<Answer>) -> Profile {
    let mut profile = Profile::new("p1", "Pat");
    for answer in answers {
        profile.add(answer);
    }
    profile
}

#[test]
fn test_must_match_scenario_matches_with_zero_score() {
    // Profile has {Q1=true}; criteria = [(Q1=true, MustMatch)]
    let profile = profile_with(vec![Answer::new(relocation(), true)]);
    let criteria: Criteria =
        vec![Criterion::new(Answer::new(relocation(), true), Weight::MustMatch)].into();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(match_set.matches());
    assert_eq!(match_set.score(), 0);
}

#[test]
fn test_failed_must_match_overrides_other_matching_criteria() {
    // Profile has {Q1=false}; Q2 matches independently but the failed
    // mandatory criterion disqualifies the profile.
    let profile = profile_with(vec![
        Answer::new(relocation(), false),
        Answer::new(remote(), true),
    ]);
    let criteria: Criteria = vec![
        Criterion::new(Answer::new(relocation(), true), Weight::MustMatch),
        Criterion::new(Answer::new(remote(), true), Weight::Important),
    ]
    .into();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(!match_set.matches());
    assert_eq!(match_set.score(), 1000);
}

#[test]
fn test_dont_care_matches_missing_answer() {
    // No answer for Q3 at all
    let profile = profile_with(vec![]);
    let criteria: Criteria =
        vec![Criterion::new(Answer::new(on_call(), true), Weight::DontCare)].into();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(match_set.matches());
    assert_eq!(match_set.score(), 0);
}

#[test]
fn test_empty_criteria_is_vacuously_non_matching() {
    let profile = profile_with(vec![Answer::new(relocation(), true)]);
    let criteria = Criteria::new();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(!match_set.matches());
}

#[test]
fn test_score_is_independent_of_verdict() {
    let answers: AnswerCollection = vec![
        Answer::new(relocation(), false),
        Answer::new(remote(), true),
        Answer::new(on_call(), false),
    ]
    .into_iter()
    .collect();

    let criteria: Criteria = vec![
        Criterion::new(Answer::new(relocation(), true), Weight::MustMatch),
        Criterion::new(Answer::new(remote(), true), Weight::VeryImportant),
        Criterion::new(Answer::new(on_call(), false), Weight::WouldPrefer),
    ]
    .into();
    let weights = ScoringWeights::default();

    let match_set = MatchSet::new("p1", &answers, &criteria, &weights);

    assert!(!match_set.matches());
    assert_eq!(match_set.score(), 5100);
    assert_eq!(calculate_score(&answers, &criteria, &weights), 5100);
}

#[test]
fn test_unanswered_weighted_criterion_is_a_plain_non_match() {
    let profile = profile_with(vec![Answer::new(relocation(), true)]);
    let criteria: Criteria = vec![
        Criterion::new(Answer::new(relocation(), true), Weight::WouldPrefer),
        Criterion::new(Answer::new(remote(), true), Weight::Important),
    ]
    .into();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(match_set.matches());
    assert_eq!(match_set.score(), 100);
}

#[test]
fn test_text_and_numeric_answers_compare_by_equality() {
    let seniority = Question::new(10, "Seniority level?");
    let years = Question::new(11, "Years of experience?");

    let profile = profile_with(vec![
        Answer::new(seniority.clone(), "staff"),
        Answer::new(years.clone(), 7i64),
    ]);

    let criteria: Criteria = vec![
        Criterion::new(Answer::new(seniority, "staff"), Weight::Important),
        Criterion::new(Answer::new(years, 8i64), Weight::Important),
    ]
    .into();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert!(match_set.matches());
    assert_eq!(match_set.score(), 1000);
}

#[test]
fn test_repeated_evaluation_yields_identical_results() {
    let profile = profile_with(vec![
        Answer::new(relocation(), true),
        Answer::new(remote(), false),
    ]);
    let criteria: Criteria = vec![
        Criterion::new(Answer::new(relocation(), true), Weight::Important),
        Criterion::new(Answer::new(remote(), true), Weight::MustMatch),
    ]
    .into();
    let weights = ScoringWeights::default();

    let first = profile.match_set(&criteria, &weights);
    let second = profile.match_set(&criteria, &weights);

    assert_eq!(first.matches(), second.matches());
    assert_eq!(first.score(), second.score());
}

#[test]
fn test_profile_and_criteria_roundtrip_from_collaborator_json() {
    // Profiles and criteria arrive from collaborators as data; the engine
    // performs no loading itself.
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "id": "cand-42",
        "name": "Sam",
        "answers": {
            "1": {"question": {"id": 1, "text": "Relocation package?"}, "value": true}
        }
    }))
    .unwrap();

    let criteria: Criteria = serde_json::from_value(serde_json::json!([
        {
            "answer": {"question": {"id": 1, "text": "Relocation package?"}, "value": true},
            "weight": "mustMatch"
        }
    ]))
    .unwrap();

    let match_set = profile.match_set(&criteria, &ScoringWeights::default());

    assert_eq!(match_set.profile_id(), "cand-42");
    assert!(match_set.matches());
}
