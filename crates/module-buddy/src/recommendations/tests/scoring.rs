use super::common::*;
use crate::recommendations::domain::{
    AssessmentPreference, Candidate, PreferenceDimension, PreferenceProfile,
};
use crate::recommendations::{PreferenceScorer, RecommendationError};

fn titles(ranked: &[crate::recommendations::ScoredCandidate]) -> Vec<&str> {
    ranked.iter().map(|entry| entry.title()).collect()
}

#[test]
fn available_day_alone_scores_one() {
    let profile = PreferenceProfile {
        available_days: days(["Monday"]),
        ..empty_profile()
    };
    let candidate = Candidate::new("A", "Core").with_days(["Monday"]);

    let ranked = PreferenceScorer::new()
        .score(vec![candidate], &profile)
        .expect("scores");

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 1);
    assert_eq!(ranked[0].matched, vec![PreferenceDimension::Day]);
}

#[test]
fn mixed_assessment_preference_accepts_group_modules() {
    let profile = PreferenceProfile {
        assessment_type: AssessmentPreference::parse("individual_and_group"),
        ..empty_profile()
    };
    let candidate = Candidate::new("A", "Core").with_assessment_type("group");

    let matched = PreferenceScorer::new().matched_dimensions(&candidate, &profile);

    assert!(matched.contains(&PreferenceDimension::AssessmentType));
}

#[test]
fn missing_project_work_attribute_never_matches() {
    let scorer = PreferenceScorer::new();
    let candidate = Candidate::new("A", "Core");

    for wanted in [true, false] {
        let profile = PreferenceProfile {
            wants_project_work: wanted,
            ..empty_profile()
        };
        let matched = scorer.matched_dimensions(&candidate, &profile);
        assert!(!matched.contains(&PreferenceDimension::ProjectWork));
    }
}

#[test]
fn declining_a_feature_matches_modules_without_it() {
    let profile = PreferenceProfile {
        wants_project_work: false,
        wants_oral_assessment: false,
        ..empty_profile()
    };
    let candidate = Candidate::new("A", "Core")
        .with_project_work(false)
        .with_oral_assessment(true);

    let matched = PreferenceScorer::new().matched_dimensions(&candidate, &profile);

    assert_eq!(matched, vec![PreferenceDimension::ProjectWork]);
}

#[test]
fn excluded_perfect_match_is_absent_from_output() {
    let mut profile = demanding_profile();
    let scorer = PreferenceScorer::new();
    let candidate = perfect_match("Enterprise Architecture");
    assert_eq!(scorer.matched_dimensions(&candidate, &profile).len(), 5);

    profile
        .excluded_candidates
        .insert("Enterprise Architecture".to_string());
    let ranked = scorer
        .score(vec![candidate, Candidate::new("Data Mining", "Core")], &profile)
        .expect("scores");

    assert_eq!(titles(&ranked), vec!["Data Mining"]);
}

#[test]
fn equal_scores_are_ordered_by_title() {
    let profile = demanding_profile();
    let beta = Candidate::new("Beta", "Core")
        .with_days(["Monday"])
        .with_project_work(true)
        .with_oral_assessment(true);
    let alpha = Candidate::new("Alpha", "Core")
        .with_lecturers(["Meier"])
        .with_assessment_type("individual")
        .with_oral_assessment(true);

    let ranked = PreferenceScorer::new()
        .score(vec![beta, alpha], &profile)
        .expect("scores");

    assert_eq!(ranked[0].score, 3);
    assert_eq!(ranked[1].score, 3);
    assert_eq!(titles(&ranked), vec!["Alpha", "Beta"]);
}

#[test]
fn higher_scores_precede_lower_scores() {
    let ranked = PreferenceScorer::new()
        .score(catalog(), &demanding_profile())
        .expect("scores");

    assert_eq!(ranked[0].title(), "Enterprise Architecture");
    assert_eq!(ranked[0].score, 5);
    for pair in ranked.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        assert!(
            left.score > right.score
                || (left.score == right.score && left.title() <= right.title()),
            "{} ({}) should not precede {} ({})",
            left.title(),
            left.score,
            right.title(),
            right.score
        );
    }
}

#[test]
fn scores_stay_within_range_and_match_dimension_count() {
    let ranked = PreferenceScorer::new()
        .score(catalog(), &demanding_profile())
        .expect("scores");

    for entry in &ranked {
        assert!(entry.score <= 5);
        assert_eq!(entry.score as usize, entry.matched.len());
    }
}

#[test]
fn empty_candidate_list_yields_empty_ranking() {
    let ranked = PreferenceScorer::new()
        .score(Vec::new(), &demanding_profile())
        .expect("empty input is valid");

    assert!(ranked.is_empty());
}

#[test]
fn empty_profile_scores_zero_and_orders_by_title() {
    let without_flags: Vec<Candidate> = catalog()
        .into_iter()
        .map(|mut candidate| {
            candidate.has_project_work = None;
            candidate.has_oral_assessment = None;
            candidate
        })
        .collect();

    let ranked = PreferenceScorer::new()
        .score(without_flags, &empty_profile())
        .expect("scores");

    assert!(ranked.iter().all(|entry| entry.score == 0));
    assert_eq!(
        titles(&ranked),
        vec![
            "Accounting Basics",
            "Business Process Management",
            "Data Mining",
            "Enterprise Architecture",
            "Master Thesis",
        ]
    );
}

#[test]
fn empty_profile_still_declines_project_and_oral_work() {
    let ranked = PreferenceScorer::new()
        .score(catalog(), &empty_profile())
        .expect("scores");

    assert_eq!(ranked[0].title(), "Data Mining");
    assert_eq!(ranked[0].score, 1);
    assert_eq!(ranked[0].matched, vec![PreferenceDimension::ProjectWork]);
    assert!(ranked[1..].iter().all(|entry| entry.score == 0));
}

#[test]
fn repeated_scoring_is_identical() {
    let scorer = PreferenceScorer::new();
    let profile = demanding_profile();

    let first = scorer.score(catalog(), &profile).expect("scores");
    let second = scorer.score(catalog(), &profile).expect("scores");

    assert_eq!(first, second);
}

#[test]
fn adding_a_matching_attribute_never_lowers_the_score() {
    let scorer = PreferenceScorer::new();
    let profile = demanding_profile();
    let base = Candidate::new("Data Mining", "Core");
    let baseline = scorer.matched_dimensions(&base, &profile).len();

    let enriched = [
        base.clone().with_days(["Thursday"]),
        base.clone().with_lecturers(["Meier"]),
        base.clone().with_assessment_type("individual"),
        base.clone().with_project_work(true),
        base.clone().with_oral_assessment(true),
    ];

    for candidate in enriched {
        let score = scorer.matched_dimensions(&candidate, &profile).len();
        assert_eq!(score, baseline + 1, "{candidate:?}");
    }
}

#[test]
fn duplicate_entries_keep_input_order() {
    let first = Candidate::new("Data Mining", "Core").with_project_work(false);
    let second = Candidate::new("Data Mining", "Seminar").with_project_work(false);

    let ranked = PreferenceScorer::new()
        .score(vec![first, second], &empty_profile())
        .expect("scores");

    assert_eq!(ranked[0].candidate.module_type, "Core");
    assert_eq!(ranked[1].candidate.module_type, "Seminar");
}

#[test]
fn blank_title_aborts_without_partial_results() {
    let candidates = vec![
        perfect_match("Enterprise Architecture"),
        Candidate::new("   ", "Core"),
    ];

    let error = PreferenceScorer::new()
        .score(candidates, &demanding_profile())
        .expect_err("blank title is a contract violation");

    match error {
        RecommendationError::InvalidInput { field, .. } => {
            assert_eq!(field, "candidates[1].title")
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn modules_without_metadata_score_zero() {
    let candidate = Candidate::new("Accounting Basics", "Elective");

    let ranked = PreferenceScorer::new()
        .score(vec![candidate], &demanding_profile())
        .expect("absence is not failure");

    assert_eq!(ranked[0].score, 0);
    assert!(ranked[0].matched.is_empty());
}
