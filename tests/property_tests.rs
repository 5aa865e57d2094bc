//! Property tests for the calculator and the entry list.

use gpacalc::models::{Category, ClassificationScheme, GradeLabel, Subject};
use gpacalc::utils::calculator::{classify, overall_percentage, partition, weighted_mean};
use gpacalc::utils::entries::{add_entry, remove_entry};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_subject() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..200.0, 1.0f64..200.0, 0.1f64..10.0)
}

fn build(values: &[(f64, f64, f64)]) -> Vec<Subject> {
    values
        .iter()
        .enumerate()
        .map(|(i, &(grade, max_grade, weight))| Subject {
            id: i as u64 + 1,
            name: format!("subject {}", i + 1),
            grade,
            max_grade,
            weight,
            category: None,
        })
        .collect()
}

proptest! {
    /// A weighted mean never leaves the range of the values it averages.
    #[test]
    fn overall_is_bounded_by_entry_percentages(values in vec(arb_subject(), 1..30)) {
        let entries = build(&values);
        let overall = overall_percentage(&entries);
        let min = entries.iter().map(|s| s.percentage()).fold(f64::INFINITY, f64::min);
        let max = entries.iter().map(|s| s.percentage()).fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(overall >= min - 1e-9);
        prop_assert!(overall <= max + 1e-9);
    }

    /// With positive weights and denominators the strict and permissive results agree.
    #[test]
    fn strict_mean_matches_for_valid_lists(values in vec(arb_subject(), 1..30)) {
        let entries = build(&values);
        let strict = weighted_mean(&entries).expect("defined for valid input");
        prop_assert!((strict - overall_percentage(&entries)).abs() < 1e-9);
    }

    /// Scaling every weight by the same factor leaves the result unchanged.
    #[test]
    fn uniform_weight_scaling_is_neutral(values in vec(arb_subject(), 1..20), factor in 0.5f64..5.0) {
        let entries = build(&values);
        let mut scaled = entries.clone();
        for subject in &mut scaled {
            subject.weight *= factor;
        }
        prop_assert!((overall_percentage(&entries) - overall_percentage(&scaled)).abs() < 1e-6);
    }

    /// Strong and weak never overlap and never include the 70-80 band.
    #[test]
    fn partition_is_disjoint(values in vec(arb_subject(), 0..30)) {
        let entries = build(&values);
        let analysis = partition(&entries);
        for strong in &analysis.strong {
            prop_assert!(strong.percentage() >= 80.0);
            prop_assert!(!analysis.weak.iter().any(|w| w.id == strong.id));
        }
        for weak in &analysis.weak {
            prop_assert!(weak.percentage() < 70.0);
        }
    }

    /// Common subjects keep their fixed label whatever they scored.
    #[test]
    fn common_label_ignores_percentage(percentage in 0.0f64..150.0) {
        let label = classify(percentage, Some(Category::Common), ClassificationScheme::LetterGrade);
        prop_assert_eq!(label, GradeLabel::FullMarks);
    }

    /// Removing one entry shrinks the list by one and leaves everything else untouched.
    #[test]
    fn remove_preserves_other_entries(values in vec(arb_subject(), 1..20), pick in any::<prop::sample::Index>()) {
        let mut entries = build(&values);
        let original = entries.clone();
        let target = original[pick.index(original.len())].id;

        prop_assert!(remove_entry(&mut entries, target));
        prop_assert_eq!(entries.len(), original.len() - 1);

        let expected: Vec<Subject> = original.into_iter().filter(|s| s.id != target).collect();
        prop_assert_eq!(entries, expected);
    }

    /// Ids handed out by `add_entry` are never reused within a list.
    #[test]
    fn added_ids_are_unique(values in vec(arb_subject(), 0..10), additions in 1usize..10) {
        let mut entries = build(&values);
        for _ in 0..additions {
            add_entry(&mut entries).expect("add");
        }
        let mut ids: Vec<u64> = entries.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), entries.len());
    }
}
