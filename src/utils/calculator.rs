use crate::models::{Analysis, Category, ClassificationScheme, GradeLabel, Subject, SubjectResult, Summary};

pub const STRONG_THRESHOLD: f64 = 80.0;
pub const WEAK_THRESHOLD: f64 = 70.0;

// Overall weighted percentage. Empty lists and a non-positive total weight give 0,
// and entries without a usable max grade count as 0%.
pub fn overall_percentage(entries: &[Subject]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let total_weighted: f64 = entries.iter().map(|s| s.percentage() * s.weight).sum();
    let total_weight: f64 = entries.iter().map(|s| s.weight).sum();

    if total_weight > 0.0 {
        total_weighted / total_weight
    } else {
        0.0
    }
}

// Same mean, but `None` whenever the result would be a stand-in rather than a real average:
// empty list, an unusable max grade, or any weight that is not a positive finite number.
pub fn weighted_mean(entries: &[Subject]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let mut total_weighted = 0.0;
    let mut total_weight = 0.0;
    for subject in entries {
        if subject.weight <= 0.0 || !subject.weight.is_finite() {
            return None;
        }
        let percentage = subject.try_percentage()?;
        total_weighted += percentage * subject.weight;
        total_weight += subject.weight;
    }

    (total_weight > 0.0).then(|| total_weighted / total_weight)
}

// Lower bounds are inclusive.
pub fn classify(percentage: f64, category: Option<Category>, scheme: ClassificationScheme) -> GradeLabel {
    match scheme {
        ClassificationScheme::Descriptive => {
            if percentage >= 90.0 {
                GradeLabel::Excellent
            } else if percentage >= 80.0 {
                GradeLabel::VeryGood
            } else if percentage >= 70.0 {
                GradeLabel::Good
            } else if percentage >= 60.0 {
                GradeLabel::Acceptable
            } else {
                GradeLabel::Weak
            }
        }
        ClassificationScheme::LetterGrade => {
            if category == Some(Category::Common) {
                return GradeLabel::FullMarks;
            }
            if percentage >= 80.0 {
                GradeLabel::Distinction
            } else if percentage >= 60.0 {
                GradeLabel::Merit
            } else if percentage >= 40.0 {
                GradeLabel::Pass
            } else {
                GradeLabel::Fail
            }
        }
    }
}

// Splits entries into strong (>= 80%) and weak (< 70%). The band in between is left out.
pub fn partition(entries: &[Subject]) -> Analysis<'_> {
    let mut analysis = Analysis::default();
    for subject in entries {
        let percentage = subject.percentage();
        if percentage >= STRONG_THRESHOLD {
            analysis.strong.push(subject);
        } else if percentage < WEAK_THRESHOLD {
            analysis.weak.push(subject);
        }
    }
    analysis
}

// Overall result, per-entry labels and the strong/weak analysis in one pass over the list.
pub fn summarize(entries: &[Subject], scheme: ClassificationScheme) -> Summary<'_> {
    let overall = overall_percentage(entries);

    let subjects = entries
        .iter()
        .map(|s| {
            let percentage = s.percentage();
            SubjectResult {
                id: s.id,
                percentage,
                label: classify(percentage, s.category, scheme),
            }
        })
        .collect();

    Summary {
        scheme,
        overall,
        // The overall figure has no category of its own.
        overall_label: classify(overall, None, scheme),
        subjects,
        analysis: partition(entries),
    }
}
