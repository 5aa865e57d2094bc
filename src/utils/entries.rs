use anyhow::{anyhow, Result};
use log::{debug, warn};
use crate::models::{Category, Subject, SubjectField};

// Numeric input coercion: blank, malformed or non-finite text becomes 0.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("Coercing non-numeric input '{}' to 0", raw);
            0.0
        }
    }
}

// Next id in the session counter: one past the largest id already in use.
// `None` once the counter has reached `u64::MAX`.
pub fn next_id(list: &[Subject]) -> Option<u64> {
    match list.iter().map(|s| s.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

// Appends a default entry and returns its id.
pub fn add_entry(list: &mut Vec<Subject>) -> Result<u64> {
    let id = next_id(list).ok_or_else(|| anyhow!("No subject ids left, remove the subject with id {}", u64::MAX))?;
    list.push(Subject::new(id));
    debug!("Added subject {}", id);
    Ok(id)
}

// Returns false when no entry has `id` or the value is not acceptable for the field.
pub fn update_entry(list: &mut [Subject], id: u64, field: SubjectField, raw: &str) -> bool {
    let Some(subject) = list.iter_mut().find(|s| s.id == id) else {
        debug!("Update ignored, no subject with id {}", id);
        return false;
    };

    match field {
        SubjectField::Name => subject.name = raw.to_string(),
        SubjectField::Grade => subject.grade = parse_number(raw),
        SubjectField::MaxGrade => subject.max_grade = parse_number(raw),
        SubjectField::Weight => subject.weight = parse_number(raw),
        SubjectField::Category => {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                subject.category = None;
            } else {
                match trimmed.parse::<Category>() {
                    Ok(category) => subject.category = Some(category),
                    Err(e) => {
                        warn!("{}", e);
                        return false;
                    }
                }
            }
        }
    }

    if let Err(e) = subject.validate() {
        warn!("{}", e);
    }
    true
}

// Removes the entry with `id`, keeping the others in order. Returns false when absent.
pub fn remove_entry(list: &mut Vec<Subject>, id: u64) -> bool {
    let before = list.len();
    list.retain(|s| s.id != id);
    let removed = list.len() != before;
    if removed {
        debug!("Removed subject {}", id);
    }
    removed
}

// The list a fresh calculator starts with.
pub fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: 1,
            name: "Programming".to_string(),
            grade: 85.0,
            max_grade: 100.0,
            weight: 1.0,
            category: None,
        },
        Subject {
            id: 2,
            name: "Mathematics".to_string(),
            grade: 78.0,
            max_grade: 100.0,
            weight: 1.0,
            category: None,
        },
    ]
}
