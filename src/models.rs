use std::fmt;
use std::str::FromStr;
use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};

// Grading model of a subject. `Common` subjects are not graded on the letter scale.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Common,
    Specialist,
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(Category::Common),
            "specialist" => Ok(Category::Specialist),
            other => Err(anyhow!("Unknown category '{}', expected 'common' or 'specialist'", other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Common => write!(f, "common"),
            Category::Specialist => write!(f, "specialist"),
        }
    }
}

// Which set of bands turns a percentage into a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassificationScheme {
    #[default]
    Descriptive,
    LetterGrade,
}

impl FromStr for ClassificationScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "descriptive" => Ok(ClassificationScheme::Descriptive),
            "letter" | "letter-grade" | "letter_grade" => Ok(ClassificationScheme::LetterGrade),
            other => Err(anyhow!("Unknown classification scheme '{}', expected 'descriptive' or 'letter'", other)),
        }
    }
}

impl fmt::Display for ClassificationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationScheme::Descriptive => write!(f, "descriptive"),
            ClassificationScheme::LetterGrade => write!(f, "letter-grade"),
        }
    }
}

// Label text comes from `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeLabel {
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    Weak,
    Distinction,
    Merit,
    Pass,
    Fail,
    // Fixed label for common subjects under the letter scheme.
    FullMarks,
}

impl fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeLabel::Excellent => "excellent",
            GradeLabel::VeryGood => "very good",
            GradeLabel::Good => "good",
            GradeLabel::Acceptable => "acceptable",
            GradeLabel::Weak => "weak",
            GradeLabel::Distinction => "D",
            GradeLabel::Merit => "M",
            GradeLabel::Pass => "P",
            GradeLabel::Fail => "F",
            GradeLabel::FullMarks => "100%",
        };
        f.write_str(label)
    }
}

// Serde defaults, also used by `Subject::new`.
fn default_max_grade() -> f64 {
    100.0
}

fn default_weight() -> f64 {
    1.0
}

// One gradeable item in the calculator list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub grade: f64,
    #[serde(default = "default_max_grade")]
    pub max_grade: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Subject {
    // The entry appended by "add subject": empty name, 0/100, weight 1.
    pub fn new(id: u64) -> Self {
        Subject {
            id,
            name: String::new(),
            grade: 0.0,
            max_grade: default_max_grade(),
            weight: default_weight(),
            category: None,
        }
    }

    // Score as a percentage of `max_grade`, or `None` when the denominator makes it meaningless.
    pub fn try_percentage(&self) -> Option<f64> {
        if self.max_grade <= 0.0 || !self.max_grade.is_finite() {
            return None;
        }
        let percentage = self.grade / self.max_grade * 100.0;
        percentage.is_finite().then_some(percentage)
    }

    // Percentage with the undefined case shown as 0.
    pub fn percentage(&self) -> f64 {
        self.try_percentage().unwrap_or(0.0)
    }

    // Label shown in place of an empty name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed subject"
        } else {
            &self.name
        }
    }

    // Advisory only: edits are always accepted, this is used to warn.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.grade.is_finite() || !self.max_grade.is_finite() || !self.weight.is_finite() {
            bail!("Subject {} ({}) has a non-finite numeric field", self.id, self.display_name());
        }
        if self.max_grade <= 0.0 {
            bail!("Subject {} ({}) has max grade {}, it must be greater than 0", self.id, self.display_name(), self.max_grade);
        }
        if self.weight <= 0.0 {
            bail!("Subject {} ({}) has weight {}, it must be greater than 0", self.id, self.display_name(), self.weight);
        }
        Ok(())
    }
}

// Editable fields of a `Subject`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectField {
    Name,
    Grade,
    MaxGrade,
    Weight,
    Category,
}

impl FromStr for SubjectField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SubjectField::Name),
            "grade" => Ok(SubjectField::Grade),
            "max" | "maxgrade" | "max_grade" | "max-grade" => Ok(SubjectField::MaxGrade),
            "weight" => Ok(SubjectField::Weight),
            "category" => Ok(SubjectField::Category),
            other => Err(anyhow!("Unknown field '{}'", other)),
        }
    }
}

// Strong and weak subjects, borrowed from the caller's list in their original order.
#[derive(Debug, Default)]
pub struct Analysis<'a> {
    pub strong: Vec<&'a Subject>,
    pub weak: Vec<&'a Subject>,
}

// Percentage and label of one entry, keyed by its id.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectResult {
    pub id: u64,
    pub percentage: f64,
    pub label: GradeLabel,
}

// Everything the calculator view shows, recomputed from scratch on every change.
#[derive(Debug)]
pub struct Summary<'a> {
    pub scheme: ClassificationScheme,
    pub overall: f64,
    pub overall_label: GradeLabel,
    pub subjects: Vec<SubjectResult>,
    pub analysis: Analysis<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_fills_defaults() {
        let subject: Subject = serde_json::from_str(r#"{"id": 7, "name": "Physics", "grade": 42}"#).expect("parse");
        assert_eq!(subject.max_grade, 100.0);
        assert_eq!(subject.weight, 1.0);
        assert_eq!(subject.category, None);
    }

    #[test]
    fn deserialize_camel_case_and_category() {
        let subject: Subject = serde_json::from_str(
            r#"{"id": 1, "name": "Arabic", "grade": 18, "maxGrade": 20, "weight": 2, "category": "common"}"#,
        )
        .expect("parse");
        assert_eq!(subject.max_grade, 20.0);
        assert_eq!(subject.category, Some(Category::Common));
    }

    #[test]
    fn percentage_falls_back_to_zero() {
        let mut subject = Subject::new(1);
        subject.grade = 50.0;
        subject.max_grade = 0.0;
        assert_eq!(subject.try_percentage(), None);
        assert_eq!(subject.percentage(), 0.0);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut subject = Subject::new(3);
        assert!(subject.validate().is_ok());

        subject.max_grade = 0.0;
        assert!(subject.validate().is_err());

        subject.max_grade = 100.0;
        subject.weight = 0.0;
        assert!(subject.validate().is_err());
    }

    #[test]
    fn parse_scheme_and_field_names() {
        assert_eq!("Letter".parse::<ClassificationScheme>().expect("scheme"), ClassificationScheme::LetterGrade);
        assert_eq!("maxGrade".parse::<SubjectField>().expect("field"), SubjectField::MaxGrade);
        assert!("colour".parse::<SubjectField>().is_err());
    }

    #[test]
    fn labels_render_as_text() {
        assert_eq!(GradeLabel::VeryGood.to_string(), "very good");
        assert_eq!(GradeLabel::Merit.to_string(), "M");
        assert_eq!(GradeLabel::FullMarks.to_string(), "100%");
    }

    #[test]
    fn display_name_for_blank_subject() {
        assert_eq!(Subject::new(1).display_name(), "Unnamed subject");
    }
}
