use crate::models::{Subject, Summary};

const IMPROVEMENT_TIPS: [&str; 3] = [
    "Review the subjects that need improvement",
    "Ask your teachers for help",
    "Use the available learning resources",
];

// One bullet line of the analysis section.
fn percentage_line(subject: &Subject) -> String {
    format!("  • {} ({:.1}%)\n", subject.display_name(), subject.percentage())
}

// Renders the calculator view as plain text. Rounding only happens here.
pub fn render_report(entries: &[Subject], summary: &Summary) -> String {
    let mut report = String::from("📊 Grade Calculator 📊\n\n");
    report.push_str(&format!("Overall: {:.2}% ({})\n", summary.overall, summary.overall_label));
    report.push_str(&format!("Scheme: {}\n\n", summary.scheme));

    report.push_str("Subjects:\n");
    if entries.is_empty() {
        report.push_str("  (none, use 'add' to create one)\n");
    }
    for (subject, result) in entries.iter().zip(&summary.subjects) {
        report.push_str(&format!(
            "  [{}] {}: {:.1}% ({}/{}) {}\n",
            subject.id,
            subject.display_name(),
            result.percentage,
            subject.grade,
            subject.max_grade,
            result.label
        ));
    }

    if entries.is_empty() {
        return report;
    }

    report.push_str("\nAnalysis:\n");
    if !summary.analysis.strong.is_empty() {
        report.push_str("📈 Strong subjects\n");
        for subject in &summary.analysis.strong {
            report += &percentage_line(subject);
        }
    }
    if !summary.analysis.weak.is_empty() {
        report.push_str("📉 Needs improvement\n");
        for subject in &summary.analysis.weak {
            report += &percentage_line(subject);
        }
    }

    report.push_str("\nTips:\n");
    for tip in IMPROVEMENT_TIPS {
        report += &format!("  • {}\n", tip);
    }
    report
}
