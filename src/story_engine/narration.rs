//! Findings-driven narration: the workup recap only mentions what the
//! player actually discovered earlier in the session.

use crate::story_engine::models::{Finding, FindingKind};

/// Join items in the house list style: one item stands alone, otherwise
/// everything but the last is comma-joined and the last is attached with
/// ", and". Two items therefore render as "A, and B" — that quirk is part
/// of the narration's voice and is pinned by tests.
pub fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Build the recap clauses for the diagnostic-workup scene.
///
/// The lead clause comes from the first finding mentioning "fever"
/// (case-insensitive) via `fever_template`'s `{finding}` placeholder; the
/// second clause lists every `Exam` finding via `exam_template`'s
/// `{findings}` placeholder. Either clause is omitted when it has nothing
/// to say. Callers handle the zero-findings fallback themselves.
pub fn workup_recap(
    findings: &[Finding],
    fever_template: &str,
    exam_template: &str,
) -> Vec<String> {
    let mut clauses = Vec::new();

    if let Some(fever) = findings
        .iter()
        .find(|f| f.text.to_lowercase().contains("fever"))
    {
        clauses.push(fever_template.replace("{finding}", &fever.text));
    }

    let exam: Vec<&str> = findings
        .iter()
        .filter(|f| f.kind == FindingKind::Exam)
        .map(|f| f.text.as_str())
        .collect();
    if !exam.is_empty() {
        clauses.push(exam_template.replace("{findings}", &join_with_and(&exam)));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEVER_T: &str = "'We have a 5-year-old with {finding},'";
    const EXAM_T: &str = "'Plus physical findings of {findings}.'";

    fn exam(text: &str) -> Finding {
        Finding::new(FindingKind::Exam, text)
    }

    #[test]
    fn single_item_has_no_conjunction() {
        assert_eq!(join_with_and(&["polymorphous rash"]), "polymorphous rash");
    }

    #[test]
    fn three_items_use_oxford_style_join() {
        assert_eq!(join_with_and(&["A", "B", "C"]), "A, B, and C");
    }

    #[test]
    fn two_items_keep_the_comma_before_and() {
        assert_eq!(join_with_and(&["A", "B"]), "A, and B");
    }

    #[test]
    fn empty_list_joins_to_nothing() {
        assert_eq!(join_with_and(&[]), "");
    }

    #[test]
    fn recap_extracts_fever_and_exam_clauses() {
        let findings = vec![
            Finding::new(FindingKind::Vitals, "Temp 39.8°C, HR 130, RR 28, BP 95/60"),
            Finding::new(
                FindingKind::History,
                "5 days of persistent fever >39°C, poorly responsive to antipyretics",
            ),
            exam("bilateral conjunctival injection"),
            exam("strawberry tongue"),
            exam("polymorphous rash"),
            Finding::new(FindingKind::History, "No travel history, attends daycare"),
        ];

        let clauses = workup_recap(&findings, FEVER_T, EXAM_T);
        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0],
            "'We have a 5-year-old with 5 days of persistent fever >39°C, \
             poorly responsive to antipyretics,'"
        );
        // Vitals and travel history never leak into the exam clause.
        assert_eq!(
            clauses[1],
            "'Plus physical findings of bilateral conjunctival injection, \
             strawberry tongue, and polymorphous rash.'"
        );
    }

    #[test]
    fn recap_with_single_exam_finding_uses_bare_item() {
        let findings = vec![exam("unilateral cervical lymphadenopathy")];
        let clauses = workup_recap(&findings, FEVER_T, EXAM_T);
        assert_eq!(
            clauses,
            ["'Plus physical findings of unilateral cervical lymphadenopathy.'"]
        );
    }

    #[test]
    fn recap_with_no_qualifying_findings_is_empty() {
        let findings = vec![Finding::new(FindingKind::Workup, "Ordered: CBC, CRP, ESR")];
        assert!(workup_recap(&findings, FEVER_T, EXAM_T).is_empty());
    }
}
