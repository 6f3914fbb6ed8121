//! Ticket → plain-text document rendering.
//!
//! The template is fixed; downstream retrieval prompts rely on the exact
//! labels, placeholders and line order. The summary block prints
//! `has_payment_issue` as `Yes`/`No` while the metadata block prints the raw
//! value (`True`/`False` for booleans); both forms are kept as-is.

use serde_json::Value;

use crate::errors::UploadError;
use crate::record::{TicketRecord, display_value, is_truthy, value_kind};

/// Renders one record into the uploaded document text.
///
/// Missing fields fall back to placeholders (`unknown`, `N/A`, `none`,
/// `None`, `False`). Scalars of any JSON type are printed as text and the
/// two flags are read by truthiness.
///
/// # Errors
/// Returns [`UploadError::Render`] when `metadata` is not an object, or when
/// a list field holds something other than strings.
pub fn render_document(record: &TicketRecord) -> Result<String, UploadError> {
    if let Some(m) = record
        .metadata
        .as_ref()
        .filter(|v| !v.is_null() && !v.is_object())
    {
        return Err(UploadError::Render {
            field: "metadata",
            reason: format!("expected an object, found {}", value_kind(m)),
        });
    }

    let text_or = |key: &str, fallback: &str| {
        record
            .meta(key)
            .map(display_value)
            .unwrap_or_else(|| fallback.to_string())
    };

    let ticket = text_or("ticketId", "unknown");
    let subject = text_or("subject", "N/A");
    let language = text_or("language", "unknown");
    let category = if record.meta("is_cancellation").is_some_and(is_truthy) {
        "Cancellation"
    } else {
        "Other"
    };
    let payment_yes_no = if record.meta("has_payment_issue").is_some_and(is_truthy) {
        "Yes"
    } else {
        "No"
    };
    let payment_literal = text_or("has_payment_issue", "False");
    let edge_case = text_or("edge_case", "none");
    let concerns = join_or_none(record.meta("customer_concerns"), "customer_concerns")?;
    let keywords = join_or_none(record.meta("topic_keywords"), "topic_keywords")?;
    let summary = text_or("conversation_summary", "None");
    let text = record.text.as_ref().map(display_value).unwrap_or_default();

    Ok(format!(
        "CANCELLATION TICKET: {ticket}\n\
         Subject: {subject}\n\
         Language: {language}\n\
         Category: {category}\n\
         Payment Issue: {payment_yes_no}\n\
         Edge Case: {edge_case}\n\
         Customer Concerns: {concerns}\n\
         \n\
         CONVERSATION:\n\
         {text}\n\
         \n\
         METADATA:\n\
         - Ticket ID: {ticket}\n\
         - Language: {language}\n\
         - Has Payment Issue: {payment_literal}\n\
         - Edge Case: {edge_case}\n\
         - Customer Concerns: {concerns}\n\
         - Topic Keywords: {keywords}\n\
         - Conversation Summary: {summary}\n"
    ))
}

/// File name of the transient document for a record.
///
/// Uses the ticket id, or the 1-based position in the input when the record
/// has none.
pub fn temp_file_name(record: &TicketRecord, global_index: usize) -> String {
    match record.ticket_id() {
        Some(id) => format!("temp_cancellation_{}.txt", display_value(id)),
        None => format!("temp_cancellation_{global_index}.txt"),
    }
}

/// `a, b, c`, or `None` when the list is missing or joins to an empty string.
///
/// A bare string joins its characters.
fn join_or_none(items: Option<&Value>, field: &'static str) -> Result<String, UploadError> {
    let joined = match items {
        None => String::new(),
        Some(Value::String(s)) => s.chars().map(String::from).collect::<Vec<_>>().join(", "),
        Some(Value::Array(values)) => {
            let mut parts = Vec::with_capacity(values.len());
            for (i, v) in values.iter().enumerate() {
                match v {
                    Value::String(s) => parts.push(s.as_str()),
                    other => {
                        return Err(UploadError::Render {
                            field,
                            reason: format!(
                                "item {i}: expected a string, found {}",
                                value_kind(other)
                            ),
                        });
                    }
                }
            }
            parts.join(", ")
        }
        Some(other) => {
            return Err(UploadError::Render {
                field,
                reason: format!("expected a list of strings, found {}", value_kind(other)),
            });
        }
    };

    Ok(if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> TicketRecord {
        serde_json::from_str(line).unwrap()
    }

    fn render(line: &str) -> String {
        render_document(&parse(line)).unwrap()
    }

    fn field<'a>(doc: &'a str, label: &str) -> Vec<&'a str> {
        doc.lines()
            .filter_map(|l| l.strip_prefix(label))
            .collect()
    }

    #[test]
    fn renders_full_record() {
        let r = parse(
            r#"{"text":"Customer: I want to cancel.\nAgent: Done.",
                "metadata":{"ticketId":"T-100","subject":"Cancel plan","language":"en",
                "is_cancellation":true,"has_payment_issue":true,"edge_case":"double charge",
                "customer_concerns":["refund","delay"],"topic_keywords":["billing"],
                "conversation_summary":"Customer cancelled."}}"#,
        );

        let expected = "CANCELLATION TICKET: T-100\n\
Subject: Cancel plan\n\
Language: en\n\
Category: Cancellation\n\
Payment Issue: Yes\n\
Edge Case: double charge\n\
Customer Concerns: refund, delay\n\
\n\
CONVERSATION:\n\
Customer: I want to cancel.\n\
Agent: Done.\n\
\n\
METADATA:\n\
- Ticket ID: T-100\n\
- Language: en\n\
- Has Payment Issue: True\n\
- Edge Case: double charge\n\
- Customer Concerns: refund, delay\n\
- Topic Keywords: billing\n\
- Conversation Summary: Customer cancelled.\n";

        assert_eq!(render_document(&r).unwrap(), expected);
    }

    #[test]
    fn missing_metadata_uses_placeholders() {
        for line in [r#"{"text":"hello"}"#, r#"{"text":"hello","metadata":{}}"#, "{}"] {
            let doc = render(line);
            assert!(doc.starts_with("CANCELLATION TICKET: unknown\n"));
            assert_eq!(field(&doc, "Subject: "), vec!["N/A"]);
            assert_eq!(field(&doc, "Language: "), vec!["unknown"]);
            assert_eq!(field(&doc, "Category: "), vec!["Other"]);
            assert_eq!(field(&doc, "Payment Issue: "), vec!["No"]);
            assert_eq!(field(&doc, "- Has Payment Issue: "), vec!["False"]);
            assert_eq!(field(&doc, "- Edge Case: "), vec!["none"]);
            assert_eq!(field(&doc, "- Customer Concerns: "), vec!["None"]);
            assert_eq!(field(&doc, "- Topic Keywords: "), vec!["None"]);
            assert_eq!(field(&doc, "- Conversation Summary: "), vec!["None"]);
        }
    }

    #[test]
    fn customer_concerns_join_or_none() {
        let doc = render(r#"{"metadata":{"customer_concerns":[]}}"#);
        assert_eq!(field(&doc, "Customer Concerns: "), vec!["None"]);

        let doc = render(r#"{"metadata":{"customer_concerns":["refund","delay"]}}"#);
        assert_eq!(field(&doc, "Customer Concerns: "), vec!["refund, delay"]);
        assert_eq!(field(&doc, "- Customer Concerns: "), vec!["refund, delay"]);

        let doc = render(r#"{"metadata":{"topic_keywords":[""]}}"#);
        assert_eq!(field(&doc, "- Topic Keywords: "), vec!["None"]);
    }

    #[test]
    fn payment_flag_keeps_both_spellings() {
        let doc = render(r#"{"metadata":{"has_payment_issue":false}}"#);
        assert_eq!(field(&doc, "Payment Issue: "), vec!["No"]);
        assert_eq!(field(&doc, "- Has Payment Issue: "), vec!["False"]);
    }

    #[test]
    fn temp_name_prefers_ticket_id() {
        let with_id = parse(r#"{"metadata":{"ticketId":"T-9"}}"#);
        assert_eq!(temp_file_name(&with_id, 3), "temp_cancellation_T-9.txt");

        let numeric = parse(r#"{"metadata":{"ticketId":12}}"#);
        assert_eq!(temp_file_name(&numeric, 3), "temp_cancellation_12.txt");

        let without = parse(r#"{"text":"x"}"#);
        assert_eq!(temp_file_name(&without, 3), "temp_cancellation_3.txt");
    }

    #[test]
    fn loosely_typed_scalars_render_as_text() {
        let doc = render(
            r#"{"text":7,"metadata":{"ticketId":true,"subject":42,"language":"de",
                "is_cancellation":"yes","has_payment_issue":1,"edge_case":1.5,
                "conversation_summary":false}}"#,
        );
        assert!(doc.starts_with("CANCELLATION TICKET: True\n"));
        assert_eq!(field(&doc, "Subject: "), vec!["42"]);
        assert_eq!(field(&doc, "Category: "), vec!["Cancellation"]);
        assert_eq!(field(&doc, "Payment Issue: "), vec!["Yes"]);
        assert_eq!(field(&doc, "- Has Payment Issue: "), vec!["1"]);
        assert_eq!(field(&doc, "- Edge Case: "), vec!["1.5"]);
        assert_eq!(field(&doc, "- Conversation Summary: "), vec!["False"]);
        assert!(doc.contains("CONVERSATION:\n7\n"));
    }

    #[test]
    fn falsy_flags_pick_the_negative_branch() {
        let doc = render(r#"{"metadata":{"is_cancellation":"","has_payment_issue":0}}"#);
        assert_eq!(field(&doc, "Category: "), vec!["Other"]);
        assert_eq!(field(&doc, "Payment Issue: "), vec!["No"]);
        assert_eq!(field(&doc, "- Has Payment Issue: "), vec!["0"]);
    }

    #[test]
    fn bare_string_list_joins_characters() {
        let doc = render(r#"{"metadata":{"topic_keywords":"abc"}}"#);
        assert_eq!(field(&doc, "- Topic Keywords: "), vec!["a, b, c"]);
    }

    #[test]
    fn non_string_list_items_fail_the_record() {
        let err = render_document(&parse(r#"{"metadata":{"customer_concerns":["refund",3]}}"#))
            .unwrap_err();
        match err {
            UploadError::Render { field, reason } => {
                assert_eq!(field, "customer_concerns");
                assert!(reason.contains("item 1"), "{reason}");
            }
            other => panic!("expected Render, got {other:?}"),
        }

        let err = render_document(&parse(r#"{"metadata":{"topic_keywords":5}}"#)).unwrap_err();
        assert!(matches!(err, UploadError::Render { field: "topic_keywords", .. }));
    }

    #[test]
    fn non_object_metadata_fails_the_record() {
        let err = render_document(&parse(r#"{"text":"x","metadata":"T-1"}"#)).unwrap_err();
        assert!(matches!(err, UploadError::Render { field: "metadata", .. }), "{err:?}");

        let doc = render(r#"{"text":"x","metadata":null}"#);
        assert!(doc.starts_with("CANCELLATION TICKET: unknown\n"));
    }
}
