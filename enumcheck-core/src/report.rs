//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::diagnostics::Diagnostic;

/// Prints diagnostics in plain text format.
pub fn print_plain(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("No findings.");
    } else {
        println!("FINDINGS ({}):", diagnostics.len());
        for d in diagnostics {
            match &d.file {
                Some(file) => println!(
                    "- {} [{}:{}:{}] {}",
                    d.id, file, d.span.line, d.span.column, d.message
                ),
                None => println!("- {} [{}:{}] {}", d.id, d.span.line, d.span.column, d.message),
            }
        }
    }
}

/// Prints diagnostics in JSON format.
///
/// Falls back to a simpler format if serialization fails (should never
/// happen with these types, but all cases are handled).
pub fn print_json(diagnostics: &[Diagnostic]) {
    match serde_json::to_string_pretty(&json!({ "findings": diagnostics })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"finding_count\": {}}}", diagnostics.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Finding;
    use crate::syntax::Span;

    #[test]
    fn test_json_payload_shape() {
        let mut diag = Finding::MissingMembers {
            span: Span::new(26, 13),
            members: vec!["Blue".into()],
        }
        .into_diagnostic();
        diag.file = Some("doc.json".into());

        let value = serde_json::to_value(json!({ "findings": [diag] })).unwrap();
        let finding = &value["findings"][0];
        assert_eq!(finding["id"], "ENUM001");
        assert_eq!(finding["file"], "doc.json");
        assert_eq!(finding["span"]["line"], 26);
        assert_eq!(
            finding["message"],
            "enum value(s) not referenced in enclosing block: Blue"
        );
    }
}
