use crate::document::ScriptDocument;

/// Format a document as JSON.
pub fn format_json(document: &ScriptDocument) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| "{}".to_string())
}

/// Format per-section command counts as plain text.
pub fn format_sections(document: &ScriptDocument) -> String {
    let mut lines = Vec::with_capacity(document.sections.len());
    for section in &document.sections {
        lines.push(format!("{:>4}  {}", section.commands.len(), section.name));
    }
    lines.join("\n")
}

/// Format a simple summary of document counts.
pub fn format_summary(document: &ScriptDocument) -> String {
    format!(
        "sections={} commands={}",
        document.sections.len(),
        document.command_count()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{format_json, format_sections, format_summary};
    use crate::document::ScriptDocument;

    #[test]
    fn summary_counts_sections_and_commands() {
        let mut doc = ScriptDocument::new();
        doc.push_command("/ip route", "add dst-address=1.1.1.1/32 gateway=wan1");
        doc.push_command("/ip route", "add dst-address=8.8.8.8/32 gateway=wan2");
        doc.push_command("/ip dns", "set allow-remote-requests=yes");

        assert_eq!(format_summary(&doc), "sections=2 commands=3");
        assert_eq!(
            format_sections(&doc),
            "   2  /ip route\n   1  /ip dns"
        );
    }

    #[test]
    fn json_output_carries_section_names() {
        let mut doc = ScriptDocument::new();
        doc.push_command("/ip dns", "set allow-remote-requests=yes");
        let json = format_json(&doc);
        assert!(json.contains(r#""name": "/ip dns""#));
    }
}
