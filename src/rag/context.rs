//! Context assembly from retrieved documents

use crate::cli::output::truncate_str;
use crate::vector::RetrievedDocument;

/// Separator placed between snippets in the context block
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Assembler for creating the plain-text context block
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler;

impl ContextAssembler {
    /// Join `title: content` entries with blank lines, skipping documents without metadata
    #[must_use]
    pub fn assemble(documents: &[RetrievedDocument]) -> String {
        documents
            .iter()
            .filter_map(RetrievedDocument::context_entry)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }

    /// Create a short ranked listing of the retrieved snippets
    #[must_use]
    pub fn create_summary(documents: &[RetrievedDocument]) -> String {
        if documents.is_empty() {
            return "No profile snippets found.".to_string();
        }

        let mut summary = format!("Found {} relevant snippet(s):\n\n", documents.len());

        for (idx, doc) in documents.iter().enumerate() {
            let (title, preview) = doc.metadata.as_ref().map_or(("(no metadata)", String::new()), |meta| {
                (
                    meta.title.as_deref().unwrap_or("Context"),
                    truncate_str(meta.content.as_deref().unwrap_or_default(), 100),
                )
            });

            summary.push_str(&format!(
                "{}. {} - Score: {:.2}\n   {}\n\n",
                idx + 1,
                title,
                doc.score,
                preview
            ));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::DocumentMetadata;

    #[test]
    fn test_assemble_skips_documents_without_metadata() {
        let documents = vec![
            RetrievedDocument::new("1", 0.9, "Skills", "Go, Rust, distributed systems"),
            RetrievedDocument {
                id: "2".to_string(),
                score: 0.8,
                metadata: None,
            },
            RetrievedDocument::new("3", 0.7, "Project A", "Built a scheduler serving 10k req/s"),
        ];

        assert_eq!(
            ContextAssembler::assemble(&documents),
            "Skills: Go, Rust, distributed systems\n\nProject A: Built a scheduler serving 10k req/s"
        );
    }

    #[test]
    fn test_assemble_missing_fields() {
        let documents = vec![RetrievedDocument {
            id: "1".to_string(),
            score: 0.5,
            metadata: Some(DocumentMetadata {
                title: Some("Education".to_string()),
                content: None,
            }),
        }];

        assert_eq!(ContextAssembler::assemble(&documents), "Education: ");
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(ContextAssembler::assemble(&[]), "");
    }

    #[test]
    fn test_summary() {
        assert_eq!(ContextAssembler::create_summary(&[]), "No profile snippets found.");

        let summary = ContextAssembler::create_summary(&[RetrievedDocument::new(
            "1",
            0.876,
            "Skills",
            "Rust",
        )]);
        assert!(summary.starts_with("Found 1 relevant snippet(s)"));
        assert!(summary.contains("1. Skills - Score: 0.88"));
    }
}
