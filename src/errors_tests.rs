//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::InterviewRagError;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = InterviewRagError::Custom("Test error message".to_string());
        assert_eq!(error.to_string(), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = InterviewRagError::ConfigError("Invalid configuration".to_string());
        assert!(matches!(error, InterviewRagError::ConfigError(_)));
        assert!(error.to_string().contains("configuration"));
    }

    #[test]
    fn test_vector_search_error() {
        let error = InterviewRagError::VectorSearchError("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "Vector search error: connection refused"
        );
    }

    #[test]
    fn test_timeout_error_names_stage() {
        let error = InterviewRagError::Timeout {
            stage: "vector search",
            timeout_ms: 250,
        };
        assert_eq!(error.to_string(), "vector search timed out after 250ms");
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: InterviewRagError = io_err.into();
        assert!(matches!(err, InterviewRagError::Io(_)));
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: InterviewRagError = json_err.into();
        assert!(matches!(err, InterviewRagError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let err: InterviewRagError = toml_err.into();
        assert!(matches!(err, InterviewRagError::TomlParsing(_)));
    }

    // ====== Result Alias Tests ======

    #[test]
    fn test_question_mark_propagation() {
        fn parse(raw: &str) -> crate::Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        assert!(parse("{\"ok\": true}").is_ok());
        assert!(matches!(
            parse("nope"),
            Err(InterviewRagError::Serialization(_))
        ));
    }
}
