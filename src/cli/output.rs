//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the interview-rag CLI

use serde::Serialize;

use crate::models::ComparisonResult;
use crate::models::PipelineMetadata;
use crate::models::PipelineResult;
use crate::presets::all_presets;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8 characters (emojis, etc.)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Hide all but the last four characters of a secret
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let count = secret.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_metadata(metadata: &PipelineMetadata) {
    println!("  Original query: {}", metadata.original_query);
    if let Some(enhanced) = &metadata.enhanced_query {
        println!("  Enhanced query: {enhanced}");
    }
    println!("  Results found:  {}", metadata.results_found);
    if let (Some(enhancement), Some(synthesis)) = (metadata.enhancement, metadata.synthesis) {
        println!("  Stages:         enhancement={enhancement:?}, synthesis={synthesis:?}");
    }
    if let Some(timing) = &metadata.timing {
        println!(
            "  Timing:         enhance {}ms | search {}ms | format {}ms | total {}ms",
            timing.query_enhancement_ms,
            timing.vector_search_ms,
            timing.response_formatting_ms,
            timing.total_ms
        );
    }
}

/// Print a single pipeline result
pub fn print_pipeline_result(result: &PipelineResult) {
    println!("💬 Answer:\n");
    if result.response.is_empty() {
        println!("(no matching profile data)");
    } else {
        println!("{}", result.response);
    }
    println!("\n📊 Metadata:");
    print_metadata(&result.metadata);
}

/// Print a basic vs enhanced comparison
pub fn print_comparison(comparison: &ComparisonResult) {
    println!("❓ Question: {}\n", comparison.question);

    println!("═══ Basic RAG ═══════════════════════════════════════\n");
    println!("{}\n", truncate_str(&comparison.results.basic.response, 1200));
    print_metadata(&comparison.results.basic.metadata);

    println!("\n═══ Enhanced RAG ════════════════════════════════════\n");
    println!("{}\n", comparison.results.enhanced.response);
    print_metadata(&comparison.results.enhanced.metadata);

    println!(
        "\n⏱️  Total comparison time: {}ms",
        comparison.total_comparison_ms
    );
}

/// Print all interview presets
pub fn print_presets() {
    println!("📋 Interview presets:\n");
    for (name, preset) in all_presets() {
        println!("  {name}");
        println!("    Query model:    {}", preset.query_model);
        println!("    Response model: {}", preset.response_model);
        println!("    Temperature:    {}", preset.temperature);
        println!("    Focus areas:    {}", preset.focus_areas.join(", "));
        println!("    Style:          {}\n", preset.response_style);
    }
}

/// Print configuration with secrets masked
pub fn print_config(config: &AppConfig) {
    println!("⚙️  Configuration:\n");
    println!("  [logging] level = {}", config.logging.level);
    println!("  [llm] endpoint = {}", config.llm.endpoint);
    println!("  [llm] api_key = {}", mask_secret(&config.llm.api_key));
    println!(
        "  [vector] url = {}",
        if config.vector.url.is_empty() {
            "(not set)"
        } else {
            config.vector.url.as_str()
        }
    );
    println!("  [vector] token = {}", mask_secret(&config.vector.token));
    println!(
        "  [pipeline] top_k = {} enhanced / {} basic",
        config.pipeline.enhanced_top_k, config.pipeline.basic_top_k
    );
    println!(
        "  [pipeline] stage_timeout_ms = {}",
        config
            .stage_timeout()
            .map_or_else(|| "none".to_string(), |d| d.as_millis().to_string())
    );
    println!(
        "  [pipeline.enhancer] {} (temperature {}, max_tokens {})",
        config.pipeline.enhancer.model,
        config.pipeline.enhancer.temperature,
        config.pipeline.enhancer.max_tokens
    );
    println!(
        "  [pipeline.synthesizer] {} (temperature {}, max_tokens {})",
        config.pipeline.synthesizer.model,
        config.pipeline.synthesizer.temperature,
        config.pipeline.synthesizer.max_tokens
    );
    println!(
        "  [server] {}:{} (cors: {})",
        config.server.host, config.server.port, config.server.enable_cors
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret("gsk_1234567890"), "****7890");
    }
}
