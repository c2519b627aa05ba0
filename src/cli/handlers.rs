//! CLI command handlers

use crate::cli::output::*;
use crate::models::InterviewContext;
use crate::models::InterviewType;
use crate::rag::ContextAssembler;
use crate::AppConfig;
use crate::InterviewRagError;
use crate::RagService;
use crate::Result;

/// Reject blank questions before any network call; accepted text is passed on as typed
fn require_question(question: &str) -> Result<&str> {
    if question.trim().is_empty() {
        return Err(InterviewRagError::InvalidQuestion(
            "question must not be blank".to_string(),
        ));
    }
    Ok(question)
}

pub async fn handle_serve(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    no_cors: bool,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = config.server.enable_cors && !no_cors;

    println!("🚀 Starting interview-rag API Server");
    println!("====================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });

    let service = RagService::new(config)?;
    crate::api::serve_api(service, &host, port, cors).await
}

pub async fn handle_ask(
    service: &RagService,
    question: &str,
    no_fallback: bool,
    json: bool,
) -> Result<()> {
    let question = require_question(question)?;
    let result = if no_fallback {
        service.run_enhanced(question).await?
    } else {
        service.ask(question).await?
    };

    if json {
        print_json(&result)
    } else {
        print_pipeline_result(&result);
        Ok(())
    }
}

pub async fn handle_basic(service: &RagService, question: &str, json: bool) -> Result<()> {
    let question = require_question(question)?;
    let result = service.run_basic(question).await?;

    if json {
        print_json(&result)
    } else {
        print_pipeline_result(&result);
        Ok(())
    }
}

pub async fn handle_compare(service: &RagService, question: &str, json: bool) -> Result<()> {
    let question = require_question(question)?;
    let comparison = service.run_compare(question).await?;

    if json {
        print_json(&comparison)
    } else {
        print_comparison(&comparison);
        Ok(())
    }
}

pub async fn handle_contextual(
    service: &RagService,
    question: &str,
    interview_type: InterviewType,
    company: Option<String>,
    requirements: Vec<String>,
    json: bool,
) -> Result<()> {
    let question = require_question(question)?;
    let mut context = InterviewContext::new(interview_type);
    if let Some(company) = company {
        context = context.with_company(company);
    }
    if !requirements.is_empty() {
        context = context.with_requirements(requirements);
    }

    let result = service.run_contextual(question, &context).await?;

    if json {
        print_json(&result)
    } else {
        print_pipeline_result(&result);
        Ok(())
    }
}

pub async fn handle_preset(
    service: &RagService,
    question: &str,
    preset: &str,
    json: bool,
) -> Result<()> {
    let question = require_question(question)?;
    let result = service.run_with_preset(question, preset).await?;

    if json {
        print_json(&result)
    } else {
        print_pipeline_result(&result);
        Ok(())
    }
}

pub async fn handle_search(
    service: &RagService,
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let query = require_question(query)?;
    let limit = limit.unwrap_or(service.config().enhanced_top_k);
    let documents = service.retriever().search(query, limit).await?;

    if json {
        print_json(&documents)
    } else {
        println!("🔍 {}", ContextAssembler::create_summary(&documents));
        Ok(())
    }
}
