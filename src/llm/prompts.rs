//! Prompt templates for the interview pipeline

use crate::presets::RagPreset;

/// Template with `{{name}}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: &'static str,
    variables: Vec<String>,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(template: &'static str) -> Self {
        let variables = extract_variables(template);
        Self {
            template,
            variables,
        }
    }

    /// Fill in the template in one left-to-right pass
    ///
    /// Substituted values are copied verbatim and never scanned for
    /// placeholders. Placeholders without a value are left untouched.
    #[must_use]
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                result.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = &after[..end];
            match values.iter().find(|(var, _)| *var == name) {
                Some((_, value)) => result.push_str(value),
                None => result.push_str(&rest[start..start + end + 4]),
            }
            rest = &after[end + 2..];
        }

        result.push_str(rest);
        result
    }

    /// Get required variables
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}

/// Extract variable names from template
fn extract_variables(template: &str) -> Vec<String> {
    let mut variables = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '{' && chars.peek() == Some(&'{') {
            chars.next(); // skip second '{'
            let mut var_name = String::new();
            while let Some(&ch) = chars.peek() {
                chars.next();
                if ch == '}' {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    break;
                }
                var_name.push(ch);
            }
            if !var_name.is_empty() && !variables.contains(&var_name) {
                variables.push(var_name);
            }
        }
    }

    variables
}

const QUERY_ENHANCEMENT: &str = r#"You are an interview preparation assistant that improves search queries.

Original question: "{{question}}"

Enhance this query to better search professional profile data by:
- Adding relevant synonyms and related terms
- Expanding context for interview scenarios
- Including technical and soft skill variations
- Focusing on achievements and quantifiable results

Return only the enhanced search query (no explanation):"#;

const INTERVIEW_ANSWER: &str = r#"You are an expert interview coach representing {{candidate}}. Create a compelling interview response using this professional data.

Question: "{{question}}"

Professional Background Data:
{{context}}

Create a response that:
- Directly addresses the interview question in first person (as {{candidate}})
- Uses specific examples and quantifiable achievements when available
- Applies STAR format (Situation-Task-Action-Result) when telling stories
- Sounds confident and natural for an interview setting
- Highlights unique value and differentiators
- Includes relevant technical details without being overwhelming
- Keeps the response concise but impactful (2-3 paragraphs max)
{{guidance}}
Interview Response:"#;

/// Standard prompts used by the enhancer and synthesizer
pub struct InterviewPrompts;

impl InterviewPrompts {
    /// Search query rewrite prompt
    #[must_use]
    pub fn query_enhancement() -> PromptTemplate {
        PromptTemplate::new(QUERY_ENHANCEMENT)
    }

    /// First-person answer prompt
    #[must_use]
    pub fn interview_answer() -> PromptTemplate {
        PromptTemplate::new(INTERVIEW_ANSWER)
    }

    /// Render the enhancement prompt for a question
    pub fn build_enhancement_prompt(question: &str) -> String {
        Self::query_enhancement().render(&[("question", question)])
    }

    /// Render the answer prompt; preset guidance is appended when given
    pub fn build_answer_prompt(
        question: &str,
        context: &str,
        candidate: &str,
        preset: Option<&RagPreset>,
    ) -> String {
        let guidance = preset.map(preset_guidance).unwrap_or_default();
        Self::interview_answer().render(&[
            ("question", question),
            ("context", context),
            ("candidate", candidate),
            ("guidance", guidance.as_str()),
        ])
    }
}

fn preset_guidance(preset: &RagPreset) -> String {
    format!(
        "- Emphasizes these focus areas where the data supports them: {}\n- Follows this response style: {}\n",
        preset.focus_areas.join(", "),
        preset.response_style
    )
}
