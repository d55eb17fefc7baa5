//! # Default Prompt Templates
//!
//! The default templates sent to the AI provider for query generation.
//! Both can be overridden through the server configuration.

/// The default system prompt for the query generation stage.
///
/// Placeholders: `{schema}`, `{examples}`
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a SQLite expert. Your task is to convert natural language questions into syntactically correct SQLite queries.

{schema}

IMPORTANT RULES:
1. Return ONLY the SQL query, nothing else
2. Do not include any explanations, comments, or markdown formatting
3. Use proper SQLite syntax
4. Always use proper JOINs when connecting tables
5. Limit results to reasonable numbers (use LIMIT when appropriate)
6. Use proper column names as specified in the schema
7. For text comparisons, use single quotes
8. End queries with semicolon

Here are some examples of good queries:

{examples}"#;

/// The default user prompt for the query generation stage.
///
/// Placeholders: `{question}`
pub const DEFAULT_USER_PROMPT: &str = "{question}";

/// Fills the `{schema}` and `{examples}` placeholders of a system prompt template.
pub fn render_system_prompt(template: &str, schema: &str, examples: &str) -> String {
    template
        .replace("{schema}", schema.trim())
        .replace("{examples}", examples)
}

/// Fills the `{question}` placeholder of a user prompt template.
pub fn render_user_prompt(template: &str, question: &str) -> String {
    template.replace("{question}", question)
}
