//! # Prompt Template Tests
//!
//! Validates that the default query-generation prompt carries the schema,
//! the few-shot examples and the rules, and that overrides are honored.

use text2sql::prompts::{
    core::{render_system_prompt, render_user_prompt, DEFAULT_SYSTEM_PROMPT},
    schema::{render_examples, FEW_SHOT_EXAMPLES, SCHEMA_DESCRIPTION},
};
use text2sql::SqlTranslator;
use text2sql_test_utils::MockAiProvider;

#[test]
fn test_default_system_prompt_contains_schema_and_examples() {
    let prompt = render_system_prompt(
        DEFAULT_SYSTEM_PROMPT,
        SCHEMA_DESCRIPTION,
        &render_examples(FEW_SHOT_EXAMPLES),
    );

    assert!(prompt.starts_with("You are a SQLite expert."));
    assert!(prompt.contains("- artists: ArtistId, Name"));
    assert!(prompt.contains("- playlist_track: PlaylistId, TrackId"));
    assert!(prompt.contains("Question: Which customers are from Brazil?"));
    assert!(prompt.contains("SQL: SELECT COUNT(*) as total_customers FROM customers;"));
    assert!(prompt.contains("8. End queries with semicolon"));
    assert!(!prompt.contains("{schema}"));
    assert!(!prompt.contains("{examples}"));
}

#[test]
fn test_examples_are_separated_by_blank_lines() {
    let rendered = render_examples(&FEW_SHOT_EXAMPLES[..2]);
    let blocks: Vec<&str> = rendered.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].starts_with("Question: What are the names of all tracks"));
}

#[test]
fn test_user_prompt_substitutes_question() {
    assert_eq!(
        render_user_prompt("Q: {question}", "How many artists are there?"),
        "Q: How many artists are there?"
    );
}

#[test]
fn test_translator_system_prompt_override() {
    let translator = SqlTranslator::new(Box::new(MockAiProvider::default()))
        .with_system_prompt("Only SQL please.\n{schema}");

    let prompt = translator.system_prompt();
    assert!(prompt.starts_with("Only SQL please."));
    assert!(prompt.contains("- genres: GenreId, Name"));
}
