//! # Chat Session
//!
//! Command parsing, conversation history and plain-text rendering for the
//! terminal chat. Everything here writes to an `io::Write` so it can be tested
//! without a terminal.

use std::io::{self, Write};
use text2sql::{prompts::schema::EXAMPLE_QUESTIONS, QueryResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sql: Option<String>,
}

/// A line typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A question for the backend.
    Ask(String),
    Schema,
    Examples,
    /// Ask example question number N (1-based).
    Example(usize),
    History,
    Clear,
    Health,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// A slash command that could not be understood, with a hint for the user.
    Invalid(String),
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if !line.starts_with('/') {
        return Command::Ask(line.to_string());
    }

    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    match name {
        "/schema" => Command::Schema,
        "/examples" => Command::Examples,
        "/example" => match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(n) => Command::Example(n),
            None => Command::Invalid("Usage: /example <number>".to_string()),
        },
        "/history" => Command::History,
        "/clear" => Command::Clear,
        "/health" => Command::Health,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{other}'. Type /help.")),
    }
}

/// Returns example question `n`, counting from 1.
pub fn example_question(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| EXAMPLE_QUESTIONS.get(i)).copied()
}

/// The in-memory conversation. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn record_question(&mut self, question: &str) {
        self.history.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
            sql: None,
        });
    }

    /// Adds the assistant's side of an exchange. Failures are kept too,
    /// prefixed the way they are shown.
    pub fn record_response(&mut self, response: &QueryResponse) {
        self.history.push(ChatMessage {
            role: Role::Assistant,
            content: response_text(response),
            sql: response.sql_query.clone().filter(|s| !s.is_empty()),
        });
    }
}

fn response_text(response: &QueryResponse) -> String {
    if response.success {
        response.result.clone().unwrap_or_default()
    } else {
        format!(
            "❌ {}",
            response.error.as_deref().unwrap_or("Unknown error")
        )
    }
}

pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type a question, or one of:")?;
    writeln!(out, "  /schema       show the database schema")?;
    writeln!(out, "  /examples     list example questions")?;
    writeln!(out, "  /example N    ask example question N")?;
    writeln!(out, "  /history      show this conversation")?;
    writeln!(out, "  /clear        clear the conversation")?;
    writeln!(out, "  /health       check the backend connection")?;
    writeln!(out, "  /quit         leave")
}

pub fn write_examples(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "💡 Example Questions")?;
    for (i, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, question)?;
    }
    Ok(())
}

pub fn write_schema(out: &mut impl Write, schema: &str) -> io::Result<()> {
    writeln!(out, "📊 {}", schema.trim())
}

/// Prints the answer (or the error) followed by the generated SQL, if any.
pub fn write_response(out: &mut impl Write, response: &QueryResponse) -> io::Result<()> {
    writeln!(out, "{}", response_text(response))?;
    if let Some(sql) = response.sql_query.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "🔍 Generated SQL:")?;
        writeln!(out, "{sql}")?;
    }
    Ok(())
}

pub fn write_history(out: &mut impl Write, history: &[ChatMessage]) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "(no messages yet)");
    }
    for message in history {
        let speaker = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        writeln!(out, "[{speaker}] {}", message.content)?;
        if let Some(sql) = &message.sql {
            writeln!(out, "    SQL: {sql}")?;
        }
    }
    Ok(())
}
