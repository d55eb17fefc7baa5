//! # text2sql-chat
//!
//! A terminal chat client for the `text2sql-server`. [`run`] drives a whole
//! session over any line-based input and any output, which is how the binary
//! and the tests use it.

pub mod api_client;
pub mod chat;

use crate::{
    api_client::ApiClient,
    chat::{
        example_question, parse_command, write_examples, write_help, write_history,
        write_response, write_schema, ChatSession, Command,
    },
};
use anyhow::{bail, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

const PROMPT: &str = "> ";

/// Runs a chat session until `/quit` or the end of `input`.
///
/// Fails without reading any input when the backend is not healthy.
pub async fn run<R, W>(client: &ApiClient, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !client.check_health().await {
        writeln!(
            out,
            "🔴 Backend service is not available. Please check your backend connection."
        )?;
        writeln!(out, "Trying to connect to: {}", client.base_url())?;
        bail!("backend at {} is not available", client.base_url());
    }

    writeln!(out, "🧠 Text-to-SQL Chatbot")?;
    writeln!(
        out,
        "Ask your question in natural language, and get a SQL result from the Chinook database."
    )?;
    writeln!(out, "🟢 Backend Connected ({})", client.base_url())?;
    show_schema(client, out).await?;
    write_examples(out)?;
    writeln!(out, "Type /help for commands.")?;

    let mut session = ChatSession::new();
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Ask(question) => ask(client, &mut session, &question, out).await?,
            Command::Example(n) => match example_question(n) {
                Some(question) => {
                    writeln!(out, "{question}")?;
                    ask(client, &mut session, question, out).await?;
                }
                None => writeln!(out, "There is no example question {n}.")?,
            },
            Command::Schema => show_schema(client, out).await?,
            Command::Examples => write_examples(out)?,
            Command::History => write_history(out, session.history())?,
            Command::Clear => {
                session.clear();
                writeln!(out, "🗑️ Chat history cleared.")?;
            }
            Command::Health => {
                if client.check_health().await {
                    writeln!(out, "🟢 Backend Connected")?;
                } else {
                    writeln!(out, "🔴 Backend Disconnected")?;
                }
            }
            Command::Help => write_help(out)?,
            Command::Invalid(hint) => writeln!(out, "{hint}")?,
            Command::Quit => break,
        }
    }

    info!(messages = session.history().len(), "Chat session ended.");
    Ok(())
}

async fn ask<W: Write>(
    client: &ApiClient,
    session: &mut ChatSession,
    question: &str,
    out: &mut W,
) -> Result<()> {
    session.record_question(question);
    writeln!(out, "Thinking...")?;
    let response = client.query(question).await;
    if !response.success {
        warn!(error = ?response.error, "Question failed.");
    }
    write_response(out, &response)?;
    session.record_response(&response);
    Ok(())
}

async fn show_schema<W: Write>(client: &ApiClient, out: &mut W) -> Result<()> {
    match client.get_schema().await {
        Ok(schema) => write_schema(out, &schema)?,
        Err(e) => {
            warn!("Could not fetch schema: {e}");
            writeln!(out, "Unable to fetch database schema")?;
        }
    }
    Ok(())
}
