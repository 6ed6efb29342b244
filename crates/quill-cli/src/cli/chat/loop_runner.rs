//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: API key resolution, provider and
//! service construction, welcome banner, input loop with slash commands,
//! template runs, transcript save/load, and model switching.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use console::style;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use secrecy::SecretString;
use tracing::warn;

use quill_core::chat::ChatService;
use quill_core::template::TemplateEngine;
use quill_infra::llm::OpenRouterProvider;
use quill_infra::secret;
use quill_infra::storage::TranscriptStore;
use quill_types::config::{AssistantConfig, MODEL_CATALOG};
use quill_types::history::{ChatTurn, TurnRole};

use crate::cli::style as out;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};

type Session = ChatService<OpenRouterProvider>;

/// Resolve the OpenRouter API key: environment first, then an
/// interactive prompt.
fn resolve_api_key() -> anyhow::Result<SecretString> {
    if let Some(key) = secret::api_key_from_env() {
        return Ok(key);
    }

    out::warning(&format!(
        "{} not set in the environment.",
        secret::API_KEY_ENV_VAR
    ));
    let key: String = Password::new()
        .with_prompt("OpenRouter API key")
        .interact()
        .context("could not read API key")?;
    if key.is_empty() {
        anyhow::bail!("an API key is required to chat");
    }
    Ok(SecretString::from(key))
}

fn thinking_spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop.
pub async fn run_chat(model: Option<String>) -> anyhow::Result<()> {
    let api_key = resolve_api_key()?;

    let config = match model {
        Some(m) => AssistantConfig::with_model(m),
        None => AssistantConfig::default(),
    };
    let max_history = config.max_history;

    let provider = OpenRouterProvider::new(&api_key, config.model.clone());
    let mut service = ChatService::new(provider, config);
    let engine = TemplateEngine::new();
    let store_dir =
        TranscriptStore::default_dir().context("platform reports no data directory")?;
    let store = TranscriptStore::new(store_dir);

    print_welcome_banner(service.model(), max_history);

    loop {
        let prompt = format!("{}", style("You >").green().bold());
        let line: String = match Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => {
                println!();
                out::info("Session ended.");
                break;
            }
        };

        let text = line.trim().to_string();
        if text.is_empty() {
            out::warning("Empty message. Type something, or /help.");
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Template => run_template(&mut service, &engine).await,
                ChatCommand::Templates => {
                    println!();
                    for name in engine.list_names() {
                        println!("  {}", style(name).cyan());
                    }
                    println!();
                }
                ChatCommand::Save(name) => save_transcript(&service, &store, &name).await,
                ChatCommand::Load(name) => load_transcript(&mut service, &store, &name).await,
                ChatCommand::Saved => list_transcripts(&store).await,
                ChatCommand::Stats => print_stats(&service),
                ChatCommand::History => print_history(&service.history()),
                ChatCommand::Clear => {
                    service.clear();
                    out::success("History cleared.");
                }
                ChatCommand::Model => choose_model(&mut service),
                ChatCommand::Exit => {
                    out::info("Goodbye.");
                    break;
                }
                ChatCommand::Unknown(msg) => out::error(&msg),
            }
            continue;
        }

        let spinner = thinking_spinner("thinking...");
        match service.send(&text).await {
            Ok(reply) => {
                spinner.finish_and_clear();
                print_reply(&reply);
            }
            Err(e) => {
                spinner.finish_and_clear();
                warn!(error = %e, "chat completion failed");
                out::error(&format!("Model call failed: {e}"));
            }
        }
    }

    Ok(())
}

fn print_reply(reply: &str) {
    println!();
    println!("  {} {}", style("AI  >").cyan().bold(), reply.trim());
    println!();
}

/// Interactive template run: pick a template, collect its parameters,
/// send the rendered prompt as a one-shot completion.
async fn run_template(service: &mut Session, engine: &TemplateEngine) {
    let names = engine.list_names();
    let picked = match Select::new()
        .with_prompt("Template")
        .items(&names)
        .default(0)
        .interact()
    {
        Ok(idx) => names[idx],
        Err(_) => {
            out::info("Cancelled.");
            return;
        }
    };

    let language: String = match Input::new()
        .with_prompt("Language (e.g. python, rust)")
        .interact_text()
    {
        Ok(language) => language,
        Err(_) => {
            out::info("Cancelled.");
            return;
        }
    };

    println!("  {}", style("Paste the code, finish with an empty line:").dim());
    let code = read_code_block();
    if code.trim().is_empty() {
        out::warning("No code entered.");
        return;
    }

    let mut parameters = HashMap::new();
    parameters.insert("language".to_string(), language);
    parameters.insert("code".to_string(), code);

    let rendered = match engine.render(picked, &parameters) {
        Ok(rendered) => rendered,
        Err(e) => {
            out::error(&e.to_string());
            return;
        }
    };

    let spinner = thinking_spinner("generating...");
    match service.send_prompt(&rendered).await {
        Ok(reply) => {
            spinner.finish_and_clear();
            print_reply(&reply);
        }
        Err(e) => {
            spinner.finish_and_clear();
            warn!(error = %e, "template completion failed");
            out::error(&format!("Template run failed: {e}"));
        }
    }
}

/// Read stdin lines until the first empty line (or EOF).
fn read_code_block() -> String {
    let mut lines = Vec::new();
    for line in std::io::stdin().lines() {
        match line {
            Ok(l) if l.is_empty() => break,
            Ok(l) => lines.push(l),
            Err(_) => break,
        }
    }
    lines.join("\n")
}

async fn save_transcript(service: &Session, store: &TranscriptStore, name: &str) {
    let transcript = match service.serialize() {
        Ok(json) => json,
        Err(e) => {
            out::error(&format!("Could not serialize conversation: {e}"));
            return;
        }
    };
    match store.save(name, &transcript).await {
        Ok(path) => out::success(&format!("Conversation saved to {}", path.display())),
        Err(e) => out::error(&format!("Could not save: {e}")),
    }
}

async fn load_transcript(service: &mut Session, store: &TranscriptStore, name: &str) {
    let transcript = match store.load(name).await {
        Ok(text) => text,
        Err(e) => {
            out::error(&e.to_string());
            return;
        }
    };
    match service.deserialize(&transcript) {
        Ok(()) => {
            out::success(&format!(
                "Loaded '{name}' ({} turns).",
                service.history().len()
            ));
        }
        // The in-memory conversation is untouched on a bad file.
        Err(e) => {
            warn!(transcript = name, error = %e, "transcript rejected");
            out::error(&format!("Could not load '{name}': {e}"));
        }
    }
}

async fn list_transcripts(store: &TranscriptStore) {
    match store.list().await {
        Ok(names) if names.is_empty() => out::info("No saved conversations yet."),
        Ok(names) => {
            println!();
            for name in names {
                println!("  {}", style(name).cyan());
            }
            println!();
        }
        Err(e) => out::error(&format!("Could not list saved conversations: {e}")),
    }
}

fn print_stats(service: &Session) {
    use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

    let stats = service.stats();
    let usage = service.usage();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.add_row(vec!["Model".to_string(), service.model().to_string()]);
    table.add_row(vec!["Total turns".to_string(), stats.total_turns.to_string()]);
    table.add_row(vec!["You".to_string(), stats.user_turns.to_string()]);
    table.add_row(vec![
        "Assistant".to_string(),
        stats.assistant_turns.to_string(),
    ]);
    table.add_row(vec![
        "Window".to_string(),
        format!(
            "{}/{} ({:.0}%)",
            stats.total_turns,
            stats.max_history,
            stats.utilization() * 100.0
        ),
    ]);
    table.add_row(vec![
        "Tokens".to_string(),
        format!("{} in / {} out", usage.input_tokens, usage.output_tokens),
    ]);
    println!("{table}");
}

fn print_history(turns: &[ChatTurn]) {
    if turns.is_empty() {
        out::info("Nothing yet.");
        return;
    }
    println!();
    for turn in turns {
        let label = match turn.role {
            TurnRole::User => style("You >").green().bold(),
            TurnRole::Assistant => style("AI  >").cyan().bold(),
        };
        println!("  {} {}", label, turn.content);
    }
    println!();
}

fn choose_model(service: &mut Session) {
    let items: Vec<String> = MODEL_CATALOG
        .iter()
        .map(|m| format!("{} ({})", m.label, m.id))
        .collect();
    let current = MODEL_CATALOG
        .iter()
        .position(|m| m.id == service.model())
        .unwrap_or(0);

    match Select::new()
        .with_prompt("Switch model")
        .items(&items)
        .default(current)
        .interact()
    {
        Ok(idx) => {
            service.set_model(MODEL_CATALOG[idx].id);
            out::success(&format!("Now chatting with {}", MODEL_CATALOG[idx].id));
        }
        Err(_) => out::info("Model unchanged."),
    }
}
