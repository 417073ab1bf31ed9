//! # ideaforge
//!
//! Interactive business-idea generator. Collects an industry, budget and
//! tone, asks the generation backend for a structured idea, and keeps
//! history and favorites on disk. A chat assistant answers follow-up
//! questions scoped to a selected idea.

mod commands;
mod render;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use providers::GenerationClient;
use shared::idea::IdeaRequest;
use shared::settings::BackendSettings;
use store::{ChatContextManager, IdeaStore, Persistence};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::commands::{parse, Command, ContextArg, HELP};

fn backend_from_env() -> BackendSettings {
    let mut settings = BackendSettings::default();
    if let Ok(url) = std::env::var("RELAY_URL") {
        // RELAY_URL=direct skips the relay and talks to Gemini itself.
        settings.relay_url = match url.as_str() {
            "direct" => None,
            "" => settings.relay_url,
            _ => Some(url),
        };
    }
    if let Ok(model) = std::env::var("GEMINI_MODEL") {
        settings.gemini_model = model;
    }
    settings.api_key = std::env::var("GEMINI_API_KEY").ok();
    settings
}

fn persistence_from_env() -> Persistence {
    match std::env::var("IDEAFORGE_DATA") {
        Ok(dir) if !dir.is_empty() => Persistence::at(PathBuf::from(dir)),
        _ => Persistence::open_default(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store = IdeaStore::open(persistence_from_env());
    let mut chat = ChatContextManager::new();
    let client = GenerationClient::new(backend_from_env())?;

    println!("ideaforge v{} - type `help` for commands", env!("CARGO_PKG_VERSION"));
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse(&line) else {
            println!("Unrecognized command.\n{HELP}");
            continue;
        };

        match command {
            Command::Generate {
                industry,
                budget,
                tone,
            } => {
                // Input validation happens before any remote call;
                // nothing changes on failure.
                let request = match IdeaRequest::new(&industry, &budget, tone.as_deref()) {
                    Ok(r) => r,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                println!("Generating...");
                match client.generate(&request).await {
                    Ok(fields) => {
                        let idea = store.record_idea(request, fields);
                        println!("{}", render::idea_card(idea));
                    }
                    Err(e) if e.is_timeout() => {
                        println!("The generation service timed out. Please try again.");
                    }
                    Err(e) => {
                        warn!(error = %e, "generation failed");
                        println!("Error generating ideas. Please try again.");
                    }
                }
            }
            Command::Chat(message) => {
                let (snapshot, tail) = chat.begin_user_turn(&message);
                match client.chat_reply(&message, snapshot.as_ref(), &tail).await {
                    Ok(reply) => {
                        chat.push_assistant(&reply);
                        println!("{reply}");
                    }
                    Err(e) => {
                        warn!(error = %e, "chat reply failed");
                        println!("Sorry, I encountered an error. Please try again.");
                    }
                }
            }
            Command::Context(arg) => {
                match arg {
                    ContextArg::Current => match store.current_idea() {
                        Some(idea) => chat.select_current(idea),
                        None => {
                            println!("No current idea yet. Generate one first.");
                            continue;
                        }
                    },
                    ContextArg::None => chat.deselect(),
                    ContextArg::Id(id) => match store.find(id) {
                        Some(idea) => chat.select_history(idea),
                        None => {
                            println!("No idea with id {id} in history.");
                            continue;
                        }
                    },
                }
                println!("{}", chat.describe());
            }
            Command::Fav(id) => {
                if store.find(id).is_none() {
                    println!("No idea with id {id} in history.");
                } else if store.toggle_favorite(id) {
                    println!("Added to favorites!");
                } else {
                    println!("Removed from favorites.");
                }
            }
            Command::Unfav(id) => {
                store.remove_favorite(id);
                println!("Removed from favorites.");
            }
            Command::History(term) => {
                let hits = store.search(store::Collection::History, term.as_deref().unwrap_or(""));
                println!("{}", render::idea_list(&hits));
            }
            Command::Favorites(term) => {
                let hits =
                    store.search(store::Collection::Favorites, term.as_deref().unwrap_or(""));
                println!("{}", render::idea_list(&hits));
            }
            Command::Show(id) => match store.find(id) {
                Some(idea) => println!("{}", render::idea_card(idea)),
                None => println!("No idea with id {id} in history."),
            },
            Command::Export { collection, path } => {
                let (ideas, default_name) = match collection {
                    store::Collection::History => {
                        (store.history(), store::export::HISTORY_EXPORT_NAME)
                    }
                    store::Collection::Favorites => {
                        (store.favorites(), store::export::FAVORITES_EXPORT_NAME)
                    }
                };
                let path = path.unwrap_or_else(|| PathBuf::from(default_name));
                match store::export::export_to_file(ideas, &path) {
                    Ok(()) => println!("Exported {} ideas to {}", ideas.len(), path.display()),
                    Err(e) => println!("Export failed: {e}"),
                }
            }
            Command::Stats => println!("{}", render::stats_line(store.stats())),
            Command::Clear => {
                print!("This cannot be undone. Type `yes` to clear all history: ");
                std::io::stdout().flush()?;
                match lines.next() {
                    Some(Ok(answer)) if answer.trim() == "yes" => {
                        store.clear_all(&mut chat);
                        println!("History cleared.");
                    }
                    _ => println!("Kept everything."),
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}
