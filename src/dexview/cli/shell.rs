//! Interactive browse shell.
//!
//! One line of input is one UI event:
//!
//! - a number (`25` or `#25`) selects that card and starts a detail load
//! - `:r` / `:reload` reloads the catalog
//! - `:h` / `:help` prints the key summary
//! - `:q` / `:quit` exits
//! - end of input exits once pending detail loads have reported
//! - anything else becomes the search query; an empty line clears it
//!
//! Detail loads run in the background. Their replies arrive on a channel that
//! the loop polls alongside stdin, so the user can keep typing while a fetch
//! is in flight. Only the reply for the latest selection is shown.

use super::render::{render_cards, render_detail, render_messages, render_status};
use dexview::controller::{CatalogController, DetailOutcome, DetailReply};
use dexview::error::Result;
use dexview::source::EntitySource;
use dexview::view::Message;
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "Type to search, a number to select, :r to reload, :q to quit.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Quit,
    Reload,
    Help,
    Select(String),
    Query(String),
}

pub fn parse_input(line: &str) -> ShellInput {
    let trimmed = line.trim();
    match trimmed {
        ":q" | ":quit" => ShellInput::Quit,
        ":r" | ":reload" => ShellInput::Reload,
        ":h" | ":help" => ShellInput::Help,
        _ => {
            let candidate = trimmed.strip_prefix('#').unwrap_or(trimmed);
            if !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_digit()) {
                ShellInput::Select(candidate.to_string())
            } else {
                ShellInput::Query(trimmed.to_string())
            }
        }
    }
}

pub async fn run<S: EntitySource + 'static>(
    ctl: &mut CatalogController<S>,
    use_color: Option<bool>,
) -> Result<ExitCode> {
    let (replies_tx, mut replies) = mpsc::unbounded_channel::<DetailReply>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    reload(ctl, use_color).await;
    print_help(use_color);
    prompt();

    let mut end_of_input = false;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    end_of_input = true;
                    break;
                };
                match parse_input(&line) {
                    ShellInput::Quit => break,
                    ShellInput::Help => print_help(use_color),
                    ShellInput::Reload => reload(ctl, use_color).await,
                    ShellInput::Query(query) => {
                        ctl.filter(&query);
                        print_cards(ctl, use_color);
                    }
                    ShellInput::Select(id) => {
                        if ctl.screen().card(&id).is_some() {
                            ctl.spawn_detail(&id, replies_tx.clone());
                            print!("{}", render_detail(&ctl.screen().detail, use_color));
                        } else {
                            let message = Message::warning(format!("No card #{} in the list", id));
                            print!("{}", render_messages(&[message], use_color));
                        }
                    }
                }
                prompt();
            }
            Some(reply) = replies.recv() => {
                if show_reply(ctl, reply, use_color) {
                    prompt();
                }
            }
        }
    }

    // Piped input ends before background fetches do. Every spawned task holds
    // a sender clone, so the channel closes once the last one has replied.
    if end_of_input {
        drop(replies_tx);
        while let Some(reply) = replies.recv().await {
            show_reply(ctl, reply, use_color);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Applies a detail reply and prints the panel unless the reply was stale.
fn show_reply<S: EntitySource>(
    ctl: &mut CatalogController<S>,
    (ticket, result): DetailReply,
    use_color: Option<bool>,
) -> bool {
    if ctl.finish_detail(ticket, result) != DetailOutcome::Applied {
        return false;
    }
    println!();
    print!("{}", render_detail(&ctl.screen().detail, use_color));
    true
}

async fn reload<S: EntitySource>(ctl: &mut CatalogController<S>, use_color: Option<bool>) {
    ctl.begin_catalog_load();
    eprint!("{}", render_status(ctl.screen(), use_color));
    let result = ctl.source().fetch_listing().await;
    if ctl.finish_catalog_load(result).is_err() {
        eprint!("{}", render_status(ctl.screen(), use_color));
        return;
    }
    print_cards(ctl, use_color);
}

fn print_cards<S: EntitySource>(ctl: &mut CatalogController<S>, use_color: Option<bool>) {
    let screen = ctl.screen();
    print!("{}", render_cards(&screen.cards, &screen.query, use_color));
    print!(
        "{}",
        render_messages(&ctl.screen_mut().take_messages(), use_color)
    );
}

fn print_help(use_color: Option<bool>) {
    print!("{}", render_messages(&[Message::info(HELP)], use_color));
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
