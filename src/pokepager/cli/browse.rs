//! Interactive browsing: one command per line on stdin.
//!
//! The loop owns the pager exclusively, so a command is only read after the
//! previous load has committed. Disabled commands are acknowledged and ignored.

use super::render::{print_messages, render_help, render_page, Message};
use super::setup::AppContext;
use pokepager::error::Result;
use pokepager::lookup::RecordLookup;
use pokepager::model::PageOutcome;
use pokepager::pager::{PageView, Pager};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Start,
    Next,
    Prev,
    Quit,
}

impl BrowseCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "s" | "start" => Some(Self::Start),
            "n" | "next" => Some(Self::Next),
            "p" | "prev" => Some(Self::Prev),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut session = ctx.open_session().await?;
    let pager = &mut session.pager;

    pager.reset().await?;
    draw(pager, ctx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt();
            continue;
        }
        match BrowseCommand::parse(&line) {
            Some(BrowseCommand::Quit) => break,
            Some(command) => {
                if apply(pager, command).await? == PageOutcome::Loaded {
                    draw(pager, ctx);
                } else {
                    print_messages(&[Message::info(unchanged_note(command))]);
                }
            }
            None => {
                print_messages(&[Message::warning(format!(
                    "Unknown command: {}",
                    line.trim()
                ))]);
                println!("{}", render_help(pager.nav(), &ctx.render));
            }
        }
        prompt();
    }
    Ok(())
}

pub async fn apply<L: RecordLookup>(
    pager: &mut Pager<L>,
    command: BrowseCommand,
) -> Result<PageOutcome> {
    match command {
        BrowseCommand::Start => pager.reset().await,
        BrowseCommand::Next => pager.advance().await,
        BrowseCommand::Prev => pager.retreat().await,
        BrowseCommand::Quit => Ok(PageOutcome::Unchanged),
    }
}

fn unchanged_note(command: BrowseCommand) -> &'static str {
    match command {
        BrowseCommand::Next => "Already on the last page.",
        BrowseCommand::Prev => "Already on the first page.",
        _ => "Nothing to do.",
    }
}

fn draw<L: RecordLookup>(pager: &Pager<L>, ctx: &AppContext) {
    let view = PageView::from(pager);
    println!(
        "{}",
        render_page(&view, pager.index().is_fallback(), true, &ctx.render)
    );
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
