//! Interactive shell
//!
//! Reads one command per line and dispatches it like a one-shot
//! invocation. Errors are reported and the shell keeps going; only `exit`
//! or end of input stops it.

use clap::Parser;

use crate::cli::{Command, ShellLine, split_words};
use crate::context::AppContext;
use crate::error::DeskResult;
use crate::notify::Notice;
use crate::views::{self, Flow};

/// Outcome of parsing one typed line
#[derive(Debug)]
enum Parsed {
    Blank,
    Command(Command),
    /// Help text or a usage error, already formatted by clap
    Message(clap::Error),
    Invalid(String),
}

fn parse_line(line: &str) -> Parsed {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(message) => return Parsed::Invalid(message),
    };
    if words.is_empty() {
        return Parsed::Blank;
    }
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => Parsed::Command(parsed.command),
        Err(e) => Parsed::Message(e),
    }
}

pub async fn run(ctx: &mut AppContext) -> DeskResult<()> {
    tracing::info!(signed_in = ctx.session.is_authenticated(), "Shell started");
    views::menu(ctx);
    println!("Type `help` for commands, `exit` to quit.");

    while let Some(line) = ctx.prompt.read_line("desk> ")? {
        let command = match parse_line(&line) {
            Parsed::Blank => continue,
            Parsed::Command(command) => command,
            Parsed::Message(e) => {
                e.print()?;
                continue;
            }
            Parsed::Invalid(message) => {
                Notice::warning(message).emit();
                continue;
            }
        };

        tracing::debug!(?command, "Shell command");
        match views::run(ctx, command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                tracing::warn!(code = %e.code(), error = %e, "Command failed");
                Notice::error(e.to_string()).emit();
            }
        }
    }

    tracing::info!("Shell closed");
    Ok(())
}
