//! Line-oriented interactive mode.
//!
//! Each accepted command is one session transition; the projected state is
//! re-rendered after every command so the user always sees the current form.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::api::{ApiClient, DocumentHandle, HttpTransport};
use crate::cli::Cli;
use crate::error::Result;
use crate::session::{Session, render};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

const HELP: &str = "Commands:\n  \
    file <path>      select a PDF document\n  \
    clear            deselect the document\n  \
    add [text]       add a rule (max 10)\n  \
    edit <n> <text>  replace rule n\n  \
    rm <n>           remove rule n (min 1)\n  \
    submit           send the document and rules for checking\n  \
    reset            restore the default form\n  \
    health           probe the analysis service\n  \
    help             show this help\n  \
    quit             leave interactive mode";

pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            super::report_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> Result<i32> {
    let endpoint = super::resolve_endpoint(cli)?;
    let client = ApiClient::new(endpoint);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl(stdin.lock(), stdout.lock(), &client)
}

enum Flow {
    Continue,
    Quit,
}

pub(crate) fn repl<R: BufRead, W: Write, T: HttpTransport>(
    mut input: R,
    mut output: W,
    client: &ApiClient<T>,
) -> Result<i32> {
    let mut session = Session::new();
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render(&session))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_command(line, &mut session, &mut output, client)? {
            Flow::Quit => break,
            Flow::Continue => {}
        }
        write!(output, "{}", render(&session))?;
    }

    Ok(EXIT_SUCCESS)
}

fn handle_command<W: Write, T: HttpTransport>(
    line: &str,
    session: &mut Session,
    output: &mut W,
    client: &ApiClient<T>,
) -> Result<Flow> {
    let (command, rest) = split_command(line);

    match command {
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => writeln!(output, "{HELP}")?,
        "file" => select_file(session, output, rest)?,
        "clear" => session.clear_document(),
        "add" => add_rule(session, output, rest)?,
        "edit" => edit_rule(session, output, rest)?,
        "rm" => remove_rule(session, output, rest)?,
        "submit" => session.submit(client),
        "reset" => session.reset(),
        "health" => match client.health_check() {
            Ok(body) => writeln!(output, "{body}")?,
            Err(e) => writeln!(output, "Health check failed: {e}")?,
        },
        _ => writeln!(output, "Unknown command: {command} (try 'help')")?,
    }

    Ok(Flow::Continue)
}

fn split_command(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()))
}

fn select_file<W: Write>(session: &mut Session, output: &mut W, rest: &str) -> Result<()> {
    if rest.is_empty() {
        writeln!(output, "Usage: file <path>")?;
        return Ok(());
    }
    match DocumentHandle::from_path(Path::new(rest)) {
        Ok(document) => session.select_document(document),
        Err(e) => writeln!(output, "{e}")?,
    }
    Ok(())
}

fn add_rule<W: Write>(session: &mut Session, output: &mut W, rest: &str) -> Result<()> {
    if !session.add_rule() {
        writeln!(output, "Rule limit reached ({})", crate::validation::MAX_RULES)?;
    } else if !rest.is_empty() {
        let last = session.rules().len() - 1;
        session.edit_rule(last, rest);
    }
    Ok(())
}

fn parse_edit(rest: &str) -> Option<(usize, &str)> {
    let (index, text) = rest.split_once(char::is_whitespace)?;
    Some((index.parse().ok()?, text.trim()))
}

fn edit_rule<W: Write>(session: &mut Session, output: &mut W, rest: &str) -> Result<()> {
    match parse_edit(rest) {
        Some((position, text)) if position >= 1 && position <= session.rules().len() => {
            session.edit_rule(position - 1, text);
        }
        _ => writeln!(output, "Usage: edit <n> <text> (n in 1..={})", session.rules().len())?,
    }
    Ok(())
}

fn remove_rule<W: Write>(session: &mut Session, output: &mut W, rest: &str) -> Result<()> {
    match rest.parse::<usize>() {
        Ok(position) if position >= 1 => {
            if !session.remove_rule(position - 1) {
                writeln!(output, "Cannot remove rule {position}")?;
            }
        }
        _ => writeln!(output, "Usage: rm <n>")?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
