//! Line-driven console front end for the job post form.
//!
//! Reads commands from any async line source, applies them to a `JobPostForm`
//! and redraws the form after every command and when the success banner expires.

pub mod command;

use std::fmt::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::board_client::JobBoard;
use crate::errors::SubmitError;
use crate::form::submission::{wait_until, Banner};
use crate::form::JobPostForm;

use command::{parse_command, Command, HELP};

/// Runs until the input ends or a `quit` command arrives.
pub async fn run<R, W>(
    form: &mut JobPostForm,
    board: &dyn JobBoard,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(render(form).as_bytes()).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => command,
                    Err(e) => {
                        output.write_all(format!("! {e}\n").as_bytes()).await?;
                        continue;
                    }
                };
                let mut screen = String::new();
                if let Some(note) = apply(form, board, command).await {
                    screen.push_str(&note);
                    screen.push('\n');
                }
                screen.push_str(&render(form));
                output.write_all(screen.as_bytes()).await?;
            }
            _ = wait_until(form.banner_deadline()) => {
                form.tick();
                output.write_all(render(form).as_bytes()).await?;
            }
        }
        output.flush().await?;
    }

    output.flush().await?;
    Ok(())
}

/// Applies one command. Returns a note to print above the redrawn form, if any.
async fn apply(form: &mut JobPostForm, board: &dyn JobBoard, command: Command) -> Option<String> {
    match command {
        Command::Title(text) => form.set_title(&text),
        Command::Description(text) => form.set_description(&text),
        Command::Location(None) => form.toggle_location_dropdown(),
        Command::Location(Some(name)) => {
            if let Err(e) = form.select_location(&name) {
                return Some(format!("! {e}"));
            }
        }
        Command::MinSalary(v) => form.set_min_salary(v),
        Command::MaxSalary(v) => form.set_max_salary(v),
        Command::Type(text) => form.set_requirement_text(&text),
        Command::Add => {
            form.commit_requirement_text();
        }
        Command::Pick(choice) => {
            let suggestions = form.suggestions();
            let tag = match choice.parse::<usize>() {
                Ok(n) if (1..=suggestions.len()).contains(&n) => suggestions[n - 1].to_string(),
                _ => choice,
            };
            if !form.add_requirement(&tag) {
                return Some(format!("! '{tag}' was not added"));
            }
        }
        Command::Remove(tag) => {
            if !form.remove_requirement(&tag) {
                return Some(format!("! '{tag}' is not a requirement"));
            }
        }
        Command::Focus => form.focus_requirement_input(),
        Command::Submit => match form.submit(board).await {
            Ok(_) | Err(SubmitError::Invalid(_)) | Err(SubmitError::Board(_)) => {}
            Err(e) => debug!("Submit not started: {e}"),
        },
        Command::Dismiss => form.dismiss_error(),
        Command::Reset => form.reset(),
        Command::Help => return Some(HELP.to_string()),
        Command::Show | Command::Quit => {}
    }
    None
}

/// Plain-text snapshot of the form.
pub fn render(form: &JobPostForm) -> String {
    let draft = form.draft();
    let errors = form.errors();
    let mut out = String::new();

    let _ = writeln!(out, "== Post a New Job ==");
    let _ = writeln!(out, "Title:        {}", draft.title);
    let _ = writeln!(out, "Description:  {}", draft.description);
    let _ = writeln!(
        out,
        "Location:     {}",
        draft.location.as_deref().unwrap_or("Select a location")
    );
    if form.location_dropdown_open() {
        for option in form.location_options() {
            let _ = writeln!(out, "    - {option}");
        }
    }
    let _ = writeln!(out, "Salary:       {}", draft.salary.label());
    let _ = writeln!(
        out,
        "Requirements: [{}]",
        draft.requirements.iter().collect::<Vec<_>>().join("] [")
    );
    let _ = writeln!(out, "  > {}", form.requirement_text());
    if form.suggestions_visible() {
        for (i, suggestion) in form.suggestions().iter().enumerate() {
            let _ = writeln!(out, "    {}. {suggestion}", i + 1);
        }
    }
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "! {}: {message}", field.as_str());
    }
    let _ = writeln!(
        out,
        "{}",
        if form.can_submit() {
            "[ Post Job ]"
        } else {
            "[ Posting Job... ]"
        }
    );
    match form.banner() {
        Some(Banner::Success(message)) => {
            let _ = writeln!(out, "+ {message}");
        }
        Some(Banner::Error(message)) => {
            let _ = writeln!(out, "x {message}");
        }
        None => {}
    }
    out
}
