use thiserror::Error;

/// One line of console input, mapped onto a form interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Description(String),
    /// Bare `location` toggles the dropdown; with an argument it selects.
    Location(Option<String>),
    MinSalary(u32),
    MaxSalary(u32),
    /// Replaces the requirement input text.
    Type(String),
    /// Confirms the typed requirement (the "Add" button / Enter).
    Add,
    /// Picks a suggestion by 1-based position or by exact text.
    Pick(String),
    Remove(String),
    Focus,
    Show,
    Submit,
    Dismiss,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{command}' expects a number, got '{value}'")]
    BadNumber {
        command: &'static str,
        value: String,
    },
}

pub const HELP: &str = "\
Commands:
  title <text>          set the job title
  description <text>    set the job description
  location [name]       toggle the location list, or pick a location
  min <k> | max <k>     move the salary handles (thousands)
  req <text>            type into the requirement input
  add                   add the typed requirement
  pick <n|text>         add a suggestion
  remove <text>         remove a requirement
  focus                 focus the requirement input
  show                  redraw the form
  submit                post the job
  dismiss               hide the error banner
  reset                 clear the form
  quit                  leave";

/// Parses one input line. Blank lines redraw the form.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name.to_ascii_lowercase().as_str() {
        "" | "show" => Command::Show,
        "title" => Command::Title(rest.to_string()),
        "description" | "desc" => Command::Description(rest.to_string()),
        "location" | "loc" => Command::Location(arg),
        "min" => Command::MinSalary(parse_number("min", rest)?),
        "max" => Command::MaxSalary(parse_number("max", rest)?),
        "req" => Command::Type(rest.to_string()),
        "add" => Command::Add,
        "pick" => Command::Pick(arg.ok_or(CommandError::MissingArgument("pick"))?),
        "remove" | "rm" => Command::Remove(arg.ok_or(CommandError::MissingArgument("remove"))?),
        "focus" => Command::Focus,
        "submit" => Command::Submit,
        "dismiss" => Command::Dismiss,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn parse_number(command: &'static str, raw: &str) -> Result<u32, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    raw.parse::<u32>().map_err(|_| CommandError::BadNumber {
        command,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_commands_keep_inner_spacing() {
        assert_eq!(
            parse_command("title Senior  Rust Engineer").unwrap(),
            Command::Title("Senior  Rust Engineer".to_string())
        );
        assert_eq!(
            parse_command("desc Build things").unwrap(),
            Command::Description("Build things".to_string())
        );
    }

    #[test]
    fn test_title_without_text_clears() {
        assert_eq!(parse_command("title").unwrap(), Command::Title(String::new()));
    }

    #[test]
    fn test_location_with_and_without_argument() {
        assert_eq!(parse_command("location").unwrap(), Command::Location(None));
        assert_eq!(
            parse_command("loc New York, NY").unwrap(),
            Command::Location(Some("New York, NY".to_string()))
        );
    }

    #[test]
    fn test_salary_numbers() {
        assert_eq!(parse_command("min 70").unwrap(), Command::MinSalary(70));
        assert_eq!(parse_command("MAX 180").unwrap(), Command::MaxSalary(180));
        assert_eq!(
            parse_command("min lots"),
            Err(CommandError::BadNumber {
                command: "min",
                value: "lots".to_string()
            })
        );
        assert_eq!(
            parse_command("max"),
            Err(CommandError::MissingArgument("max"))
        );
    }

    #[test]
    fn test_requirement_commands() {
        assert_eq!(
            parse_command("req type").unwrap(),
            Command::Type("type".to_string())
        );
        assert_eq!(parse_command("add").unwrap(), Command::Add);
        assert_eq!(
            parse_command("pick 2").unwrap(),
            Command::Pick("2".to_string())
        );
        assert_eq!(
            parse_command("rm CI/CD").unwrap(),
            Command::Remove("CI/CD".to_string())
        );
        assert_eq!(
            parse_command("pick"),
            Err(CommandError::MissingArgument("pick"))
        );
    }

    #[test]
    fn test_blank_line_redraws() {
        assert_eq!(parse_command("   ").unwrap(), Command::Show);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("publish now"),
            Err(CommandError::Unknown("publish".to_string()))
        );
    }
}
