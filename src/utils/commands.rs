use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use crate::models::{ClassificationScheme, Subject, SubjectField};
use crate::utils::entries::{add_entry, remove_entry, update_entry};

// One parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Set { id: u64, field: SubjectField, value: String },
    Remove { id: u64 },
    Scheme(ClassificationScheme),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "Commands:
  add                          append an empty subject
  set <id> <field> <value>     edit name, grade, max, weight or category
  rm <id>                      remove a subject
  scheme <descriptive|letter>  switch the classification scheme
  show                         print the current results
  help                         print this message
  quit                         leave the calculator";

// Parses one input line. `set` keeps everything after the field name as the value, spaces included.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();

    let set_re = Regex::new(r"^set\s+(\d+)\s+(\w+)(?:\s+(.*))?$").context("Failed to build set pattern")?;
    let id_re = Regex::new(r"^(?:rm|remove)\s+(\d+)$").context("Failed to build remove pattern")?;
    let scheme_re = Regex::new(r"^scheme\s+(\S+)$").context("Failed to build scheme pattern")?;

    if let Some(caps) = set_re.captures(line) {
        let id = caps[1].parse::<u64>().context("Subject id is out of range")?;
        let field = caps[2].parse::<SubjectField>()?;
        let value = caps.get(3).map_or("", |m| m.as_str()).to_string();
        return Ok(Command::Set { id, field, value });
    }
    if let Some(caps) = id_re.captures(line) {
        let id = caps[1].parse::<u64>().context("Subject id is out of range")?;
        return Ok(Command::Remove { id });
    }
    if let Some(caps) = scheme_re.captures(line) {
        return Ok(Command::Scheme(caps[1].parse()?));
    }

    match line {
        "add" => Ok(Command::Add),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(anyhow!("Unrecognised command '{}', type 'help' for a list", other)),
    }
}

// What the session loop should do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    Help,
    Quit,
}

// Applies a command to the caller's list. Missing ids are reported as errors, the list stays as is.
pub fn execute(command: Command, subjects: &mut Vec<Subject>, scheme: &mut ClassificationScheme) -> Result<Outcome> {
    debug!("Executing {:?}", command);
    match command {
        Command::Add => {
            let id = add_entry(subjects)?;
            info!("Subject {} added", id);
            Ok(Outcome::Changed)
        }
        Command::Set { id, field, value } => {
            if update_entry(subjects, id, field, &value) {
                Ok(Outcome::Changed)
            } else {
                Err(anyhow!("Could not set {:?} on subject {}", field, id))
            }
        }
        Command::Remove { id } => {
            if remove_entry(subjects, id) {
                info!("Subject {} removed", id);
                Ok(Outcome::Changed)
            } else {
                Err(anyhow!("No subject with id {}", id))
            }
        }
        Command::Scheme(new_scheme) => {
            *scheme = new_scheme;
            info!("Classification scheme set to {}", new_scheme);
            Ok(Outcome::Changed)
        }
        Command::Show => Ok(Outcome::Unchanged),
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
    }
}
