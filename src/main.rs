use std::io::{self, BufRead, Write};
use dotenv::dotenv;
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use gpacalc::models::{ClassificationScheme, Subject};
use gpacalc::utils::calculator::{summarize, weighted_mean};
use gpacalc::utils::commands::{execute, parse_command, Outcome, HELP};
use gpacalc::utils::config::{load_subjects, Settings};
use gpacalc::utils::entries::sample_subjects;
use gpacalc::utils::report::render_report;

// Recomputes everything from the current list and prints it.
fn show(subjects: &[Subject], scheme: ClassificationScheme) {
    let summary = summarize(subjects, scheme);
    if !subjects.is_empty() && weighted_mean(subjects).is_none() {
        warn!("Overall percentage is undefined for the current list, showing 0 or a partial average");
    }
    println!("{}", render_report(subjects, &summary));
}

fn main() {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    // Reads scheme, subjects file and log level from the environment.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return;
        }
    };

    // Initializes logging with simplelog to the terminal with mixed output and automatic color support.
    if let Err(e) = TermLogger::init(
        settings.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger could not be initialised: {}", e);
    }

    // Starts from the subjects file when one is configured, otherwise from the sample list.
    let mut subjects = match &settings.subjects_file {
        Some(path) => match load_subjects(path) {
            Ok(subjects) => {
                info!("Loaded {} subjects from {}", subjects.len(), path.display());
                subjects
            }
            Err(e) => {
                error!("Error loading subjects: {:#}", e);
                return;
            }
        },
        None => sample_subjects(),
    };
    let mut scheme = settings.scheme;

    // Flags entries that would make the average meaningless.
    for subject in &subjects {
        if let Err(e) = subject.validate() {
            warn!("{}", e);
        }
    }

    info!("Starting with scheme {} and {} subjects", scheme, subjects.len());
    show(&subjects, scheme);
    println!("{}", HELP);

    // Reads commands until end of input, recomputing after each one.
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("{:#}", e);
                continue;
            }
        };

        match execute(command, &mut subjects, &mut scheme) {
            Ok(Outcome::Changed) | Ok(Outcome::Unchanged) => show(&subjects, scheme),
            Ok(Outcome::Help) => println!("{}", HELP),
            Ok(Outcome::Quit) => break,
            Err(e) => warn!("{:#}", e),
        }
    }

    info!("Session ended with {} subjects", subjects.len());
}
