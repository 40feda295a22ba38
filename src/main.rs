//! sheetline - Entry Point

use clap::Parser;
use serde::Serialize;
use sheetline::model::{AppError, ButtonSpec, SheetCategory, SheetConfig, StopPolicy};
use sheetline::state::SheetOutcome;
use sheetline::view::{ColorConfig, ViewOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Exit code when a button was chosen.
const EXIT_CHOSEN: u8 = 0;

/// Exit code when Esc/q dismissed the sheet without a choice.
const EXIT_DISMISSED: u8 = 1;

/// Exit code when startup or the terminal failed.
const EXIT_FAILURE: u8 = 2;

/// Exit code for Ctrl+C, matching a shell's SIGINT convention.
const EXIT_INTERRUPTED: u8 = 130;

/// sheetline - bottom sheet dialogs that size themselves to their content
#[derive(Parser, Debug)]
#[command(name = "sheetline")]
#[command(version)]
#[command(about = "Show a bottom sheet dialog in the terminal and print the chosen button")]
pub struct Args {
    /// Body text file (`-` reads stdin)
    pub file: Option<PathBuf>,

    /// Sheet title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Category icon: info, error, confirm, help, success, location,
    /// calendar, call, phone-alert, attachment, reminder, none
    #[arg(short, long)]
    pub category: Option<SheetCategory>,

    /// Body paragraph (repeatable, appended after the file)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// Button as LABEL or LABEL:role, role one of primary, destructive,
    /// cancel, default (repeatable, shown top to bottom)
    #[arg(short, long = "button")]
    pub buttons: Vec<ButtonSpec>,

    /// Ignore Esc and q; the sheet closes only through a button or Ctrl+C
    #[arg(long)]
    pub no_dismiss: bool,

    /// Hide the grabber bar
    #[arg(long)]
    pub hide_grabber: bool,

    /// Stops offered to the terminal: exact or include-medium
    #[arg(long)]
    pub stop_policy: Option<StopPolicy>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result printed with `--json`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
enum Choice<'a> {
    Button { button: &'a str, index: usize },
    Dismissed { dismissed: bool },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("sheetline: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: Args) -> Result<u8, AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = sheetline::config::load_config_with_precedence(args.config.clone())?;
        let merged = sheetline::config::merge_config(config_file)?;
        let with_env = sheetline::config::apply_env_overrides(merged)?;

        // Flags only override when set
        let dismiss_override = args.no_dismiss.then_some(false);
        let grabber_override = args.hide_grabber.then_some(false);

        sheetline::config::apply_cli_overrides(
            with_env,
            args.category,
            args.stop_policy,
            dismiss_override,
            grabber_override,
        )
    };

    sheetline::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let body = sheetline::source::read_body(args.file.as_deref(), &args.messages)?;
    let labels: Vec<String> = args.buttons.iter().map(|b| b.title.clone()).collect();

    let mut sheet = SheetConfig::new(args.title.unwrap_or_default())
        .category(config.category)
        .body(body)
        .prefers_grabber_visible(config.prefers_grabber_visible)
        .interactive_dismiss(config.interactive_dismiss)
        .corner_radius(config.corner_radius)
        .stop_policy(config.stop_policy);
    for spec in args.buttons {
        sheet = sheet.button(spec.into_button(|| {}));
    }

    let options = ViewOptions::new(
        config.max_detent_fraction,
        ColorConfig::from_env_and_args(args.no_color),
    );
    let outcome = sheetline::view::run_sheet(sheet, options)?;

    info!(?outcome, "Sheet closed");

    Ok(report(outcome, &labels, args.json))
}

/// Print the outcome to stdout and pick the exit code.
fn report(outcome: SheetOutcome, labels: &[String], json: bool) -> u8 {
    match outcome {
        SheetOutcome::Activated(index) => {
            let label = labels.get(index).map(String::as_str).unwrap_or_default();
            print_choice(
                &Choice::Button {
                    button: label,
                    index,
                },
                json,
            );
            EXIT_CHOSEN
        }
        SheetOutcome::Dismissed | SheetOutcome::Pending => {
            if json {
                print_choice(&Choice::Dismissed { dismissed: true }, json);
            }
            EXIT_DISMISSED
        }
        SheetOutcome::Interrupted => EXIT_INTERRUPTED,
    }
}

fn print_choice(choice: &Choice<'_>, json: bool) {
    if json {
        println!("{}", render_json(choice));
    } else if let Choice::Button { button, .. } = choice {
        println!("{button}");
    }
}

fn render_json(choice: &Choice<'_>) -> String {
    // Plain enum of strings and integers
    serde_json::to_string(choice).unwrap_or_default()
}
