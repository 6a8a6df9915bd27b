//! keypad-calc: replay button taps headlessly or run the terminal keypad
//!
//! ```text
//! keypad-calc 5 + 3 =          # prints 8
//! keypad-calc --tape 2 X 3 = = # prints 12, then the tape
//! keypad-calc                  # interactive keypad
//! ```

use std::path::PathBuf;

use clap::Parser;
use keypad_calculator::config::CalculatorConfig;
use keypad_calculator::core::{Button, CalcResult};
use keypad_calculator::driver::{CalculatorDriver, HeadlessDriver};
use keypad_calculator::logging;
use tracing::info;

/// Four-function keypad calculator
#[derive(Debug, Parser)]
#[command(name = "keypad-calc", version, about)]
struct Cli {
    /// JSON config file
    #[arg(short, long, env = "KEYPAD_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the tape after replaying buttons
    #[arg(long)]
    tape: bool,

    /// Button labels to replay (e.g. 5 + 3 =); omit to start the keypad UI
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    buttons: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => logging::init_file_logger(path, cli.verbose)?,
        // The TUI owns the terminal, so it only logs when given a file
        None if !cli.buttons.is_empty() => logging::init_stderr_logger(cli.verbose),
        None => {}
    }

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };

    if cli.buttons.is_empty() {
        return run_interactive(&config);
    }

    print!("{}", replay(&cli, &config)?);
    Ok(())
}

/// Replays the button labels given on the command line and returns what is
/// printed: the final display, then the tape when `--tape` is set
fn replay(cli: &Cli, config: &CalculatorConfig) -> CalcResult<String> {
    let buttons = cli
        .buttons
        .iter()
        .map(|label| label.parse::<Button>())
        .collect::<CalcResult<Vec<_>>>()?;
    info!(count = buttons.len(), "replaying buttons");

    let mut driver = HeadlessDriver::with_config(config);
    let mut output = driver.press_all(&buttons);
    output.push('\n');
    if cli.tape {
        let tape = driver.session().history().export_formatted();
        if !tape.is_empty() {
            output.push_str(&tape);
            output.push('\n');
        }
    }
    Ok(output)
}

#[cfg(feature = "tui")]
fn run_interactive(config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    tui_runner::run(config)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    Err("no buttons given and the keypad UI is not compiled in (enable feature `tui`)".into())
}

#[cfg(feature = "tui")]
mod tui_runner {
    use std::io;

    use crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use keypad_calculator::config::CalculatorConfig;
    use keypad_calculator::tui::{keypad_area, render, CalculatorApp, InputHandler};
    use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
    use tracing::info;

    pub fn run(config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = run_app(&mut terminal, CalculatorApp::with_config(config));

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: ratatui::backend::Backend>(
        terminal: &mut Terminal<B>,
        mut app: CalculatorApp,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let input_handler = InputHandler::new();
        let mut area = Rect::default();
        info!("keypad started");

        while !app.should_quit() {
            terminal.draw(|frame| {
                area = frame.area();
                render(&app, frame);
            })?;

            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input_handler.handle_key(key)
                }
                Event::Mouse(mouse) => {
                    input_handler.handle_mouse(mouse, keypad_area(area, app.show_help()))
                }
                _ => continue,
            };
            app.handle_action(action);
        }

        info!(
            evaluations = app.session().history().len(),
            "keypad closed"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use keypad_calculator::core::evaluator::ClearMode;
    use keypad_calculator::core::CalcError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_parses_hyphenated_labels() {
        let cli = parse(&["keypad-calc", "-v", "5", "-", "3", "="]);
        assert!(cli.verbose);
        assert_eq!(cli.buttons, ["5", "-", "3", "="]);
    }

    #[test]
    fn test_cli_parses_sign_toggle_first() {
        let cli = parse(&["keypad-calc", "-/+", "5"]);
        assert!(!cli.verbose);
        assert_eq!(cli.buttons, ["-/+", "5"]);
    }

    #[test]
    fn test_cli_flags() {
        let cli = parse(&[
            "keypad-calc",
            "--config",
            "calc.json",
            "--log-file",
            "calc.log",
            "--tape",
            "1",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("calc.json")));
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        assert!(cli.tape);
        assert_eq!(cli.buttons, ["1"]);
    }

    #[test]
    fn test_cli_no_buttons() {
        let cli = parse(&["keypad-calc"]);
        assert!(cli.buttons.is_empty());
    }

    #[test]
    fn test_replay_prints_display() {
        let cli = parse(&["keypad-calc", "5", "+", "3", "="]);
        let output = replay(&cli, &CalculatorConfig::default()).unwrap();
        assert_eq!(output, "8\n");
    }

    #[test]
    fn test_replay_with_tape() {
        let cli = parse(&["keypad-calc", "--tape", "2", "X", "3", "=", "="]);
        let output = replay(&cli, &CalculatorConfig::default()).unwrap();
        assert_eq!(output, "12\n2 X 3 = 6\n2 X 6 = 12\n");
    }

    #[test]
    fn test_replay_tape_empty_without_equals() {
        let cli = parse(&["keypad-calc", "--tape", "4", "2"]);
        let output = replay(&cli, &CalculatorConfig::default()).unwrap();
        assert_eq!(output, "42\n");
    }

    #[test]
    fn test_replay_uses_config() {
        let cli = parse(&["keypad-calc", "5", "+", "AC", "3", "="]);
        let keep = replay(&cli, &CalculatorConfig::default()).unwrap();
        assert_eq!(keep, "8\n");
        let all = CalculatorConfig::default().with_clear_mode(ClearMode::All);
        assert_eq!(replay(&cli, &all).unwrap(), "3\n");
    }

    #[test]
    fn test_replay_rejects_unknown_label() {
        let cli = parse(&["keypad-calc", "5", "sqrt", "="]);
        let err = replay(&cli, &CalculatorConfig::default()).unwrap_err();
        assert!(matches!(err, CalcError::UnknownButton(ref label) if label == "sqrt"));
    }
}
