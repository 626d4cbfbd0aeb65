//! Interactive terminal front end.
//!
//! Drives the [`Screen`] state machine: the main menu, and the calculator
//! form with live-formatted date fields. The form keeps its contents between
//! calculations so a rejected entry can be corrected in place.

use anyhow::{Context, Result};
use colored::*;
use console::{Key, Term};
use dialoguer::{Input, Select};

use crate::application::services::InterestService;
use crate::config::Config;
use crate::domain::entities::{CalculationResult, FormatterState, Keystroke, NavigationKey};
use crate::error::AppError;
use crate::presentation::date_field;
use crate::presentation::form::{
    AMOUNT_LABEL, END_DATE_LABEL, RATE_LABEL, START_DATE_LABEL, WarrantForm,
};
use crate::presentation::report::result_lines;
use crate::presentation::screen::{Screen, ScreenEvent};
use crate::utils::date_range::CalendarDayCounter;

/// Runs the interactive calculator until the user chooses Exit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or written to.
pub fn run(config: Config) -> Result<()> {
    TerminalApp::new(config).run()
}

/// Maps a terminal key to a date field keystroke.
///
/// Returns `None` for keys a date field does not react to.
pub fn keystroke_for(key: &Key) -> Option<Keystroke> {
    let keystroke = match key {
        Key::Char(c) => Keystroke::Char(*c),
        Key::Backspace => Keystroke::Navigation(NavigationKey::Backspace),
        Key::Del => Keystroke::Navigation(NavigationKey::Delete),
        Key::ArrowLeft => Keystroke::Navigation(NavigationKey::Left),
        Key::ArrowRight => Keystroke::Navigation(NavigationKey::Right),
        Key::Tab => Keystroke::Navigation(NavigationKey::Tab),
        _ => return None,
    };
    Some(keystroke)
}

struct TerminalApp {
    term: Term,
    config: Config,
    service: InterestService<CalendarDayCounter>,
}

impl TerminalApp {
    fn new(config: Config) -> Self {
        Self {
            term: Term::stdout(),
            config,
            service: InterestService::calendar(),
        }
    }

    fn run(&self) -> Result<()> {
        let mut screen = Screen::default();
        let mut form = self.new_form();
        let mut outcome: Option<Result<CalculationResult, AppError>> = None;

        loop {
            let event = match screen {
                Screen::MainMenu => self.main_menu()?,
                Screen::CalculatorForm => self.calculator_form(&mut form, &mut outcome)?,
            };

            let Some(next) = screen.next(event) else {
                tracing::debug!(?screen, "exiting");
                self.term.clear_screen()?;
                return Ok(());
            };

            if screen == Screen::MainMenu && next == Screen::CalculatorForm {
                form = self.new_form();
                outcome = None;
            }

            if next != screen {
                tracing::debug!(from = ?screen, to = ?next, "screen transition");
            }
            screen = next;
        }
    }

    fn new_form(&self) -> WarrantForm {
        WarrantForm::new(self.config.default_rate.clone())
    }

    fn choose(&self, screen: Screen) -> Result<ScreenEvent> {
        let events = screen.events();
        let labels: Vec<&str> = events.iter().map(|e| e.label()).collect();

        let index = Select::new()
            .items(&labels[..])
            .default(0)
            .interact_on(&self.term)
            .context("Failed to read menu selection")?;

        Ok(events[index])
    }

    fn main_menu(&self) -> Result<ScreenEvent> {
        self.term.clear_screen()?;
        self.term.write_line("")?;
        self.term
            .write_line(&self.config.issuer.bright_blue().bold().to_string())?;
        self.term
            .write_line(&"Warrant Calculator".bright_blue().bold().to_string())?;
        self.term.write_line("")?;

        self.choose(Screen::MainMenu)
    }

    fn calculator_form(
        &self,
        form: &mut WarrantForm,
        outcome: &mut Option<Result<CalculationResult, AppError>>,
    ) -> Result<ScreenEvent> {
        self.term.clear_screen()?;
        self.term
            .write_line(&"Warrant Calculation".bright_white().bold().to_string())?;
        self.term.write_line("")?;

        if let Some(previous) = outcome.as_ref() {
            self.print_outcome(previous)?;
        }

        form.amount = self.read_text(AMOUNT_LABEL, &form.amount)?;
        form.rate = self.read_text(RATE_LABEL, &form.rate)?;
        form.start_date = self.read_date(START_DATE_LABEL, form.start_date.clone())?;
        form.end_date = self.read_date(END_DATE_LABEL, form.end_date.clone())?;
        self.term.write_line("")?;

        let event = self.choose(Screen::CalculatorForm)?;
        if event == ScreenEvent::Calculate {
            *outcome = Some(self.calculate(form));
        }

        Ok(event)
    }

    fn calculate(&self, form: &WarrantForm) -> Result<CalculationResult, AppError> {
        let result = form.submit(&self.service);
        match &result {
            Ok(r) => tracing::info!(
                days = r.days,
                interest = r.interest,
                total = r.total,
                "warrant calculated"
            ),
            Err(e) => tracing::warn!(code = e.code(), "calculation rejected: {}", e),
        }
        result
    }

    fn print_outcome(&self, outcome: &Result<CalculationResult, AppError>) -> Result<()> {
        match outcome {
            Ok(result) => {
                for line in result_lines(result) {
                    self.term.write_line(&format!("  {}", line.green().bold()))?;
                }
            }
            Err(e) => {
                self.term.write_line(&format!(
                    "  {} {}",
                    format!("{}:", e.title()).red().bold(),
                    e.to_string().red()
                ))?;
            }
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn read_text(&self, label: &str, current: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .with_context(|| format!("Failed to read {label}"))
    }

    /// Reads a date field key by key, reformatting after every keystroke.
    ///
    /// Enter or Tab finishes the field. Without an interactive terminal the
    /// whole line is read at once and replayed through the formatter.
    fn read_date(&self, label: &str, mut state: FormatterState) -> Result<FormatterState> {
        if !self.term.is_term() {
            let line = self.read_text(label, &state.text)?;
            return Ok(line
                .chars()
                .filter_map(|c| keystroke_for(&Key::Char(c)))
                .fold(FormatterState::default(), |s, k| date_field::edit(&s, k)));
        }

        loop {
            self.draw_date(label, &state)?;

            let key = self
                .term
                .read_key()
                .with_context(|| format!("Failed to read {label}"))?;

            if matches!(key, Key::Enter | Key::Tab) {
                self.term.write_line("")?;
                return Ok(state);
            }

            if let Some(keystroke) = keystroke_for(&key) {
                state = date_field::edit(&state, keystroke);
            }
        }
    }

    fn draw_date(&self, label: &str, state: &FormatterState) -> Result<()> {
        self.term.clear_line()?;
        self.term.write_str(&format!(
            "{} {}: {}",
            "?".yellow(),
            label.bold(),
            state.text
        ))?;

        let behind = state.text.len().saturating_sub(state.cursor);
        if behind > 0 {
            self.term.move_cursor_left(behind)?;
        }
        Ok(())
    }
}
