mod render;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use daybook_core::habits::Habit;
use daybook_core::mood::Mood;
use daybook_core::pages::Nav;
use daybook_core::render as md;
use daybook_core::theme::Theme;
use daybook_core::{Outcome, Page, Tracker};
use render::{ColorMode, Renderer};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use strum::IntoEnumIterator;

/// daybook — track your day from the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the data directory
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the task list
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Record today's mood (e.g. `daybook mood happy`)
    Mood { mood: String },
    /// Track glasses of water (e.g. `daybook water up`)
    Water {
        #[arg(value_enum)]
        direction: WaterDirection,
    },
    /// Toggle a daily habit (e.g. `daybook habit exercise`)
    Habit { name: String },
    /// Set today's goal, overwriting any prior one
    Goal { text: Vec<String> },
    /// Save today's quick note, overwriting any prior one
    Note { text: Vec<String> },
    /// Save a journal entry (e.g. `daybook journal -t "Morning" Slept well.`)
    Journal {
        #[arg(long, short)]
        title: Option<String>,
        content: Vec<String>,
    },
    /// Choose the display theme (dark or light)
    Theme { theme: String },
    /// Render a page: today, calendar, journal, projects or insights
    Show { page: Option<String> },
}

#[derive(Subcommand, Debug)]
enum TaskAction {
    /// Add a task (e.g. `daybook task add Buy milk`)
    Add { text: Vec<String> },
    /// Toggle a task done/pending by its id
    Done { id: u64 },
    /// Delete a task by its id
    Rm { id: u64 },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum WaterDirection {
    Up,
    Down,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daybook: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_str(
        std::env::var("DAYBOOK_LOG").unwrap_or_else(|_| "warn".to_string()),
    )?
    .log_to_stderr()
    .start()?;

    let cli = Cli::parse();
    let mut tracker = Tracker::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(render::RenderOptions {
        theme: tracker.state.theme,
        use_color,
    });

    if cli.path {
        renderer.print_info(&format!("{}", tracker.store.root().display()));
        return Ok(());
    }

    // Every mutating branch persists inside the handler before anything is
    // printed, so a rendering failure cannot lose saved state.
    match cli.command {
        Some(Command::Task { action }) => {
            let (outcome, not_found_id) = match action {
                TaskAction::Add { text } => (tracker.add_task(&text.join(" "))?, None),
                TaskAction::Done { id } => (tracker.toggle_task(id)?, Some(id)),
                TaskAction::Rm { id } => (tracker.delete_task(id)?, Some(id)),
            };
            match outcome {
                Outcome::Saved => show_page(&tracker, &renderer, Page::Today),
                Outcome::Ignored => renderer.print_info("Nothing to add."),
                Outcome::NotFound => {
                    let id = not_found_id.unwrap_or_default();
                    renderer.print_info(&format!("No task with id {id}."));
                }
            }
        }
        Some(Command::Mood { mood }) => {
            tracker.select_mood(parse_mood(&mood)?)?;
            show_page(&tracker, &renderer, Page::Today);
        }
        Some(Command::Water { direction }) => {
            let outcome = match direction {
                WaterDirection::Up => tracker.increment_water()?,
                WaterDirection::Down => tracker.decrement_water()?,
            };
            // Only the counter is redrawn, not the whole page.
            renderer.print_info(&md::water_gauge(&tracker.state.habits));
            if outcome == Outcome::Ignored {
                renderer.print_info("Already at the limit.");
            }
        }
        Some(Command::Habit { name }) => {
            let habit = parse_habit(&name)?;
            tracker.toggle_habit(habit)?;
            let status = if tracker.state.habits.done(habit) {
                "done"
            } else {
                "not done"
            };
            renderer.print_info(&format!("{}: {status}", habit.as_ref()));
        }
        Some(Command::Goal { text }) => {
            match tracker.save_goal(&text.join(" "))? {
                Outcome::Saved => renderer.print_info("Goal saved."),
                _ => renderer.print_info("Nothing to save."),
            };
        }
        Some(Command::Note { text }) => {
            let note = text.join(" ");
            match tracker.save_quick_note(&note)? {
                Outcome::Saved => {
                    renderer.print_info(&format!("Note saved ({} words).", md::word_count(&note)));
                }
                _ => renderer.print_info("Nothing to save."),
            };
        }
        Some(Command::Journal { title, content }) => {
            let title = title.unwrap_or_default();
            match tracker.save_journal_entry(&title, &content.join(" "))? {
                Outcome::Saved => renderer.print_info("Journal entry saved."),
                _ => renderer.print_info("Nothing to save."),
            };
        }
        Some(Command::Theme { theme }) => {
            let theme = parse_theme(&theme)?;
            tracker.set_theme(theme)?;
            renderer.print_info(&format!("Theme set to {}.", theme.as_ref()));
        }
        Some(Command::Show { page }) => {
            let page = match page {
                Some(name) => parse_page(&name)?,
                None => Page::default(),
            };
            show_page(&tracker, &renderer, page);
        }
        None => show_page(&tracker, &renderer, Page::Today),
    }

    Ok(())
}

/// Switches the page selector and renders the target page. Only the token
/// from the latest `select` is still current; a stale one is dropped.
fn show_page(tracker: &Tracker, renderer: &Renderer, page: Page) {
    let mut nav = Nav::default();
    let transition = nav.select(page);
    if nav.is_current(transition) {
        renderer.print_md(&md::format_page(
            &tracker.state,
            &tracker.config,
            transition.page,
        ));
    }
}

fn parse_mood(input: &str) -> Result<Mood> {
    input
        .parse()
        .map_err(|_| anyhow!("unknown mood '{input}' (expected one of: {})", variants::<Mood>()))
}

fn parse_habit(input: &str) -> Result<Habit> {
    input
        .parse()
        .map_err(|_| anyhow!("unknown habit '{input}' (expected one of: {})", variants::<Habit>()))
}

fn parse_theme(input: &str) -> Result<Theme> {
    input
        .parse()
        .map_err(|_| anyhow!("unknown theme '{input}' (expected one of: {})", variants::<Theme>()))
}

fn parse_page(input: &str) -> Result<Page> {
    input
        .parse()
        .map_err(|_| anyhow!("unknown page '{input}' (expected one of: {})", variants::<Page>()))
}

fn variants<T: IntoEnumIterator + AsRef<str>>() -> String {
    T::iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
