use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use pretty_table_pager::config::{ConfigError, TableConfig};
use pretty_table_pager::handlers::{self, KeyAction};
use pretty_table_pager::pager::Pager;
use pretty_table_pager::parser;
use pretty_table_pager::render;
use pretty_table_pager::source::TableSource;
use pretty_table_pager::PaginationState;

#[derive(Parser, Debug)]
#[command(name = "ptp", version, about = "Page through psql or CSV output in the terminal")]
struct Args {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Parse input as CSV with a header row instead of psql output
    #[arg(long)]
    csv: bool,

    /// Rows per page
    #[arg(long, default_value_t = 20)]
    page_size: usize,

    /// Pages shown around the current page (overrides config)
    #[arg(long)]
    window_size: Option<usize>,

    /// Page counts up to this value show every page (overrides config)
    #[arg(long)]
    min_pages: Option<usize>,

    /// Initial sort column id
    #[arg(long)]
    sort: Option<String>,

    /// Initial page, used as given
    #[arg(long, allow_negative_numbers = true)]
    page: Option<i64>,

    /// JSON file with column sorters and bar settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Build the source, table config and initial state from the arguments.
fn setup(
    args: &Args,
) -> Result<(TableSource, TableConfig, PaginationState), Box<dyn std::error::Error>> {
    if args.page_size == 0 {
        return Err(ConfigError::ZeroPageSize.into());
    }

    let input = read_input(args.file.as_deref())?;
    let data = if args.csv {
        parser::parse_csv(&input)?
    } else {
        parser::parse_psql(&input)?
    };

    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::from_headers(&data.headers),
    };
    if let Some(window_size) = args.window_size {
        config.settings.window_size = window_size;
    }
    if let Some(min_pages) = args.min_pages {
        config.settings.min_pages = min_pages;
    }

    let sort_column = config.initial_sort_column(args.sort.as_deref())?;
    let mut state = PaginationState::new(sort_column, args.page_size);
    if let Some(page) = args.page {
        state = state.set_current_page(page);
    }

    info!(
        "loaded {} rows, {} columns",
        data.row_count(),
        data.column_count()
    );
    // Cells are served in the configured column order so headers line up
    let ids: Vec<&str> = config.columns.iter().map(|c| c.id.as_str()).collect();
    let source = TableSource::with_columns(data, &ids)?;
    Ok((source, config, state))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let (source, config, state) = match setup(&args) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: psql -c 'SELECT ...' | ptp [--csv] [--page-size N]");
            std::process::exit(1);
        }
    };

    let mut pager = Pager::new(source, config, state);

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;

    loop {
        terminal.draw(|frame| render::render_pager(frame, &pager))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handlers::handle_key(&key, &mut pager) {
                    KeyAction::Quit => break,
                    KeyAction::Navigate(nav) => pager.navigate(&nav),
                    KeyAction::None => {}
                }
            }
        }
    }

    terminal.clear()?;
    restore_terminal(&mut terminal)?;
    Ok(())
}
