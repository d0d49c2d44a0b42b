use anyhow::{Context, Result};
use car_loan_calculator::{
    app::{handle_key_input, App},
    calculator,
    config::Settings,
    ui,
};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Monthly installment for a car loan with a duration-tiered flat rate.
#[derive(Parser, Debug)]
#[command(name = "car-loan-calculator", version)]
struct Cli {
    /// JSON file with initial field values and rate tiers
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG overrides the default `info` level)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// OTR price; with --down-payment and --duration, prints the result and exits
    #[arg(long, requires_all = ["down_payment", "duration"])]
    otr: Option<String>,

    /// Down payment in percent of the OTR price
    #[arg(long, requires_all = ["otr", "duration"])]
    down_payment: Option<String>,

    /// Loan duration in months
    #[arg(long, requires_all = ["otr", "down_payment"])]
    duration: Option<String>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    if let (Some(otr), Some(down_payment), Some(duration)) =
        (&cli.otr, &cli.down_payment, &cli.duration)
    {
        println!(
            "{}",
            calculator::calculate_with(otr, down_payment, duration, &settings.rates)
        );
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::from_settings(&settings);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{:?}", err);
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key_input(&mut app, key) {
                return Ok(());
            }
        }
    }
}
