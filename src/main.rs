use clap::Parser;
use colored::Colorize;

use pomo::cli::commands::SessionController;
use pomo::cli::Cli;
use pomo::config::SessionStore;
use pomo::error::PomoError;
use pomo::presence::{PresenceSignaler, SlackCli};
use pomo::timer::IntervalTicker;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), PomoError> {
    let settings = &cli.settings;
    let paths = settings.paths()?;
    let store = SessionStore::new(&paths.session_file);
    let alert = settings.alert();

    let program = settings.slack_bin.clone();
    let home = paths.home.clone();
    let controller = SessionController::new(
        &store,
        move |token: &str| -> Box<dyn PresenceSignaler> {
            Box::new(SlackCli::new(program.clone(), token, home.clone()))
        },
        &alert,
    );

    let mut ticker = IntervalTicker::new(settings.tick_interval());
    let mut stdout = std::io::stdout().lock();
    controller.dispatch(cli.mode(), &mut ticker, &mut stdout)
}
