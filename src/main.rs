use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Duration;

use ipc_search::api::{SearchClient, parse_base_url};
use ipc_search::app::App;
use ipc_search::config::{self, Config, ConfigResult};
use ipc_search::worker;

/// Search Indian Penal Code sections from the terminal
#[derive(Parser, Debug)]
#[command(version, about = "Interactive search client for an IPC section search service")]
struct Args {
    /// Base URL of the search service [default: from config, http://127.0.0.1:8000]
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Search for this query on startup, like opening /?q=<query>
    #[arg(long, short = 'q', value_name = "QUERY")]
    query: Option<String>,

    /// Number of results to request per search
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    top_k: Option<u16>,

    /// Print the final location URL on exit
    #[arg(long)]
    print_location: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/ipc-search-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = config::load_config();
    apply_args(&mut config, &args);

    // Fail before touching the terminal
    let base_url = parse_base_url(&config.server.base_url)?;

    let client = SearchClient::new(
        base_url.clone(),
        Duration::from_secs(config.server.timeout_secs),
    );

    let terminal = init_terminal()?;

    // Spawned after the terminal hook so worker panics stay out of it
    let api = match worker::spawn_worker(client) {
        Ok(api) => api,
        Err(e) => {
            restore_terminal()?;
            return Err(e.into());
        }
    };

    let mut app = App::new(&config, base_url, api);
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }
    if let Some(query) = &args.query {
        app.search_for(query);
    }

    let result = run(terminal, app);
    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if args.print_location {
        println!("{}", app.location_url());
    }

    #[cfg(debug_assertions)]
    log::debug!("=== IPC-SEARCH DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/ipc-search-debug.log")
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Debug log disabled: {}", e);
            return;
        }
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        // reqwest/hyper internals are noisy at debug
        .filter_module("hyper_util", log::LevelFilter::Info)
        .filter_module("reqwest", log::LevelFilter::Info)
        .filter_module("rustls", log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== IPC-SEARCH DEBUG SESSION STARTED ===");
}

/// CLI flags win over the config file
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }
    if let Some(top_k) = args.top_k {
        config.search.top_k = usize::from(top_k);
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        app.poll_api_responses();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
