use resume_tui::config::{load_config, CliArgs};
use resume_tui::state::SectionState;
use resume_tui::{actions, event, logging, parser, terminal, ui, AppState};

use anyhow::Result;
use clap::Parser;
use ratatui::Terminal;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let log_guard = logging::init(config.log_file.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let (resume, path) = match parser::load(config.resume_file.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!(%err, "resume could not be loaded");
            eprintln!("Error: {err}");
            // exit() skips destructors; flush the log first
            drop(log_guard);
            std::process::exit(1);
        }
    };
    tracing::info!(path = %path.display(), name = %resume.name, "resume ready");

    let state_file = config.state_file.clone().filter(|_| config.persist_state);
    let sections = state_file
        .as_deref()
        .map(SectionState::load_or_default)
        .unwrap_or_default();

    let mut app = AppState::new(resume, config);
    app.sections = sections;

    let mut tui = terminal::setup()?;

    // Run the main loop
    let res = run_app(&mut tui, &mut app);

    terminal::restore()?;

    if let Some(path) = state_file {
        if let Err(err) = app.sections.save(&path) {
            tracing::error!(%err, "section state not saved");
            eprintln!("Warning: {err}");
        }
    }

    tracing::info!("shutting down");
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    let size = terminal.size()?;
    actions::execute_action(actions::Action::Resize(size.width, size.height), app)?;

    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Block until the next input
        if let Some(action) = event::handle_events(app)? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
