use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

mod commands;
mod logger;
mod view;

use commands::{Command, HELP};
use tally_config::AppConfig;
use tally_store::{reduce, Action, AppState, Store};

type CounterStore = Store<AppState, Action>;

fn main() -> Result<()> {
    let (config, config_error) = settle_config(AppConfig::try_load());
    logger::init(&config)?;

    log::info!("Starting tally");
    if let Some(e) = config_error {
        eprintln!("Ignoring config file: {:#}", e);
        log::warn!("Ignoring config file: {:#}", e);
    }

    let mut builder = CounterStore::builder().reducer(reduce);
    if !config.initial_counts.is_empty() {
        builder = builder.initial_state(AppState::from_counts(
            config.initial_counts.iter().copied(),
        ));
    }
    let store = builder.build()?;

    // Report every change, reading the state back from the store
    let handle = store.downgrade();
    let show_ids = config.show_ids;
    let _unsubscribe = store.subscribe(move || {
        let Some(store) = handle.upgrade() else {
            return;
        };
        let state = store.get_state();
        log::info!("The state is now: {:?}", state);
        print!("{}", view::render(&state, show_ids));
    });

    print!("{}", view::render(&store.get_state(), show_ids));
    run(&store, show_ids)?;

    log::info!("Exiting tally");
    Ok(())
}

/// Fall back to defaults when no usable config exists, keeping the parse
/// error so it can be reported once logging is up
fn settle_config(loaded: Result<Option<AppConfig>>) -> (AppConfig, Option<anyhow::Error>) {
    match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Read commands from stdin until `quit` or end of input
fn run(store: &CounterStore, show_ids: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::List => print!("{}", view::render(&store.get_state(), show_ids)),
            command => dispatch(store, &command)?,
        }
    }

    Ok(())
}

fn dispatch(store: &CounterStore, command: &Command) -> Result<()> {
    let state = store.get_state();
    match command.to_action(&state) {
        Ok(Some(action)) => store.dispatch(action)?,
        Ok(None) => {}
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}
