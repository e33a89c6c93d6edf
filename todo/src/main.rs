//! Terminal front-end for the todo list.
//!
//! Reads one command per line from stdin and redraws the list after every
//! change. Type `help` for the command list.

use anyhow::Context;
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tasklane_core::environment::SystemClock;
use todo::command::HELP;
use todo::render::render;
use todo::{
    seed, Command, CommandError, Config, ConsoleNotifier, Notifier, SilentNotifier,
    TodoEnvironment, TodoReducer, TodoState, TodoStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize tracing; stdout belongs to the list
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(?config, "Starting todo");

    let notifier: Arc<dyn Notifier> = if config.notifications {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(SilentNotifier)
    };
    let env = TodoEnvironment::new(Arc::new(SystemClock), notifier);
    let mut store = TodoStore::with_config(
        TodoState::new(),
        TodoReducer::new(),
        env,
        config.store_config(),
    );

    if config.seed_samples {
        let now = store.environment().clock.now();
        for event in seed::sample_todos(now) {
            store.send(event).context("failed to load sample todos")?;
        }
        tracing::debug!("Sample todos loaded");
    }

    print!("{}", store.state(|s| render(s, &Local::now())));
    store.subscribe(|state| print!("{}", render(state, &Local::now())));
    println!("Type `help` for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        match Command::parse(&line) {
            Ok(Command::Dispatch(action)) => {
                tracing::debug!(action = action.name(), "Dispatching");
                if let Err(err) = store.send(action) {
                    eprintln!("error: {err}");
                }
            },
            Ok(Command::List) => print!("{}", store.state(|s| render(s, &Local::now()))),
            Ok(Command::Json) => {
                let json = store
                    .state(serde_json::to_string_pretty)
                    .context("failed to serialize state")?;
                println!("{json}");
            },
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {},
            Err(err) => eprintln!("error: {err}"),
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
