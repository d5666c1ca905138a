use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use movie_search::config::Config;
use movie_search::logging::init_tracing;
use movie_search::lookup::OmdbLookup;
use movie_search::search::{MovieEvent, MovieSearchVm, MovieViewEffect, Subscription, ViewState};

#[derive(Parser)]
#[command(name = "movie-search", about = "Search OMDb for movies from the terminal")]
struct Args {
    /// Config file (default: ~/.config/movie-search/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OMDb API key, overrides config and OMDB_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// OMDb base URL, overrides config
    #[arg(long)]
    base_url: Option<String>,
}

const HELP: &str = "commands: search <title> | add | restore <n> | state | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?
        .with_env_overrides()
        .with_api_key_override(args.api_key);
    if let Some(base_url) = args.base_url {
        config.omdb.base_url = base_url;
    }
    config.validate()?;
    init_tracing(&config.logging);

    let lookup = OmdbLookup::new(&config.omdb).context("OMDb lookup is not usable")?;
    let vm = MovieSearchVm::new(Arc::new(lookup));
    let printer = tokio::spawn(print_updates(vm.states(), vm.effects()));

    vm.process_input(MovieEvent::ViewResume);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::State) => println!("{}", summarize(&vm.current_state())),
            Ok(command) => match command.into_event(&vm.current_state()) {
                Ok(event) => vm.process_input(event),
                Err(message) => eprintln!("{message}"),
            },
            Err(message) => eprintln!("{message}\n{HELP}"),
        }
    }

    let result = vm.shutdown().await;
    join_printer(printer).await;
    result?;
    Ok(())
}

async fn print_updates(
    mut states: Subscription<ViewState>,
    mut effects: Subscription<MovieViewEffect>,
) {
    let mut effects_open = true;
    loop {
        tokio::select! {
            state = states.next() => match state {
                Some(state) => println!("{}", summarize(&state)),
                None => break,
            },
            effect = effects.next(), if effects_open => match effect {
                Some(MovieViewEffect::AddedToHistoryToast) => println!("toast: added to history"),
                None => effects_open = false,
            },
        }
    }
}

/// Waits for the printer, logging instead of propagating a panic in it.
/// Returns whether it finished cleanly.
async fn join_printer(printer: JoinHandle<()>) -> bool {
    match printer.await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, "Update printer task failed");
            false
        }
    }
}

/// One line per state.
fn summarize(state: &ViewState) -> String {
    let rating = state.rating1.replace('\n', "; ");
    let history = state
        .adapter_list
        .iter()
        .enumerate()
        .map(|(i, movie)| format!("{}. {}", i + 1, movie.title))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "title: {} | rating: {} | history: [{}]",
        state.movie_title, rating, history
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Add,
    Restore(usize),
    State,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "search" if !rest.is_empty() => Ok(Command::Search(rest.to_string())),
            "search" => Err("search needs a title".to_string()),
            "add" => Ok(Command::Add),
            "restore" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Command::Restore)
                .ok_or_else(|| format!("restore needs a history number, got '{rest}'")),
            "state" => Ok(Command::State),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}'")),
        }
    }

    /// Turns the command into a view event, reading the history and the
    /// displayed movie from `state`.
    fn into_event(self, state: &ViewState) -> Result<MovieEvent, String> {
        match self {
            Command::Search(title) => Ok(MovieEvent::SearchMovie { title }),
            Command::Add => state
                .searched_movie_reference
                .clone()
                .map(|movie| MovieEvent::AddToHistory { movie })
                .ok_or_else(|| "no movie on screen to add".to_string()),
            Command::Restore(n) => n
                .checked_sub(1)
                .and_then(|index| state.adapter_list.get(index))
                .cloned()
                .map(|movie| MovieEvent::RestoreFromHistory { movie })
                .ok_or_else(|| format!("history has no entry {n}")),
            Command::State | Command::Quit => Err("not a view event".to_string()),
        }
    }
}
