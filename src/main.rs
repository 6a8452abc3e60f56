mod config;
mod error;
mod game;
mod handlers;
mod models;
mod services;
mod utils;

use actix_web::{web, App, HttpServer};
use std::fs::OpenOptions;
use std::io::{self, Write};
use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::config::{build_cli, Config, Mode};
use crate::error::RunError;
use crate::game::Game;
use crate::models::AppState;
use crate::services::load_sources;

// Function to initialize logging
fn init_logging(log_file: Option<&str>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

/// Load the data sources, then play on `lines`/`out` or serve HTTP until stopped.
async fn run<R, W>(config: Config, lines: &mut Lines<R>, out: &mut W) -> Result<(), RunError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (lexicon, inventory) = load_sources(&config.words_path, &config.letters_path)?;

    match config.mode {
        Mode::Play { round } => {
            let game = Game::new(&lexicon, &inventory, round);
            game.run(lines, out).await?;
        }
        Mode::Serve { listen_host } => {
            info!("Serving {} words on {}", lexicon.len(), listen_host);
            let shared_state = web::Data::new(AppState { lexicon, inventory });

            HttpServer::new(move || {
                App::new()
                    .app_data(shared_state.clone())
                    .service(handlers::config::get_config)
                    .service(handlers::random::rand_rack)
                    .service(handlers::validation::validate_word)
                    .service(handlers::validation::score_word)
                    .service(handlers::solver::solve_rack)
            })
            .bind(&listen_host)?
            .run()
            .await?;
        }
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_matches(&build_cli().get_matches());
    init_logging(config.log_file.as_deref())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    match run(config, &mut lines, &mut out).await {
        Ok(()) => Ok(()),
        Err(RunError::Io(e)) => Err(e),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
