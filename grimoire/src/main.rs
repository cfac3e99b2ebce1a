//! Line-oriented front end: reads commands from stdin, prints replies to
//! stdout. One process-wide generator feeds every randomized command.

mod config;
mod load;

use config::BotConfig;
use grimoire_core::CommandRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = BotConfig::load();
    let store = load::load_store(&config.data_dir);
    log::info!("Loaded {} reference records", store.len());

    let registry = match CommandRegistry::new(store) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("{e}; exiting");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = StdRng::from_entropy();

    let prefix = config.command_prefix();
    log::info!("{} is listening on stdin; bye on EOF", config.bot_name);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };
        // accept both addressed ("!grimoire roll 2d6") and bare commands
        let input = line.strip_prefix(&prefix).unwrap_or(&line).trim();
        if input.is_empty() {
            continue;
        }
        log::info!("Received request: {input}");
        match registry.dispatch(input, &mut rng) {
            Ok(reply) => println!("{reply}"),
            Err(e) => {
                log::warn!("{e}");
                println!("{}", e.user_message());
            }
        }
    }
    ExitCode::SUCCESS
}
