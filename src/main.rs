use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hyakunin_quiz::logging::{self, LogTarget};
use hyakunin_quiz::protocol::DEFAULT_PORT;
use hyakunin_quiz::{DEFAULT_POEMS_PATH, Game, GameMode, PoemStore, client, server};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Args {
    /// Log filter, e.g. `info` or `hyakunin_quiz=debug`
    #[arg(long, global = true, env = "HYAKUNIN_LOG", default_value = "info")]
    log_level: String,

    /// Write logs to this file (terminal modes log nowhere otherwise)
    #[arg(long, global = true, env = "HYAKUNIN_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Options for `play`, accepted without the subcommand
    #[command(flatten)]
    play: PlayArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// JSON file to load the poems from
    #[arg(short, long, env = "HYAKUNIN_POEMS", default_value = DEFAULT_POEMS_PATH)]
    poems: PathBuf,

    /// Field to quiz on
    #[arg(short, long, value_enum, default_value = "lower-verse")]
    mode: GameMode,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play locally in the terminal
    Play(PlayArgs),
    /// Host the game over WebSocket, one session per connection
    Serve {
        /// JSON file to load the poems from
        #[arg(short, long, env = "HYAKUNIN_POEMS", default_value = DEFAULT_POEMS_PATH)]
        poems: PathBuf,

        /// Address to bind
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        bind: IpAddr,

        #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Play against a running server
    Join {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn main() {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Play(args.play));

    let target = match (&command, &args.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Command::Serve { .. }, None) => LogTarget::Stderr,
        _ => LogTarget::Disabled,
    };
    let log_guard = match logging::init_tracing(&args.log_level, target) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(command) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Play(PlayArgs { poems, mode }) => {
            let game = Game::from_json(&poems, mode)
                .with_context(|| format!("cannot start the game with {}", poems.display()))?;
            game.run()?;
        }
        Command::Serve { poems, bind, port } => {
            let store = PoemStore::load(&poems)
                .with_context(|| format!("cannot start the server with {}", poems.display()))?;
            tokio::runtime::Runtime::new()?.block_on(server::run(bind, port, store))?;
        }
        Command::Join { host, port } => {
            tokio::runtime::Runtime::new()?.block_on(client::run(host, port))?;
        }
    }

    Ok(())
}
