use std::io;

use anyhow::Result;
use clap::Parser;

use grid_chess::config::SessionConfig;
use grid_chess::game::Game;
use grid_chess::session::Session;

/// Two players, one terminal.
#[derive(Parser, Debug)]
#[command(name = "play", version, about)]
struct Args {
    /// Start without waiting for Enter.
    #[arg(long)]
    no_pause: bool,

    /// Do not redraw the board after each move.
    #[arg(long)]
    quiet_board: bool,

    /// Skip the title and rules text.
    #[arg(long)]
    no_banner: bool,

    /// Log filter (overrides RUST_LOG), e.g. `debug` or `grid_chess=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(filter) = &args.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let config = SessionConfig::new()
        .with_pause_at_start(!args.no_pause)
        .with_show_board_after_move(!args.quiet_board)
        .with_banner(!args.no_banner);

    let stdin = io::stdin();
    let mut session = Session::new(Game::new(), config, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}
