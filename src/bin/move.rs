use std::path::PathBuf;

use clap::Parser;
use log::info;

use pacsearch::agents::*;
use pacsearch::evaluation::{better, score};
use pacsearch::game::*;
use pacsearch::logging;

#[derive(Parser)]
#[command(name = "pacsearch move", about = "Choose the next pacman move for a layout.")]
struct Opts {
    /// Agent configuration in JSON, e.g. `{"AlphaBeta":{"depth":3,"evaluation":"better"}}`.
    #[arg(long)]
    config: Option<Agent>,
    /// Search the subtrees of pacman's moves in parallel.
    #[arg(long)]
    parallel: bool,
    /// Layout file (`%` walls, `.` food, `o` capsules, `P` pacman, `G` ghosts).
    layout: PathBuf,
}

#[tokio::main]
async fn main() {
    logging();

    let Opts {
        config,
        parallel,
        layout,
    } = Opts::parse();

    let txt = std::fs::read_to_string(&layout).expect("Could not read the layout!");
    let game = Game::parse(&txt).expect("Invalid layout!");
    info!("{:?}", game);
    info!("score {} better {}", score(&game), better(&game));

    let agent = config.unwrap_or_default();
    info!("agent {}", agent);

    let action = if parallel {
        agent.step(&game).await
    } else {
        agent.choose_action(&game)
    };

    info!("Move: {:?}", action);
}
