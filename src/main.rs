use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gridsnake::app::App;
use gridsnake::config::GameConfig;
use gridsnake::game::{GameState, Phase};

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Snake on a 10x10 board, played in the terminal")]
struct Cli {
    /// Seed for fruit placement; a random one is chosen and logged if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("fruit seed {}", seed);

    let game = GameState::new(GameConfig::default(), StdRng::seed_from_u64(seed));
    let game = App::new(game).run()?;

    let outcome = match game.phase() {
        Phase::Won => "You won!",
        Phase::GameOver => "Game Over!",
        Phase::Start | Phase::Playing => "Bye!",
    };
    println!("{}", outcome);
    println!("Final Score: {}", game.score());
    Ok(())
}
