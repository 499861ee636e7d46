use anyhow::Context;
use broadside::{
    init_logging, Board, Cell, Coord, GameService, PlayerId, SessionRegistry, ShotOutcome,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a random self-game through the service API and print both boards.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

const PLAYER_ONE: PlayerId = 1;
const PLAYER_TWO: PlayerId = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            run_local(&mut rng).await?;
        }
    }
    Ok(())
}

/// Drive a complete game between two scripted players, exactly the way a
/// remote client would: every move goes through the `GameService` boundary.
async fn run_local(rng: &mut SmallRng) -> anyhow::Result<()> {
    let registry = SessionRegistry::new();
    let game = registry.create_game("local demo").await;
    registry.join_game(game, PLAYER_ONE).await?;
    registry.join_game(game, PLAYER_TWO).await?;

    for player in [PLAYER_ONE, PLAYER_TWO] {
        let fleet = Board::random_fleet(rng).context("fleet generation failed")?;
        for placement in fleet {
            registry.place_ship(game, player, placement).await?;
        }
    }

    let mut current = PLAYER_ONE;
    let winner = loop {
        let report = registry.game_status(game, current).await?;
        let target =
            pick_target(rng, report.opponent.cells()).context("no untried cells left")?;
        let outcome = registry.attack(game, current, target).await?;
        match outcome {
            ShotOutcome::Miss => println!("player {} fires at {}: miss", current, target),
            ShotOutcome::Hit => println!("player {} fires at {}: hit", current, target),
            ShotOutcome::Sunk(ship) => {
                println!("player {} fires at {}: sank the {}", current, target, ship)
            }
            ShotOutcome::GameOver { winner, ship } => {
                println!(
                    "player {} fires at {}: sank the {} - fleet destroyed",
                    current, target, ship
                );
                break winner;
            }
        }
        current = if current == PLAYER_ONE {
            PLAYER_TWO
        } else {
            PLAYER_ONE
        };
    };

    println!("\nPlayer {} wins!\n", winner);
    for player in [PLAYER_ONE, PLAYER_TWO] {
        let report = registry.game_status(game, player).await?;
        println!("Player {} board:\n{}\n", player, report.own);
    }
    Ok(())
}

/// Choose a random cell the attacker has not fired at yet. Untried cells are
/// exactly the `Empty` tags of the censored opponent view.
fn pick_target(rng: &mut SmallRng, opponent_cells: &[Cell]) -> Option<Coord> {
    let untried: Vec<usize> = opponent_cells
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Cell::Empty)
        .map(|(i, _)| i)
        .collect();
    if untried.is_empty() {
        return None;
    }
    let idx = untried[rng.random_range(0..untried.len())];
    let n = broadside::BOARD_SIZE as usize;
    Some(Coord::new((idx % n) as u8, (idx / n) as u8))
}
