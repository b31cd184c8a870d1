//! Generate a dungeon level and print it to stdout.

use clap::Parser;

use mklev_core::GameRng;
use mklev_core::dungeon::{LevelConfig, mklev};

#[derive(Parser, Debug)]
#[command(name = "mklev", version, about = "Generate a random dungeon level")]
struct Args {
    /// Generation seed; falls back to $MKLEV_SEED, then to entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the room, door and stair registries after the map
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.or_else(|| {
        std::env::var("MKLEV_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
    });
    let mut rng = match seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    println!("seed: {}", rng.seed());

    let level = mklev(LevelConfig::default(), &mut rng);
    print!("{}", level.render());

    if args.verbose {
        for (i, room) in level.rooms.iter().enumerate() {
            println!(
                "room {i}: ({},{})..({},{}) lit={} doors={}",
                room.lx, room.ly, room.hx, room.hy, room.lit, room.doorct
            );
        }
        for (i, door) in level.doors.iter().enumerate() {
            println!("door {i}: ({},{}) {:?}", door.x, door.y, door.state);
        }
        for stair in &level.stairs {
            let dir = if stair.up { "up" } else { "down" };
            println!("stair: ({},{}) {dir}", stair.x, stair.y);
        }
        if let Some((x, y)) = level.vault {
            println!("vault: ({x},{y})");
        }
    }
}
