use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fisher::{
    battle::{
        Battle,
        BattleEngineOptions,
        BattleOutcome,
        Request,
    },
    game::GameState,
};
use fisher_choice::{
    Choice,
    LearnMoveChoice,
    MoveChoice,
    SwitchChoice,
};
use fisher_data::{
    DataStore,
    Id,
    LocalDataStore,
};
use log::info;

/// Plays a seeded run through the dungeon, printing every battle event.
#[derive(Parser)]
#[command(name = "fisher-sim", version)]
struct Cli {
    /// Seed for the first battle. Each following battle uses the next seed.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Starter species.
    #[arg(long, default_value = "guppy")]
    starter: String,

    /// Number of floors to attempt.
    #[arg(short, long, default_value_t = 10)]
    floors: u32,

    /// Rest at camp every this many floors. Zero never rests.
    #[arg(long, default_value_t = 5)]
    camp_every: u32,

    /// Directory holding the catalog files. Defaults to the bundled catalog.
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print engine debug logs.
    #[arg(short, long)]
    verbose: bool,
}

/// Picks the choice the simulator makes for a request.
///
/// Always uses the first known move, switches in the first living member, and never replaces a
/// move.
fn auto_choice(request: &Request) -> Option<Choice> {
    match request {
        Request::Turn(request) => request.moves.first().map(|move_id| {
            Choice::Move(MoveChoice {
                move_id: move_id.to_string(),
            })
        }),
        Request::Switch(request) => request
            .options
            .first()
            .map(|&member| Choice::Switch(SwitchChoice { member })),
        Request::LearnMove(_) => Some(Choice::LearnMove(LearnMoveChoice {
            forget_move_slot: None,
        })),
    }
}

fn play_battle(game: &mut GameState, data: &dyn DataStore, seed: u64) -> Result<BattleOutcome> {
    let mut battle = Battle::new(game, data, BattleEngineOptions::with_seed(seed))?;
    loop {
        for log in battle.new_logs() {
            println!("{log}");
        }
        if let Some(outcome) = battle.outcome() {
            return Ok(outcome.clone());
        }
        let Some(choice) = battle.request(game).as_ref().and_then(auto_choice) else {
            return Err(anyhow::Error::msg("battle stalled without a request"));
        };
        println!("> {choice}");
        for message in battle.choose(game, choice)?.messages {
            println!("  {message}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing_core::Level::DEBUG
        } else {
            tracing_core::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let data = match &cli.data_dir {
        Some(dir) => LocalDataStore::new(dir)?,
        None => LocalDataStore::bundled()?,
    };
    let mut game = GameState::with_starter(&data, &Id::from(cli.starter.as_str()))?;

    for attempt in 0..cli.floors {
        let seed = cli.seed.wrapping_add(attempt as u64);
        match play_battle(&mut game, &data, seed)? {
            BattleOutcome::MonsterDefeated(_) => {
                if !game.advance_floor() {
                    info!("cleared the last floor");
                    break;
                }
                if cli.camp_every > 0 && game.floor % cli.camp_every == 0 {
                    game.rest_at_camp();
                }
            }
            BattleOutcome::PartyWiped { floor } => {
                info!("party wiped; back to floor {floor}");
            }
            // Battles only return once concluded.
            BattleOutcome::PartyMemberFainted { .. } => (),
        }
    }

    println!("{}", serde_json::to_string_pretty(&game)?);
    Ok(())
}
