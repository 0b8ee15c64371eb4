//! Interactive session bootstrapper: load the world document, resolve the
//! player, fill their province with rivals, write the world back.

mod session;
mod store;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::session::{run_session, SessionError};
use crate::store::WorldStore;
use crate::ui::ConsolePrompt;

#[derive(Debug, Parser)]
#[command(name = "sengoku", about = "Text-adventure session bootstrapper")]
struct Args {
    /// Path to the world document.
    #[arg(long, default_value = "gamedata.yaml")]
    world: PathBuf,

    /// Seed for reproducible rolls; seeded from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<SessionError>() {
                // User backed out of a dialog: quietly discard the session.
                Some(SessionError::Cancelled) => info!("session cancelled, nothing saved"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let store = WorldStore::new(&args.world);
    let mut world = store.load().context("loading world store")?;

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let id = run_session(&mut world, &mut ConsolePrompt, &mut rng)?;
    info!("session resolved character {id}");

    store.commit(&world).context("saving world store")?;
    Ok(())
}
