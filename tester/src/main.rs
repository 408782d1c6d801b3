use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng};
use tester::{config::TesterConfig, test_list, ListOperation};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TesterConfig::from_env()?;
    let seeds: Vec<u64> = match config.seed {
        Some(seed) => vec![seed],
        None => {
            let mut rng = rand::thread_rng();
            (0..config.rounds).map(|_| rng.gen()).collect()
        }
    };
    info!(rounds = seeds.len(), ops = config.ops, "testing SinglyLinkedList");

    for seed in seeds.iter().copied() {
        match test_list::<ListOperation<u8>, StdRng>(seed, config.ops) {
            Ok(()) => debug!(seed, "round passed"),
            Err(failure) => {
                failure.playback();
                bail!("seed {} diverged at operation {}", seed, failure.op_num);
            }
        }
    }

    info!("all {} rounds passed", seeds.len());
    Ok(())
}
