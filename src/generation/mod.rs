//! # Generation Module
//!
//! Random spawning of clouds and obstacles.
//!
//! Every roll takes the run's `StdRng` explicitly, so a run started from a
//! known seed replays exactly the same sequence of obstacles.

pub mod clouds;
pub mod obstacles;

pub use clouds::*;
pub use obstacles::*;

/// Utility functions for seeding.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Seed derived from the wall clock, for sessions started without `--seed`.
    pub fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
            .unwrap_or(0)
    }

    /// Draws the seed for the next run from the session generator.
    pub fn next_run_seed(session_rng: &mut StdRng) -> u64 {
        session_rng.gen()
    }
}
