//! Process-wide random seeding
//!
//! Shuffling draws from a single process-wide RNG. Call [`seed`] once at
//! process start for reproducible epoch orders; until then the RNG is seeded
//! from OS entropy on first use. Constructing a trainer never reseeds.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

static GLOBAL_RNG: Mutex<Option<StdRng>> = Mutex::new(None);

/// Seed the process-wide RNG used for shuffling.
pub fn seed(value: u64) {
    let mut rng = GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    *rng = Some(StdRng::seed_from_u64(value));
    tracing::debug!(seed = value, "seeded global rng");
}

/// Run `f` with exclusive access to the process-wide RNG.
pub(crate) fn with_rng<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    let rng = guard.get_or_insert_with(StdRng::from_os_rng);
    f(rng)
}
