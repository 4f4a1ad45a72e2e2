//! Compile-time settings. Nothing here is read from the environment.

use std::time::Duration;

pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;
pub const TITLE: &str = "Game of Life";

/// Odds that a freshly seeded cell starts alive, as `(numerator, denominator)`.
pub const SEED_ALIVE_ODDS: (u32, u32) = (1, 10);

/// Shortest time a detected cycle is replayed before the world is reseeded.
pub const MIN_REPLAY: Duration = Duration::from_secs(5);

/// Present at most once per display refresh.
pub const SWAP_INTERVAL: u32 = 1;

const _: () = assert!(WIDTH % 8 == 0, "width must be a multiple of 8");
