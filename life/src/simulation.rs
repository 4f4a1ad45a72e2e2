use std::mem;
use std::time::Instant;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::cycle::{replay_duration, CapturedCycle, History};
use crate::display::{DisplayMode, Frame};
use crate::fingerprint::fingerprint;
use crate::grid::Grid;
use crate::rule::TransitionTable;
use crate::step::step;

/// Where the simulation is in its detect-capture-replay lifecycle.
#[derive(Debug)]
pub enum Phase {
    /// Stepping and fingerprinting every generation.
    FreeRunning,
    /// A repeat was seen; still stepping while one period is recorded.
    Capturing { cycle: CapturedCycle, deadline: Instant },
    /// Stepping is suspended and the recorded period loops.
    Replaying { cycle: CapturedCycle, deadline: Instant },
}

impl Phase {
    pub fn is_cyclic(&self) -> bool {
        !matches!(self, Phase::FreeRunning)
    }

    pub fn cycle(&self) -> Option<&CapturedCycle> {
        match self {
            Phase::FreeRunning => None,
            Phase::Capturing { cycle, .. } | Phase::Replaying { cycle, .. } => Some(cycle),
        }
    }

    fn deadline(&self) -> Option<Instant> {
        match self {
            Phase::FreeRunning => None,
            Phase::Capturing { deadline, .. } | Phase::Replaying { deadline, .. } => Some(*deadline),
        }
    }
}

/// Everything that changes while the world runs.
///
/// Two generation buffers alternate by generation parity: generation `n`
/// lives in `buffers[n % 2]` and is computed from the other one.
pub struct Simulation<R = ThreadRng> {
    table: TransitionTable,
    buffers: [Grid; 2],
    generation: u64,
    fresh: bool,
    history: History,
    phase: Phase,
    entropy: R,
    seed: Option<u64>,
}

impl Simulation<ThreadRng> {
    /// Starts from a random world, drawing seeds from the thread-local generator.
    pub fn from_thread_rng(width: usize, height: usize) -> Self {
        Self::new(width, height, rand::rng())
    }
}

impl<R: RngCore> Simulation<R> {
    /// Starts from a random world drawn from `entropy`.
    pub fn new(width: usize, height: usize, entropy: R) -> Self {
        let mut simulation = Self::with_grid(Grid::new(width, height), entropy);
        simulation.seed_world();
        simulation
    }

    /// Starts from `grid` as generation 0. Later resets still draw from `entropy`.
    pub fn with_grid(grid: Grid, entropy: R) -> Self {
        let spare = Grid::new(grid.width(), grid.height());
        Simulation {
            table: TransitionTable::default(),
            buffers: [grid, spare],
            generation: 0,
            fresh: true,
            history: History::new(),
            phase: Phase::FreeRunning,
            entropy,
            seed: None,
        }
    }

    /// Runs one displayed frame and returns what to show.
    ///
    /// The first call after a world is created shows generation 0 as is;
    /// every later call moves one generation forward.
    pub fn advance(&mut self, now: Instant) -> Frame<'_> {
        if self.phase.deadline().is_some_and(|deadline| now >= deadline) {
            log::debug!("replay over after generation {}, reseeding", self.generation);
            self.reset();
        }

        if self.fresh {
            self.fresh = false;
        } else {
            self.step_generation();
        }
        self.track(now);
        self.display()
    }

    /// Drops all history and any captured cycle and seeds a new random world.
    pub fn reset(&mut self) {
        self.generation = 0;
        self.fresh = true;
        self.history.clear();
        self.phase = Phase::FreeRunning;
        self.seed_world();
    }

    /// What the display should show for the current generation.
    pub fn display(&self) -> Frame<'_> {
        if let Phase::Replaying { cycle, .. } = &self.phase {
            if let Some(cells) = cycle.frame(self.generation) {
                return Frame {
                    cells,
                    mode: DisplayMode::Cyclic,
                };
            }
        }
        let mode = if self.phase.is_cyclic() { DisplayMode::Cyclic } else { DisplayMode::Live };
        Frame {
            cells: self.current().cells(),
            mode,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Seed of the current world, if it was drawn at random.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The most recently computed generation. Stale while replaying.
    pub fn current(&self) -> &Grid {
        &self.buffers[parity(self.generation)]
    }

    fn seed_world(&mut self) {
        let seed: u64 = self.entropy.random();
        println!("{}", seed_line(seed));
        let mut rng = StdRng::seed_from_u64(seed);
        self.buffers[parity(self.generation)].randomize(&mut rng);
        self.seed = Some(seed);
    }

    fn step_generation(&mut self) {
        self.generation += 1;
        if matches!(self.phase, Phase::Replaying { .. }) {
            return;
        }
        let [even, odd] = &mut self.buffers;
        let (next, prev) = if parity(self.generation) == 0 { (even, &*odd) } else { (odd, &*even) };
        step(next, prev, &self.table);
    }

    fn track(&mut self, now: Instant) {
        let current = &self.buffers[parity(self.generation)];

        if let Phase::Capturing { cycle, .. } = &mut self.phase {
            cycle.capture(current.cells());
            if cycle.is_complete() {
                log::debug!("captured {} frames, replaying", cycle.len());
                self.begin_replay();
            }
            return;
        }

        if !matches!(self.phase, Phase::FreeRunning) {
            return;
        }
        if let Some(length) = self.history.observe(fingerprint(current), self.generation) {
            println!("{}", repeat_line(length, self.history.len()));
            let length = length as usize;
            let replay = replay_duration(length);
            log::debug!("replaying for {replay:?} once captured");
            self.phase = Phase::Capturing {
                cycle: CapturedCycle::new(length, self.generation + 1),
                deadline: now + replay,
            };
        }
    }

    fn begin_replay(&mut self) {
        if let Phase::Capturing { cycle, deadline } = mem::replace(&mut self.phase, Phase::FreeRunning) {
            self.phase = Phase::Replaying { cycle, deadline };
        }
    }
}

fn seed_line(seed: u64) -> String {
    format!("Seed: {seed}")
}

fn repeat_line(length: u64, generations: usize) -> String {
    format!("World repeats in {length} steps after {generations} generations")
}

fn parity(generation: u64) -> usize {
    (generation % 2) as usize
}
