//! Drives the full loop through a renderer that records what it was shown.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use life::config::{SWAP_INTERVAL, TITLE};
use life::display::{self, DisplayMode, Renderer};
use life::{Grid, Phase, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Recorder {
    remaining: usize,
    title: Option<String>,
    swap_interval: Option<u32>,
    shown: Vec<(Vec<u8>, DisplayMode)>,
}

impl Recorder {
    fn closing_after(frames: usize) -> Self {
        Recorder {
            remaining: frames,
            title: None,
            swap_interval: None,
            shown: Vec::new(),
        }
    }
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn is_open(&self) -> bool {
        self.remaining > 0
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.swap_interval = Some(interval);
    }

    fn present(&mut self, cells: &[u8], mode: DisplayMode) -> Result<(), Infallible> {
        self.remaining -= 1;
        self.shown.push((cells.to_vec(), mode));
        Ok(())
    }
}

/// A horizontal blinker, period 2.
fn blinker_world() -> Grid {
    let mut grid = Grid::new(24, 12);
    grid.place(10, 5, &["###"]);
    grid
}

#[test]
fn test_run_configures_and_stops_when_closed() {
    let mut sim = Simulation::with_grid(blinker_world(), StdRng::seed_from_u64(1));
    let mut recorder = Recorder::closing_after(4);

    let frames = display::run(&mut sim, &mut recorder).unwrap();

    assert_eq!(frames, 4);
    assert_eq!(recorder.shown.len(), 4);
    assert_eq!(recorder.title.as_deref(), Some(TITLE));
    assert_eq!(recorder.swap_interval, Some(SWAP_INTERVAL));
    assert_eq!(sim.generation(), 3);
}

#[test]
fn test_blinker_detected_end_to_end() {
    let mut sim = Simulation::with_grid(blinker_world(), StdRng::seed_from_u64(2));
    let mut recorder = Recorder::closing_after(3);
    display::run(&mut sim, &mut recorder).unwrap();

    let modes: Vec<_> = recorder.shown.iter().map(|(_, mode)| *mode).collect();
    assert_eq!(modes, [DisplayMode::Live, DisplayMode::Live, DisplayMode::Cyclic]);
    assert_eq!(sim.phase().cycle().map(|cycle| cycle.len()), Some(2));
}

#[test]
fn test_replay_repeats_captured_cycle() {
    let now = Instant::now();
    let mut sim = Simulation::with_grid(blinker_world(), StdRng::seed_from_u64(3));
    let mut recorder = Recorder::closing_after(usize::MAX);

    while !matches!(sim.phase(), Phase::Replaying { .. }) {
        display::tick(&mut sim, &mut recorder, now).unwrap();
    }
    let captured: Vec<Vec<u8>> = sim
        .phase()
        .cycle()
        .expect("replaying holds a cycle")
        .frames()
        .map(<[u8]>::to_vec)
        .collect();
    let length = captured.len();
    assert_eq!(length, 2);

    recorder.shown.clear();
    for _ in 0..2 * length {
        display::tick(&mut sim, &mut recorder, now).unwrap();
    }
    let shown: Vec<&[u8]> = recorder.shown.iter().map(|(cells, _)| &cells[..]).collect();
    assert!(recorder.shown.iter().all(|(_, mode)| *mode == DisplayMode::Cyclic));

    // Same period twice over, starting wherever the replay happened to be.
    let offset = captured
        .iter()
        .position(|frame| frame[..] == *shown[0])
        .expect("replayed frame was captured");
    for (k, cells) in shown.iter().enumerate() {
        assert_eq!(*cells, &captured[(offset + k) % length][..], "frame {k}");
    }
}

#[test]
fn test_timeout_reseeds_world() {
    let now = Instant::now();
    let mut sim = Simulation::with_grid(blinker_world(), StdRng::seed_from_u64(4));
    let mut recorder = Recorder::closing_after(usize::MAX);

    while !matches!(sim.phase(), Phase::Replaying { .. }) {
        display::tick(&mut sim, &mut recorder, now).unwrap();
    }
    let old = recorder.shown.last().map(|(cells, _)| cells.clone()).unwrap();

    display::tick(&mut sim, &mut recorder, now + Duration::from_secs(5)).unwrap();
    let (fresh, mode) = recorder.shown.last().unwrap();

    assert_eq!(*mode, DisplayMode::Live);
    assert_ne!(fresh, &old);
    assert_ne!(&fresh[..], blinker_world().cells());
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.history().len(), 1);
}

#[test]
fn test_random_world_eventually_cycles() {
    // A small random torus settles quickly; generous bound on generations.
    let now = Instant::now();
    let mut sim = Simulation::new(32, 32, StdRng::seed_from_u64(5));
    let mut recorder = Recorder::closing_after(usize::MAX);
    for _ in 0..20_000 {
        if sim.phase().is_cyclic() {
            break;
        }
        display::tick(&mut sim, &mut recorder, now).unwrap();
    }
    assert!(sim.phase().is_cyclic());
}
