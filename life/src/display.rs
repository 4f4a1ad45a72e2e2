//! The boundary towards whatever shows the world, and the frame loop.

use std::time::Instant;

use rand::RngCore;

use crate::config::{SWAP_INTERVAL, TITLE};
use crate::simulation::Simulation;

/// Which palette the display should use. Purely cosmetic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    /// The world is running freely.
    Live,
    /// A repeat was detected; the period is being captured or replayed.
    Cyclic,
}

/// A display-ready buffer and how to tint it.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub cells: &'a [u8],
    pub mode: DisplayMode,
}

/// A window, or anything else that can show a frame.
pub trait Renderer {
    type Error;

    /// `false` once the user closed the window. The loop stops on the next check.
    fn is_open(&self) -> bool;

    fn set_title(&mut self, title: &str);

    /// Number of display refreshes to wait per presented frame.
    fn set_swap_interval(&mut self, interval: u32);

    /// Shows one frame: `cells` is row-major, one byte per cell.
    fn present(&mut self, cells: &[u8], mode: DisplayMode) -> Result<(), Self::Error>;
}

/// Applies the fixed title and vsync setting.
pub fn configure<D: Renderer + ?Sized>(display: &mut D) {
    display.set_swap_interval(SWAP_INTERVAL);
    display.set_title(TITLE);
}

/// One loop iteration: advance the simulation and present what it shows.
pub fn tick<R, D>(simulation: &mut Simulation<R>, display: &mut D, now: Instant) -> Result<(), D::Error>
where
    R: RngCore,
    D: Renderer + ?Sized,
{
    let frame = simulation.advance(now);
    display.present(frame.cells, frame.mode)
}

/// Runs until the display closes. Pacing comes from the display's vsync.
///
/// For renderers that block in `present`; event-loop driven windows call
/// [`tick`] from their redraw handler instead.
///
/// Returns the number of frames presented.
pub fn run<R, D>(simulation: &mut Simulation<R>, display: &mut D) -> Result<u64, D::Error>
where
    R: RngCore,
    D: Renderer + ?Sized,
{
    configure(display);
    let mut frames = 0;
    while display.is_open() {
        tick(simulation, display, Instant::now())?;
        frames += 1;
    }
    Ok(frames)
}
