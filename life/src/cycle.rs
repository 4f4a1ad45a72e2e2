//! Bookkeeping for repeat detection and replay.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::MIN_REPLAY;

/// First generation at which each fingerprint was seen.
#[derive(Default, Debug)]
pub struct History {
    first_seen: HashMap<u64, u64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `fingerprint` for `generation`.
    ///
    /// Returns the cycle length if the fingerprint was already recorded. The
    /// first occurrence is kept, so repeated calls keep measuring against it.
    pub fn observe(&mut self, fingerprint: u64, generation: u64) -> Option<u64> {
        match self.first_seen.get(&fingerprint) {
            Some(&first) => Some(generation - first),
            None => {
                self.first_seen.insert(fingerprint, generation);
                None
            }
        }
    }

    pub fn first_seen(&self, fingerprint: u64) -> Option<u64> {
        self.first_seen.get(&fingerprint).copied()
    }

    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.first_seen.clear();
    }
}

/// One period of a repeating world, filled in generation by generation.
#[derive(Debug)]
pub struct CapturedCycle {
    length: usize,
    start: u64,
    frames: Vec<Box<[u8]>>,
}

impl CapturedCycle {
    /// An empty capture of `length` frames whose first frame will be
    /// generation `start`.
    pub fn new(length: usize, start: u64) -> Self {
        assert!(length > 0, "a cycle has at least one frame");
        CapturedCycle {
            length,
            start,
            frames: Vec::with_capacity(length),
        }
    }

    /// Stores the next generation of the period. Ignored once complete.
    pub fn capture(&mut self, cells: &[u8]) {
        if !self.is_complete() {
            self.frames.push(cells.into());
        }
    }

    pub fn is_complete(&self) -> bool {
        self.frames.len() == self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn captured(&self) -> usize {
        self.frames.len()
    }

    /// The captured frame showing the same state as `generation`.
    ///
    /// `None` until that frame has been captured, or for generations before
    /// the capture began.
    pub fn frame(&self, generation: u64) -> Option<&[u8]> {
        let offset = generation.checked_sub(self.start)?;
        let slot = (offset % self.length as u64) as usize;
        self.frames.get(slot).map(|frame| &frame[..])
    }

    /// Frames in capture order.
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(|frame| &frame[..])
    }
}

/// How long a cycle of `cycle_length` generations is replayed.
pub fn replay_duration(cycle_length: usize) -> Duration {
    Duration::from_secs_f64((cycle_length as f64).sqrt()).max(MIN_REPLAY)
}
