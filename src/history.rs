//! Bounded history buffers for the trail and the speed series.
//!
//! Both recorders are fixed-capacity FIFO buffers: once full, pushing a
//! new sample evicts the oldest one. Index 0 is always the oldest
//! retained sample, which keeps trail rendering and graph plotting a
//! simple front-to-back walk.

use std::collections::VecDeque;

use bevy::math::DVec2;

/// Fixed-capacity FIFO sample buffer.
#[derive(Clone, Debug)]
pub struct HistoryBuffer<T> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryBuffer<T> {
    /// Create an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "history buffers need room for at least one sample");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, sample: T) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sample at `index`, where 0 is the oldest retained sample.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.samples.get(index)
    }

    /// Oldest retained sample.
    pub fn front(&self) -> Option<&T> {
        self.samples.front()
    }

    /// Newest retained sample.
    pub fn back(&self) -> Option<&T> {
        self.samples.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.samples.iter()
    }

    /// Drop all samples, keeping the capacity.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Probe positions in km, oldest first.
pub type TrailBuffer = HistoryBuffer<DVec2>;

/// One point of the speed-over-time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedSample {
    /// Simulation time in seconds since the run started
    pub time: f64,
    /// Probe speed in km/s
    pub speed: f64,
}

/// Probe speed samples, oldest first.
pub type SpeedSeries = HistoryBuffer<SpeedSample>;
