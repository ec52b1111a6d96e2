//! Deterministic RNG handle and batch-filling helpers.

use std::hash::Hasher;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use siphasher::sip::SipHasher13;

use crate::batch::Batch;

/// Deterministic RNG used by samplers and by the testers' internal
/// reconstruction draws.
///
/// A master `seed: u64` fully determines the stream. Independent substreams
/// are derived by hashing `(master_seed, stream)` with SipHash-1-3 under
/// fixed zero keys, which is stable across platforms; forking the same
/// stream index twice yields identical draws.
#[derive(Debug, Clone)]
pub struct SampleRng {
    master: u64,
    rng: StdRng,
}

impl SampleRng {
    /// Creates a handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            master: seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle with a fresh master seed drawn from the OS.
    pub fn from_entropy() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Returns the master seed the handle was built from.
    pub fn master_seed(&self) -> u64 {
        self.master
    }

    /// Forks an independent deterministic handle for the given stream index.
    pub fn substream(&self, stream: u64) -> Self {
        Self::from_seed(stream_seed(self.master, stream))
    }

    /// Draws a `rows x cols` batch of standard normal entries.
    pub fn gaussian_batch(&mut self, rows: usize, cols: usize) -> Batch {
        Batch::from_fn(rows, cols, |_, _| self.rng.sample::<f64, _>(StandardNormal))
    }

    /// Draws a `rows x cols` batch of entries uniform over `[low, high)`.
    pub fn uniform_batch(&mut self, low: f64, high: f64, rows: usize, cols: usize) -> Batch {
        Batch::from_fn(rows, cols, |_, _| self.rng.gen_range(low..high))
    }
}

impl RngCore for SampleRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific stream index.
pub fn stream_seed(master_seed: u64, stream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(stream);
    hasher.finish()
}
