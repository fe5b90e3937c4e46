use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub mod mt19937;

pub use mt19937::Mt19937;

/// A seeded stream of reals in [0, 1).
///
/// Draw routines take the source by `&mut`, so every call advances one
/// explicit state object and the draw order is visible at the call site.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;

    /// `lo + (hi - lo) * u`, one unit draw per call.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }
}

impl UnitSource for Mt19937 {
    fn next_unit(&mut self) -> f64 { Mt19937::next_unit(self) }
}

impl UnitSource for SmallRng {
    fn next_unit(&mut self) -> f64 { self.gen::<f64>() }
}

/// Which pseudo-random generator backs the draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Mersenne Twister, stream-compatible with the reference Python generator.
    #[default]
    Mt19937,
    /// `rand`'s small fast generator; reproducible within this crate only.
    Small,
}

impl Generator {
    /// Mt19937 seeds with `|seed|` like CPython, so `-42` and `42` give the same
    /// stream. `Small` reinterprets the bits, keeping negative seeds distinct.
    pub fn source(self, seed: i64) -> Box<dyn UnitSource> {
        match self {
            Generator::Mt19937 => Box::new(Mt19937::new(seed.unsigned_abs())),
            Generator::Small => Box::new(SmallRng::seed_from_u64(seed as u64)),
        }
    }
}
