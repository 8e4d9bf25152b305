pub mod capitalize;
pub mod ipsum;
pub mod punctuate;
pub mod word_list;

use rand::Rng;
use rand::rngs::SmallRng;

use crate::config::OutputOverrides;
use crate::error::Result;

pub trait TextGenerator {
    fn generate(&mut self, overrides: &OutputOverrides) -> Result<String>;
}

/// Uniform integer in `min..max`, or `min` when the range is empty.
/// `max` itself is never produced.
pub(crate) fn rand_between(rng: &mut SmallRng, min: usize, max: usize) -> usize {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
