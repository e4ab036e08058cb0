pub mod lattice;
pub mod sampler;
pub mod scatter;

use crate::lattice::{Bounds, Point};
use crate::sampler::UniformSampler;

/// Generate `count` points with pairwise distinct coordinates drawn uniformly
/// from `bounds`, indexed in generation order.
///
/// One-shot convenience over [`UniformSampler`] seeded from OS entropy; see
/// [`UniformSampler::generate`] for the exact contract.
pub fn generate(count: usize, bounds: Bounds) -> Vec<Point> {
    UniformSampler::new(bounds).generate(count)
}
