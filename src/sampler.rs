use std::collections::HashSet;

use ndarray::{stack, Array1, Axis};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::lattice::{Bounds, Point};

/// Draws uniformly distributed points from the integer lattice of a [`Bounds`].
///
/// Both axes are sampled independently and every lattice point is equally
/// likely per draw. [`UniformSampler::generate`] drops candidates whose
/// coordinate pair was already accepted and draws again, so a generated batch
/// is pairwise distinct.
pub struct UniformSampler {
    bounds: Bounds,
    rng: StdRng,
}

impl UniformSampler {
    /// Sampler seeded from OS entropy.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed, reproducible across runs.
    pub fn seeded(bounds: Bounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Generate `count` points with pairwise distinct coordinates, indexed
    /// 0-based in the order they were accepted.
    ///
    /// Inverted bounds or a zero count yield an empty batch instead of an
    /// error. A count exceeding the number of distinct lattice points is
    /// capped to it, the retry loop could otherwise spin forever.
    pub fn generate(&mut self, count: usize) -> Vec<Point> {
        if count == 0 || !self.bounds.is_valid() {
            return Vec::new();
        }
        let target = usize::try_from(self.bounds.lattice_size())
            .map_or(count, |size| count.min(size));

        let along_x = Uniform::new_inclusive(self.bounds.x_min(), self.bounds.x_max());
        let along_y = Uniform::new_inclusive(self.bounds.y_min(), self.bounds.y_max());

        let mut seen = HashSet::with_capacity(target);
        let mut points = Vec::with_capacity(target);
        while points.len() < target {
            let missing = target - points.len();
            // candidate coordinates for this round, drawn column wise per axis
            let candidates = stack![
                Axis(1),
                Array1::<i32>::random_using((missing,), along_x, &mut self.rng),
                Array1::<i32>::random_using((missing,), along_y, &mut self.rng)
            ];
            for i in 0..missing {
                let (x, y) = (candidates[[i, 0]], candidates[[i, 1]]);
                // coordinates seen before are dropped and redrawn next round
                if seen.insert((x, y)) {
                    points.push(Point::indexed(x, y, points.len()));
                }
            }
        }
        points
    }
}

/// The endless candidate stream behind [`UniformSampler::generate`]: uniform
/// draws with no distinctness applied, all carrying index 0. The stream is
/// immediately exhausted when the bounds are inverted.
impl Iterator for UniformSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.bounds.is_valid() {
            return None;
        }
        let x = self.rng.gen_range(self.bounds.x_min()..=self.bounds.x_max());
        let y = self.rng.gen_range(self.bounds.y_min()..=self.bounds.y_max());
        Some(Point::new(x, y))
    }
}
