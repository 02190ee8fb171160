use crate::candidate::Weighted;
use crate::source::{RandomSource, RngSource};
use rand::SeedableRng;
use rand_chacha::{ChaCha8Rng, ChaChaRng};
use tracing::trace;

pub type Seed = <ChaChaRng as SeedableRng>::Seed;
pub type TotalWeight = u128;

/// Draw up to `count` distinct winners from `candidates`.
///
/// Each round picks one candidate with probability proportional to its
/// weight among those still in the pool, then removes it. Winners are
/// returned in draw order. Asking for more winners than there are candidates
/// simply yields every candidate once.
///
/// `candidates` is copied and never touched again, so the caller keeps its
/// own order and contents.
pub fn select<T, S>(candidates: &[T], count: usize, source: &mut S) -> Vec<T>
where
    T: Weighted + Clone,
    S: RandomSource + ?Sized,
{
    let mut pool = candidates.to_vec();
    let mut winners = Vec::with_capacity(count.min(pool.len()));

    while winners.len() < count && !pool.is_empty() {
        let index = draw_index(&pool, source);
        trace!(round = winners.len() + 1, index, remaining = pool.len(), "round drawn");
        // Vec::remove keeps the relative order of the survivors
        winners.push(pool.remove(index));
    }

    winners
}

/// Same as [`select`], driven by a ChaCha generator built from `seed` so the
/// outcome can be replayed by anyone holding the seed.
pub fn select_seeded<T>(candidates: &[T], count: usize, seed: Seed) -> Vec<T>
where
    T: Weighted + Clone,
{
    let mut source = RngSource(ChaCha8Rng::from_seed(seed));
    select(candidates, count, &mut source)
}

fn draw_index<T, S>(pool: &[T], source: &mut S) -> usize
where
    T: Weighted,
    S: RandomSource + ?Sized,
{
    let total_weight = pool
        .iter()
        .map(|c| TotalWeight::from(c.weight()))
        .sum::<TotalWeight>();

    let fraction = source.next_fraction();
    debug_assert!(
        (0.0..1.0).contains(&fraction),
        "random source returned {} outside [0, 1)",
        fraction
    );
    let target = fraction * total_weight as f64;

    // Subtracting weights from the target until it is no longer positive stops
    // at the first candidate whose cumulative weight reaches the target.
    let mut cumulative: TotalWeight = 0;
    pool.iter()
        .position(|candidate| {
            cumulative += TotalWeight::from(candidate.weight());
            target <= cumulative as f64
        })
        // All weights zero: the first remaining candidate wins. Kept for
        // compatibility with existing draws, not as a fairness policy.
        .unwrap_or(0)
}
