//! Mass-ranked gravity pass for the gravity engine
//!
//! Bodies are ranked by mass once per tick. Only the `k` heaviest bodies
//! originate interactions, where `k = min(ceil(resolution^2 / n), n)`, so the
//! number of visited pairs stays near `resolution^2` whatever the population.
//! Lighter bodies still receive impulses (as the `b` side of a pair) but never
//! pull on each other directly.
//!
//! Collisions are resolved in the same pass, reusing the pair's displacement.

use std::cmp::Ordering;

use crate::simulation::collision::{collides, merge_into, MergeLog};
use crate::simulation::states::Body;
use crate::simulation::store::BodyStore;

/// Number of top-mass bodies that originate interactions this tick
pub fn interaction_budget(n: usize, resolution: u32) -> usize {
    if n == 0 {
        return 0;
    }
    let r2 = u64::from(resolution) * u64::from(resolution);
    let n64 = n as u64;
    let k = r2.div_ceil(n64);
    k.min(n64) as usize
}

/// Indices of `bodies` sorted by mass, heaviest first
pub fn mass_ranking(bodies: &[Body]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..bodies.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        bodies[b].m.partial_cmp(&bodies[a].m).unwrap_or(Ordering::Equal)
    });
    order
}

/// Counters for one pairwise pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub originators: usize, // k
    pub pairs: usize, // (a, b) visits with both bodies alive
    pub merges: usize, // bodies absorbed this pass
    pub population: usize, // live bodies after compaction
}

/// Newtonian attraction `m_a * m_b / d^2` over the mass-ranked pair set
///
/// The impulse is added to momentum as is, without scaling by the tick's
/// elapsed time. Positions are scaled by elapsed time in the integrator, so
/// the effective pull depends on tick rate.
#[derive(Debug, Clone)]
pub struct RankedGravity {
    pub resolution: u32,
    pub mass_base: f64,
}

impl RankedGravity {
    pub fn new(resolution: u32, mass_base: f64) -> Self {
        Self { resolution, mass_base }
    }

    /// Run one combined gravity + collision pass over `store`.
    /// Absorbed bodies are only marked dead; the caller compacts afterwards.
    pub fn apply(&self, store: &mut BodyStore, merges: &mut MergeLog) -> PassStats {
        let bodies = store.bodies_mut();
        let n = bodies.len();
        let k = interaction_budget(n, self.resolution);

        let mut stats = PassStats {
            originators: k,
            ..PassStats::default()
        };
        if k == 0 {
            return stats;
        }

        let order = mass_ranking(bodies);

        for i in 0..k {
            let ia = order[i];

            // absorbed earlier in this pass
            if !bodies[ia].alive {
                continue;
            }

            for &ib in &order[(i + 1)..] {
                if !bodies[ib].alive {
                    continue;
                }

                let (a, b) = pair_mut(bodies, ia, ib);
                stats.pairs += 1;

                // r points from a to b, a is pulled along +r and b along -r
                let r = b.x - a.x;
                let d = r.norm();

                // co-located bodies exert nothing on each other
                if d != 0.0 {
                    let g = a.m * b.m / (d * d);
                    let impulse = (r / d) * g;
                    a.p += impulse;
                    b.p -= impulse;
                }

                if collides(a, b, d) {
                    merge_into(a, b, self.mass_base);
                    merges.record(b.id, a.id);
                    stats.merges += 1;
                }
            }
        }

        stats
    }
}

/// Two distinct mutable elements of `bodies`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
