//! Fixed-step position integrator
//!
//! Explicit Euler drift driven by the momentum accumulated up to the end of
//! the previous tick. Momentum itself is only changed by the pairwise pass.

use super::store::BodyStore;

/// Advance every live body by one step of `dt`:
/// x_n+1 = x_n + dt * p_n / m
pub fn euler_integrator(store: &mut BodyStore, dt: f64) {
    if store.is_empty() || dt == 0.0 {
        return;
    }

    for b in store.bodies_mut().iter_mut().filter(|b| b.alive) {
        b.x += dt * b.p / b.m;
    }
}
