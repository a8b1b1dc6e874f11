use yew::prelude::*;

use crate::motion::idle::{self, IdleJitter, Particle};

/// Randomly scattered particles, drawn once per mount.
#[hook]
pub fn use_particles(count: usize, jitter: IdleJitter) -> UseStateHandle<Vec<Particle>> {
    use_state(move || idle::scatter_particles(&mut rand::thread_rng(), count, jitter))
}

#[hook]
pub fn use_bar_heights(count: usize) -> UseStateHandle<Vec<f64>> {
    use_state(move || idle::bar_heights(&mut rand::thread_rng(), count))
}
