use rand::Rng;

use super::easing::Easing;

/// Timing of one endlessly repeating decorative animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleTiming {
    /// Seconds per cycle.
    pub duration: f64,
    /// Seconds before the first cycle, which doubles as the loop's phase.
    pub delay: f64,
}

impl IdleTiming {
    pub const fn fixed(duration: f64) -> Self {
        Self { duration, delay: 0.0 }
    }

    /// CSS `animation` shorthand running `keyframes` forever. `alternate`
    /// plays every other cycle backwards (a yoyo).
    pub fn css(&self, keyframes: &str, easing: Easing, alternate: bool) -> String {
        format!(
            "{} {:.2}s {} {:.2}s infinite{}",
            keyframes,
            self.duration,
            easing.css(),
            self.delay,
            if alternate { " alternate" } else { "" }
        )
    }
}

/// Randomization bounds for a family of idle loops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleJitter {
    pub base_duration: f64,
    /// Extra duration drawn from `[0, duration_spread)`.
    pub duration_spread: f64,
    /// Start delay drawn from `[0, max_delay)`.
    pub max_delay: f64,
}

impl IdleJitter {
    /// Drifting particles: 3-5s cycles starting within the first 2s.
    pub const PARTICLE: IdleJitter = IdleJitter {
        base_duration: 3.0,
        duration_spread: 2.0,
        max_delay: 2.0,
    };

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> IdleTiming {
        IdleTiming {
            duration: self.base_duration + rng.gen::<f64>() * self.duration_spread,
            delay: rng.gen::<f64>() * self.max_delay,
        }
    }
}

/// A decorative dot placed somewhere in its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Percent of container width.
    pub left: f64,
    /// Percent of container height.
    pub top: f64,
    pub timing: IdleTiming,
}

pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize, jitter: IdleJitter) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: rng.gen::<f64>() * 100.0,
            top: rng.gen::<f64>() * 100.0,
            timing: jitter.sample(rng),
        })
        .collect()
}

/// Bar heights (percent) for the decorative analytics chart, in `[20, 80)`.
pub fn bar_heights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| 20.0 + rng.gen::<f64>() * 60.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particle_timing_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let timing = IdleJitter::PARTICLE.sample(&mut rng);
            assert!((3.0..5.0).contains(&timing.duration), "{:?}", timing);
            assert!((0.0..2.0).contains(&timing.delay), "{:?}", timing);
        }
    }

    #[test]
    fn particles_are_placed_inside_container() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = scatter_particles(&mut rng, 20, IdleJitter::PARTICLE);
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
        }
    }

    #[test]
    fn particles_get_distinct_phases() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = scatter_particles(&mut rng, 20, IdleJitter::PARTICLE);
        let first = particles[0].timing;
        assert!(particles.iter().skip(1).any(|p| p.timing != first));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = scatter_particles(&mut StdRng::seed_from_u64(9), 5, IdleJitter::PARTICLE);
        let b = scatter_particles(&mut StdRng::seed_from_u64(9), 5, IdleJitter::PARTICLE);
        assert_eq!(a, b);
    }

    #[test]
    fn bars_within_chart() {
        let mut rng = StdRng::seed_from_u64(3);
        for h in bar_heights(&mut rng, 100) {
            assert!((20.0..80.0).contains(&h));
        }
    }

    #[test]
    fn zero_spread_is_deterministic() {
        let jitter = IdleJitter {
            base_duration: 4.0,
            duration_spread: 0.0,
            max_delay: 0.0,
        };
        let timing = jitter.sample(&mut StdRng::seed_from_u64(0));
        assert_eq!(timing, IdleTiming::fixed(4.0));
    }

    #[test]
    fn css_shorthand() {
        let css = IdleTiming::fixed(3.0).css("hero-float", Easing::Linear, true);
        assert_eq!(css, "hero-float 3.00s linear 0.00s infinite alternate");
    }
}
