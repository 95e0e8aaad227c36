use std::time::Duration;

use rand::Rng;

use crate::domain::weather::Animation;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
}

/// Backdrop animation, driven by the frame ticker.
#[derive(Debug)]
pub struct ParticleEngine {
    disabled: bool,
    pub particles: Vec<Particle>,
    accumulator: f32,
    animation: Animation,
}

impl ParticleEngine {
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled,
            particles: Vec::new(),
            accumulator: 0.0,
            animation: Animation::None,
        }
    }

    pub fn reset(&mut self) {
        self.particles.clear();
    }

    pub fn update(&mut self, animation: Animation, dt: Duration) {
        if self.disabled {
            self.particles.clear();
            return;
        }
        if animation != self.animation {
            self.animation = animation;
            self.particles.clear();
        }

        let dt = dt.as_secs_f32().clamp(0.0, 0.25);
        self.accumulator += dt;

        if self.accumulator >= spawn_interval(animation) {
            self.accumulator = 0.0;
            for _ in 0..density(animation) {
                if let Some(p) = spawn_particle(animation) {
                    self.particles.push(p);
                }
            }
        }

        let step = dt * 60.0;
        for p in &mut self.particles {
            p.x += p.vx * step;
            p.y += p.vy * step;
        }
        self.particles
            .retain(|p| p.y < 1.2 && p.x > -0.2 && p.x < 1.2);
    }
}

fn spawn_interval(animation: Animation) -> f32 {
    match animation {
        Animation::Clouds => 0.6,
        _ => 0.04,
    }
}

fn density(animation: Animation) -> usize {
    match animation {
        Animation::Rain => 10,
        Animation::Snow => 4,
        Animation::Clouds => 1,
        Animation::Sun | Animation::None => 0,
    }
}

fn spawn_particle(animation: Animation) -> Option<Particle> {
    let mut rng = rand::rng();

    match animation {
        Animation::Rain => Some(Particle {
            x: rng.random_range(0.0..1.0),
            y: 0.0,
            vx: rng.random_range(-0.0005..0.0005),
            vy: rng.random_range(0.008..0.015),
            glyph: '│',
        }),
        Animation::Snow => Some(Particle {
            x: rng.random_range(0.0..1.0),
            y: 0.0,
            vx: rng.random_range(-0.0015..0.0015),
            vy: rng.random_range(0.002..0.006),
            glyph: '•',
        }),
        Animation::Clouds => Some(Particle {
            x: -0.1,
            y: rng.random_range(0.05..0.95),
            vx: rng.random_range(0.0006..0.0015),
            vy: 0.0,
            glyph: '·',
        }),
        Animation::Sun | Animation::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_engine_never_spawns() {
        let mut engine = ParticleEngine::new(true);
        engine.update(Animation::Rain, Duration::from_millis(100));
        assert!(engine.particles.is_empty());
    }

    #[test]
    fn rain_spawns_particles_that_stay_in_view_bounds() {
        let mut engine = ParticleEngine::new(false);
        for _ in 0..20 {
            engine.update(Animation::Rain, Duration::from_millis(50));
        }
        assert!(!engine.particles.is_empty());
        assert!(engine.particles.iter().all(|p| p.y < 1.2));
    }

    #[test]
    fn sun_and_none_are_static() {
        let mut engine = ParticleEngine::new(false);
        engine.update(Animation::Sun, Duration::from_millis(100));
        engine.update(Animation::None, Duration::from_millis(100));
        assert!(engine.particles.is_empty());
    }

    #[test]
    fn switching_animation_clears_old_particles() {
        let mut engine = ParticleEngine::new(false);
        engine.update(Animation::Snow, Duration::from_millis(100));
        assert!(!engine.particles.is_empty());
        engine.update(Animation::Sun, Duration::from_millis(100));
        assert!(engine.particles.is_empty());
    }
}
