use rand::seq::SliceRandom;
use rand::Rng;

const PARTICLE_COUNT: usize = 30;
const DURATION_TICKS: u32 = 30;
const GRAVITY: f64 = 15.0;
const TICK_DT: f64 = 0.1;

const SYMBOLS: [char; 5] = ['*', '+', '·', 'x', '✦'];

/// One piece of confetti over the summary screen.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl Particle {
    fn scatter(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *SYMBOLS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.0..3.0),
        }
    }

    fn step(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += GRAVITY * dt;
        self.age += dt;
        self.age < self.max_age
    }
}

/// New-high-score burst. Advanced by the runtime tick so it needs no wall
/// clock, which keeps it deterministic under test.
#[derive(Debug, Default)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub is_active: bool,
    ticks: u32,
    width: f64,
    height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burst from the middle of the screen.
    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.ticks = 0;
        self.is_active = true;
        self.width = width as f64;
        self.height = height as f64;

        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;

        for _ in 0..PARTICLE_COUNT {
            let x = center_x + rng.gen_range(-12.0..12.0);
            let y = center_y + rng.gen_range(-5.0..5.0);
            self.particles.push(Particle::scatter(x, y, &mut rng));
        }
    }

    /// Advance one runtime tick. Expired and off-screen particles are
    /// culled; the whole animation stops after its fixed duration.
    pub fn on_tick(&mut self) {
        if !self.is_active {
            return;
        }

        self.ticks += 1;
        if self.ticks >= DURATION_TICKS {
            self.is_active = false;
            self.particles.clear();
            return;
        }

        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|particle| {
            let alive = particle.step(TICK_DT);
            let buffer = 5.0;
            let off_screen = particle.y > height + buffer
                || particle.x < -buffer
                || particle.x > width + buffer;
            alive && !off_screen
        });
    }
}
