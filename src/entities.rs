use crate::constants::*;
use crate::rendering::FieldGrid;
use log::debug;
use rand::Rng;
use vector2d::Vector2D;

// --- Drifter: wanders the field and wraps at the edges ---
pub struct Drifter {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub display_char: char,
}

impl Drifter {
    pub fn new(position: Vector2D, rng: &mut impl Rng) -> Self {
        Drifter {
            position,
            velocity: Vector2D::random_unit(rng).multiplied(DRIFTER_SPEED),
            display_char: 'o',
        }
    }

    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let position = Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        Drifter::new(position, rng)
    }

    pub fn update(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
        let jitter = rng.gen_range(-DRIFTER_TURN_JITTER..=DRIFTER_TURN_JITTER);
        self.velocity = self.velocity.rotated(jitter);
        self.position = self.position.add(self.velocity).wrap(width, height);
    }

    pub fn draw(&self, grid: &mut FieldGrid) {
        let (x, y) = grid.cell_for(self.position);
        grid.set_char(x, y, self.display_char);
    }
}

// --- Seeker: steers towards the nearest drifter, taking wrap-around into account ---
pub struct Seeker {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub max_speed: f64,
}

impl Seeker {
    pub fn new(x: f64, y: f64) -> Self {
        Seeker {
            position: Vector2D::new(x, y),
            velocity: Vector2D::ZERO,
            max_speed: SEEKER_MAX_SPEED,
        }
    }

    /// Index of the closest drifter on the torus and the offset to it.
    pub fn nearest(&self, drifters: &[Drifter], width: f64, height: f64) -> Option<(usize, Vector2D)> {
        drifters
            .iter()
            .map(|d| self.position.wrapped_distance_vector(d.position, width, height))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.magnitude_squared().total_cmp(&b.magnitude_squared()))
    }

    pub fn steer_towards(&mut self, offset: Vector2D) {
        let distance = offset.magnitude();
        let desired = if distance > 0.0 {
            offset.divided(distance).multiplied(self.max_speed)
        } else {
            Vector2D::ZERO
        };
        let steering = desired.subtract(self.velocity).multiplied(SEEKER_STEERING_GAIN);
        self.velocity = self.velocity.add(steering);
        if self.velocity.magnitude_squared() > self.max_speed * self.max_speed {
            self.velocity = self.velocity.normalised().multiplied(self.max_speed);
        }
    }

    pub fn update(&mut self, width: f64, height: f64) {
        self.position = self.position.add(self.velocity).wrap(width, height);
    }

    /// Picks an arrow for the dominant screen axis of the heading (y grows downwards).
    pub fn heading_char(&self) -> char {
        let right = self.velocity.dot(Vector2D::new(1.0, 0.0));
        let down = self.velocity.dot(Vector2D::new(0.0, 1.0));
        if right == 0.0 && down == 0.0 {
            '@'
        } else if right.abs() >= down.abs() {
            if right > 0.0 { '>' } else { '<' }
        } else if down > 0.0 {
            'v'
        } else {
            '^'
        }
    }

    pub fn draw(&self, grid: &mut FieldGrid) {
        let (x, y) = grid.cell_for(self.position);
        grid.set_char(x, y, self.heading_char());
        debug!("Seeker at {} heading {}", self.position, self.velocity);
    }
}
