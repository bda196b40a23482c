//! A single particle record and the per-axis update shared by both layouts.

/// One of the seven per-particle fields.
///
/// The declaration order is the order in which the generator draws the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Position along x.
    X,
    /// Position along y.
    Y,
    /// Position along z.
    Z,
    /// Velocity along x.
    Vx,
    /// Velocity along y.
    Vy,
    /// Velocity along z.
    Vz,
    /// Mass.
    M,
}

impl Field {
    /// All fields, in draw order.
    pub const ALL: [Self; 7] = [Self::X, Self::Y, Self::Z, Self::Vx, Self::Vy, Self::Vz, Self::M];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
            Self::Vx => write!(f, "vx"),
            Self::Vy => write!(f, "vy"),
            Self::Vz => write!(f, "vz"),
            Self::M => write!(f, "m"),
        }
    }
}

/// A point particle with a position, a velocity, and a mass.
///
/// This is the record stored contiguously by [`AosParticles`](crate::AosParticles). The `repr(C)` keeps the seven fields interleaved in declaration
/// order, 56 bytes per particle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Position along x.
    pub x: f64,
    /// Position along y.
    pub y: f64,
    /// Position along z.
    pub z: f64,
    /// Velocity along x.
    pub vx: f64,
    /// Velocity along y.
    pub vy: f64,
    /// Velocity along z.
    pub vz: f64,
    /// Mass. Must be strictly positive.
    pub m: f64,
}

impl Particle {
    /// Creates a new `Particle`.
    #[must_use]
    pub const fn new(position: [f64; 3], velocity: [f64; 3], m: f64) -> Self {
        let [x, y, z] = position;
        let [vx, vy, vz] = velocity;
        Self { x, y, z, vx, vy, vz, m }
    }

    /// Returns the position of the `Particle`.
    #[must_use]
    pub const fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the velocity of the `Particle`.
    #[must_use]
    pub const fn velocity(&self) -> [f64; 3] {
        [self.vx, self.vy, self.vz]
    }

    /// Returns the value of the given field.
    #[must_use]
    pub const fn get(&self, field: Field) -> f64 {
        match field {
            Field::X => self.x,
            Field::Y => self.y,
            Field::Z => self.z,
            Field::Vx => self.vx,
            Field::Vy => self.vy,
            Field::Vz => self.vz,
            Field::M => self.m,
        }
    }

    /// Sets the value of the given field.
    pub const fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::X => self.x = value,
            Field::Y => self.y = value,
            Field::Z => self.z = value,
            Field::Vx => self.vx = value,
            Field::Vy => self.vy = value,
            Field::Vz => self.vz = value,
            Field::M => self.m = value,
        }
    }

    /// Advances the `Particle` by one semi-implicit Euler step.
    ///
    /// # Arguments
    ///
    /// - `dt`: The time step.
    /// - `k`: The spring constant of the restoring force towards the origin.
    #[inline]
    pub fn advance(&mut self, dt: f64, k: f64) {
        let inv_m = 1.0 / self.m;
        advance_axis(&mut self.x, &mut self.vx, inv_m, dt, k);
        advance_axis(&mut self.y, &mut self.vy, inv_m, dt, k);
        advance_axis(&mut self.z, &mut self.vz, inv_m, dt, k);
    }

    /// Returns the first field in which `self` and `other` differ, comparing bit patterns.
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<Field> {
        Field::ALL.into_iter().find(|&f| self.get(f).to_bits() != other.get(f).to_bits())
    }
}

/// Advances one axis of one particle.
///
/// The velocity is updated from the force first, and the position is then updated with the new velocity. Both layouts go through this function so that
/// their floating-point operations happen in exactly the same order.
#[inline]
pub(crate) fn advance_axis(pos: &mut f64, vel: &mut f64, inv_m: f64, dt: f64, k: f64) {
    let force = -k * *pos;
    *vel += force * inv_m * dt;
    *pos += *vel * dt;
}
