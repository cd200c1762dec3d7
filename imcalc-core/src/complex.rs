// Complex number value type in Cartesian form

use crate::compat::fmt;
use core::f64::consts::PI;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(target_os = "none")]
use num_traits::Float;

#[cfg(feature = "complex_numbers")]
use num_complex::Complex64;

/// A complex number `real + imaginary·i` with `f64` components.
///
/// Values are immutable: every operation returns a new number. Any pair of
/// doubles is accepted, and NaN or infinite components propagate through the
/// arithmetic the way IEEE 754 says they do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    real: f64,
    imaginary: f64,
}

impl ComplexNumber {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Cartesian form of the point at distance `r` and angle `theta` (radians).
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    #[inline]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[inline]
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Distance from the origin, `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        self.abs_squared().sqrt()
    }

    /// Angle from the positive real axis in `(-π, π]`. The origin has angle 0.
    ///
    /// A negative real number with a `-0.0` imaginary part still gets `π`:
    /// it prints the same as one with `+0.0`, so it must measure the same.
    pub fn argument(&self) -> f64 {
        let theta = self.imaginary.atan2(self.real);
        if theta == -PI { PI } else { theta }
    }

    /// Squared magnitude, without the square root.
    pub fn abs_squared(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// `(magnitude, argument)`
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.argument())
    }

    /// Integer power by De Moivre's theorem: `rⁿ(cos nθ + i sin nθ)`.
    ///
    /// Zero raised to a negative power gives infinite or NaN components.
    pub fn pow(&self, n: i32) -> Self {
        let (r, theta) = self.to_polar();
        let angle = f64::from(n) * theta;
        let scale = r.powi(n);
        Self::new(scale * angle.cos(), scale * angle.sin())
    }
}

impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

// Dividing by zero is not guarded: the components come out as inf or NaN
impl Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let numerator = self * rhs.conjugate();
        let denominator = rhs.abs_squared();
        Self::new(numerator.real / denominator, numerator.imaginary / denominator)
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

// RUST CONCEPT: Display doubles as the format operation, so to_string() and
// format!("{}") both render "a+bi" / "a-bi" with default f64 formatting
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaN and -0.0 both take '+'
        let sign = if self.imaginary < 0.0 { '-' } else { '+' };
        write!(f, "{}{}{}i", self.real, sign, self.imaginary.abs())
    }
}

#[cfg(feature = "complex_numbers")]
impl From<Complex64> for ComplexNumber {
    fn from(c: Complex64) -> Self {
        Self::new(c.re, c.im)
    }
}

#[cfg(feature = "complex_numbers")]
impl From<ComplexNumber> for Complex64 {
    fn from(c: ComplexNumber) -> Self {
        Complex64::new(c.real, c.imaginary)
    }
}
