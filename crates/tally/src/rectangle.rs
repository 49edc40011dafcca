//! Rectangle area and perimeter with dimension validation

use serde::Serialize;
use tracing::warn;

use crate::error::{Result, TallyError};

/// A rectangle with strictly positive, finite dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    /// Create a rectangle, rejecting zero, negative, NaN and infinite
    /// dimensions.
    pub fn new(length: f64, width: f64) -> Result<Self> {
        validate_dimensions(length, width)?;
        Ok(Self { length, width })
    }

    /// Length of the rectangle.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// `length * width`
    ///
    /// Only the dimensions are validated: finite dimensions whose product
    /// exceeds `f64::MAX` give `f64::INFINITY`.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// `2 * (length + width)`, which saturates to infinity the same way
    /// [`Rectangle::area`] does.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

/// Stateless calculator for rectangle area and perimeter.
///
/// # Example
///
/// ```
/// use tally::{RectangleCalculator, TallyError};
///
/// let calc = RectangleCalculator::new();
/// assert_eq!(calc.calculate_area(10.0, 5.0), Ok(50.0));
/// assert!(matches!(
///     calc.calculate_perimeter(-3.0, 4.0),
///     Err(TallyError::InvalidDimensions { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleCalculator;

impl RectangleCalculator {
    /// Create a rectangle calculator.
    pub fn new() -> Self {
        Self
    }

    /// Area of a `length` by `width` rectangle.
    pub fn calculate_area(&self, length: f64, width: f64) -> Result<f64> {
        Rectangle::new(length, width).map(|rect| rect.area())
    }

    /// Perimeter of a `length` by `width` rectangle.
    pub fn calculate_perimeter(&self, length: f64, width: f64) -> Result<f64> {
        Rectangle::new(length, width).map(|rect| rect.perimeter())
    }
}

fn validate_dimensions(length: f64, width: f64) -> Result<()> {
    // `> 0.0` is false for NaN
    let valid = |d: f64| d > 0.0 && d.is_finite();
    if valid(length) && valid(width) {
        Ok(())
    } else {
        warn!(length, width, "rejected rectangle dimensions");
        Err(TallyError::InvalidDimensions { length, width })
    }
}
