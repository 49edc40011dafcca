//! Rectangle calculator behaviour

use pretty_assertions::assert_eq;
use tally::*;

#[test]
fn test_area() {
    let calc = RectangleCalculator::new();
    assert_eq!(calc.calculate_area(10.0, 5.0), Ok(50.0));
}

#[test]
fn test_perimeter() {
    let calc = RectangleCalculator::new();
    assert_eq!(calc.calculate_perimeter(10.0, 5.0), Ok(30.0));
}

#[test]
fn test_negative_length_fails_both_operations() {
    let calc = RectangleCalculator::new();
    let expected = Err(TallyError::InvalidDimensions {
        length: -3.0,
        width: 4.0,
    });
    assert_eq!(calc.calculate_area(-3.0, 4.0), expected);
    assert_eq!(calc.calculate_perimeter(-3.0, 4.0), expected);
}

#[test]
fn test_negative_width_fails() {
    let calc = RectangleCalculator::new();
    assert!(calc.calculate_area(3.0, -4.0).is_err());
}

#[test]
fn test_validation_message() {
    let err = RectangleCalculator::new()
        .calculate_area(0.0, 1.0)
        .unwrap_err();
    assert_eq!(err.to_string(), "Length and width must be positive values.");
}

#[test]
fn test_rectangle_value_type() {
    let rect = Rectangle::new(2.5, 4.0).unwrap();
    assert_eq!(rect.area(), 10.0);
    assert_eq!(rect.perimeter(), 13.0);
}

#[test]
fn test_huge_finite_dimensions_saturate_to_infinity() {
    let calc = RectangleCalculator::new();
    assert_eq!(calc.calculate_area(1e200, 1e200), Ok(f64::INFINITY));
    assert_eq!(calc.calculate_perimeter(f64::MAX, f64::MAX), Ok(f64::INFINITY));
}
