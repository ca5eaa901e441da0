//! The textual point and knot formats used by curve editors.
//!
//! Control points are written one per line as `x,y[,weight]`, with the
//! weight defaulting to `1`. Knots are a single comma-separated list.

use crate::{error::ParseError, ControlPoint};
use alloc::{string::String, vec::Vec};
use core::{fmt::Write, str::FromStr};
use num_traits::Float;

impl<T: Float + FromStr> FromStr for ControlPoint<T> {
    type Err = ParseError;

    /// Parses a single `x,y[,weight]` line. Errors report line `1`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line, 1)
    }
}

fn parse_line<T: Float + FromStr>(
    line: &str,
    number: usize,
) -> Result<ControlPoint<T>, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(ParseError::FieldCount {
            line: number,
            found: fields.len(),
        });
    }

    let number_at = |field: &str| {
        field.parse::<T>().map_err(|_| ParseError::InvalidNumber {
            line: number,
            field: field.into(),
        })
    };

    let x = number_at(fields[0])?;
    let y = number_at(fields[1])?;
    let weight = match fields.get(2) {
        Some(&field) if !field.is_empty() => number_at(field)?,
        _ => T::one(),
    };
    if !(weight > T::zero()) {
        return Err(ParseError::NonPositiveWeight { line: number });
    }

    Ok(ControlPoint::new(x, y, weight))
}

/// Parses one control point per line, skipping blank lines.
///
/// # Examples
/// ```
/// use rational_curves::{parse_control_points, ControlPoint};
///
/// let points = parse_control_points::<f64>("0,0\n1, 2, 0.5\n\n2,0").unwrap();
/// assert_eq!(points[1], ControlPoint::new(1.0, 2.0, 0.5));
/// assert_eq!(points[2].weight, 1.0);
/// ```
pub fn parse_control_points<T: Float + FromStr>(
    text: &str,
) -> Result<Vec<ControlPoint<T>>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Parses a comma-separated knot list, skipping empty entries.
///
/// Errors report the zero-based position of the field in `text`, empty
/// fields included.
pub fn parse_knots<T: FromStr>(text: &str) -> Result<Vec<T>, ParseError> {
    text.split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, field)| !field.is_empty())
        .map(|(index, field)| {
            field.parse().map_err(|_| ParseError::InvalidKnot {
                index,
                field: field.into(),
            })
        })
        .collect()
}

/// Writes `x,y,weight` lines with two decimals.
pub fn format_control_points<T: Float + core::fmt::Display>(
    points: &[ControlPoint<T>],
) -> String {
    let mut text = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        // Writing into a `String` cannot fail.
        let _ = write!(text, "{:.2},{:.2},{:.2}", point.x, point.y, point.weight);
    }
    text
}

/// Writes knots comma-separated with three decimals.
pub fn format_knots<T: Float + core::fmt::Display>(knots: &[T]) -> String {
    let mut text = String::new();
    for (i, knot) in knots.iter().enumerate() {
        if i > 0 {
            text.push(',');
        }
        let _ = write!(text, "{:.3}", knot);
    }
    text
}
