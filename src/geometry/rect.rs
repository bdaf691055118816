//! Axis-aligned rectangle representation with utility methods.
//!
//! This module provides the [`Rect`] type used throughout the coordinate
//! pipeline. A `Rect` carries no intrinsic unit; the pipeline moves it
//! through three conceptual spaces (raw backend pixels, display pixels,
//! canonical unit coordinates) and only the canonical form crosses module
//! boundaries.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its minimum corner and extent.
///
/// # Coordinate Spaces
///
/// The same shape is used in three spaces:
/// - **Raw backend pixels**: top-left origin, as reported by an OCR engine
///   against the image's undecoded storage orientation.
/// - **Display pixels**: top-left origin, after the image's orientation tag
///   has been applied.
/// - **Canonical unit**: bottom-left origin, all values in `[0, 1]`. This is
///   the sole interchange form between normalization and view mapping; see
///   [`Rect::clamp_unit`].
///
/// # Serialization
///
/// Serializes as `{"x": .., "y": .., "width": .., "height": ..}`, matching
/// the wire shape the OCR bridges emit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner x coordinate.
    pub x: f64,
    /// Minimum corner y coordinate.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a new `Rect` from its minimum corner and extent.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a zero-sized `Rect` at the origin.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the minimum x coordinate (left edge).
    #[inline]
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Returns the maximum x coordinate (right edge).
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the minimum y coordinate.
    #[inline]
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Returns the maximum y coordinate.
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the center point of the rectangle.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Clamps the rectangle into the unit square `[0,1] x [0,1]`.
    ///
    /// Detector noise routinely overshoots the image bounds by a pixel or
    /// two; canonical rectangles are clamped rather than dropped so that a
    /// noisy detection still renders. The minimum corner is clamped first
    /// and the extent is then shortened so `max_x`/`max_y` stay inside the
    /// square.
    #[must_use]
    pub fn clamp_unit(&self) -> Self {
        let x = self.x.clamp(0.0, 1.0);
        let y = self.y.clamp(0.0, 1.0);
        let width = self.width.clamp(0.0, 1.0 - x);
        let height = self.height.clamp(0.0, 1.0 - y);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether every edge of the rectangle lies inside the unit square.
    #[inline]
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.max_x() <= 1.0
            && self.max_y() <= 1.0
    }

    /// Compares two rectangles within a floating point tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

/// Converts to a [`geo::Rect`] spanning the same corners.
impl From<Rect> for geo::Rect<f64> {
    #[inline]
    fn from(r: Rect) -> Self {
        geo::Rect::new(
            Coord { x: r.min_x(), y: r.min_y() },
            Coord { x: r.max_x(), y: r.max_y() },
        )
    }
}
