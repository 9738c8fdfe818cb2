//! Polyline representation for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences, with conversion to and from the compact
//! encoded string form at dimension 2.

use serde::{Deserialize, Serialize};

use crate::coords;
use crate::error::CodecError;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing;
/// the encoded string form is produced and consumed at the boundary
/// via [`Polyline::encoded`] and [`Polyline::from_encoded`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a Polyline from its encoded string form.
    ///
    /// The flat coordinate sequence is paired up as (latitude,
    /// longitude) tuples. A dangling unpaired coordinate is dropped.
    pub fn from_encoded(s: &str) -> Result<Self, CodecError> {
        let flat = coords::decode(s, 2)?;
        if flat.len() % 2 != 0 {
            tracing::debug!(
                len = flat.len(),
                "dropping dangling coordinate from encoded polyline"
            );
        }
        let points = flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
        Ok(Self { points })
    }

    /// Returns the encoded string form of this polyline.
    pub fn encoded(&self) -> String {
        let mut flat = Vec::with_capacity(self.points.len() * 2);
        for &(lat, lng) in &self.points {
            flat.push(lat);
            flat.push(lng);
        }
        coords::encode(&flat, 2)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
