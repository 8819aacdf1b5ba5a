//! Core of the tree packing engine: places copies of a single polygon on the plane
//! without overlap and measures how tightly they fit in a square.

/// Everything related to detecting overlap between placed shapes
pub mod collision_detection;

/// Entities describing shapes, their placements and the resulting packings
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Exporting packings out of this library
pub mod io;

/// Quality measure of a packing
pub mod scoring;

/// Helper functions which do not belong to any specific module
pub mod util;
