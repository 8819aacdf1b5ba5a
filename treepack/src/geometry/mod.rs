mod d_transformation;
/// Set of traits shared by the geometric primitives
pub mod geo_traits;
/// Basic geometric primitives
pub mod primitives;
/// Separating Axis Theorem overlap test
pub mod sat;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use transformation::Transformation;
