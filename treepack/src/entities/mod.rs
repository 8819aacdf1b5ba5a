mod bounding_box;
mod layout;
mod packing;
mod placed_shape;
mod template;

#[doc(inline)]
pub use bounding_box::bounding_box;
#[doc(inline)]
pub use bounding_box::bounding_box_size;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use packing::Packing;
#[doc(inline)]
pub use placed_shape::PlacedShape;
#[doc(inline)]
pub use placed_shape::Placement;
#[doc(inline)]
pub use template::ShapeTemplate;
