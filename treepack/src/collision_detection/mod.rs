mod collision_index;
mod hazard;

#[doc(inline)]
pub use collision_index::CollisionIndex;
#[doc(inline)]
pub use collision_index::is_admissible;
#[doc(inline)]
pub use hazard::Hazard;
