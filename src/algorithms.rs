pub mod hole_merge;
pub mod projection;
pub mod triangulation;

#[doc(inline)]
pub use hole_merge::{merge_hole, merge_holes};

#[doc(inline)]
pub use projection::project;

#[doc(inline)]
pub use triangulation::earclip::triangulate;
