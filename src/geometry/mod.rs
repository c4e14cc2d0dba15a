pub mod hit_testing;
pub mod snapping;

pub use hit_testing::{hit_test, topmost_element_at};
pub use snapping::apply_snapping;
