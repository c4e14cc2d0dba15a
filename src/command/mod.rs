pub mod actions;
pub mod history;
pub mod reducer;

pub use actions::Action;
pub use history::History;
pub use reducer::reduce;
