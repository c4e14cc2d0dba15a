pub mod central_panel;
pub mod properties_panel;
pub mod tools_panel;

pub use central_panel::{CanvasResponse, central_panel};
pub use properties_panel::properties_panel;
pub use tools_panel::tools_panel;
