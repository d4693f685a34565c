mod central_panel;
mod project_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use project_panel::project_panel;
pub use tools_panel::tools_panel;
