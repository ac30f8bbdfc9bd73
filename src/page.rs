mod dashboard;
pub use dashboard::*;
mod login;
pub use login::*;
pub mod projects;
pub use projects::Projects;
mod register;
pub use register::*;
mod workspace_detail;
pub use workspace_detail::*;
mod workspaces;
pub use workspaces::*;
