mod auth_switch;
pub use auth_switch::*;
mod banner;
pub use banner::*;
mod field;
pub use field::*;
mod navbar;
pub use navbar::*;
pub mod project_modal;
pub mod workspace_modal;
