//! Model layer - recipe data and the state it drives
//!
//! - `Recipe` - a record from the recipe service
//! - `Query` / `Endpoint` / `Trigger` - what gets asked and where
//! - `UiStatus` - which state the output region is in
//! - `Focus` - which panel receives keys
//! - `ModalStack` - overlay management

pub mod endpoint;
pub mod modal;
pub mod navigation;
pub mod query;
pub mod recipe;
pub mod status;
pub mod ui;

pub use endpoint::Endpoint;
pub use navigation::{route, Shortcut, Trigger};
pub use query::Query;
pub use recipe::Recipe;
pub use status::{Severity, UiStatus};
pub use ui::Focus;
