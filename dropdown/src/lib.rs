pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod markup;
pub mod page;
pub mod registry;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use config::{Binding, DropdownConfig, ExclusivePolicy};
pub use controller::{DropdownController, Markers, MenuLocator};
pub use error::DropdownError;
pub use registry::Dropdowns;

pub mod prelude {
    pub use crate::config::{Binding, DropdownConfig, ExclusivePolicy};
    pub use crate::controller::DropdownController;
    pub use crate::dom::{Activation, Dom};
    pub use crate::error::DropdownError;
    pub use crate::markup::{MenuEntry, nav_dropdown, navbar_dropdown};
    pub use crate::page::install;
    pub use crate::registry::Dropdowns;
}
