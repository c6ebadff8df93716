//! UI Components

mod auth_form;
mod header;
mod layer_control;
mod map_view;

pub use auth_form::{AuthForm, AuthSubmit};
pub use header::Header;
pub use layer_control::LayerControl;
pub use map_view::{BasicMap, MapView};
