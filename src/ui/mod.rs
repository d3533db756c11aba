//! egui front end

mod app;
pub mod components;
mod fonts;
pub mod pages;
pub mod theme;
pub mod toast;

pub use app::AgriApp;
pub use pages::{ActivePage, PageAction, PageContext};
pub use theme::Theme;
pub use toast::{Toast, ToastKind, Toasts};
