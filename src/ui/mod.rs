pub mod common;
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod enhancements;
pub mod icon;
pub mod pages;
pub mod theme;

pub use contact_form::ContactForm;
pub use enhancements::Enhancements;
pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage};
pub use theme::ThemeToggle;
