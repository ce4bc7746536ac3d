//! Core page behavior, independent of the browser
//!
//! Everything here is plain Rust: the `ui` layer turns DOM events into calls
//! on these types and applies the styles they return.

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod controller;
pub mod counter;
pub mod enhancements;
pub mod header;
pub mod motion;
pub mod navigation;
pub mod progress;
pub mod reveal;
pub mod selectors;
pub mod site;
#[cfg(test)]
mod tests;
pub mod typing;

pub use contact::{ContactField, ContactForm, FieldError, ValidationReport, validate_contact_form};
pub use controller::{PageController, PageLayout, ScrollSnapshot, ScrollUpdate};
pub use counter::{CounterFrame, CounterRun, CounterSpec};
pub use enhancements::{Enhancement, EnhancementFlags};
pub use header::{HeaderStyle, HeaderTracker};
pub use reveal::{RevealState, Revealer};
pub use site::SiteSettings;
