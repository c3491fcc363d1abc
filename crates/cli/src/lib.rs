//! Interactive console session for the inventory tracker.
//!
//! The domain lives in `stocktrack-inventory`; this crate owns every console
//! concern: the menu, prompts, parsing of operator input, and rendering.

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use config::SessionConfig;
pub use error::{InputError, SessionError};
pub use input::Field;
pub use menu::MenuChoice;
pub use session::{Flow, Session};
