//! Multi-level menu core
//!
//! A [`MenuStack`] holds an ordered list of [`Level`]s and a cursor.
//! Callers configure the current level fluently, [`MenuStack::ask`] walks
//! the user forward (or back with `r`), and [`MenuStack::get_all_results`]
//! flattens every keyed answer into [`Selections`] after a confirmation.

pub mod input;
pub mod level;
pub mod render;
pub mod stack;
pub mod value;

pub use input::Confirmation;
pub use level::{DEFAULT_TITLE, Level};
pub use stack::{MenuStack, Outcome};
pub use value::{MenuValue, Selections};
