//! Format-agnostic building blocks shared by the transducer and the backends.

pub mod cursor;
pub mod list_stack;
pub mod squeeze;

pub use cursor::Cursor;
pub use list_stack::{ListFrame, ListStack, MAX_LIST_DEPTH};
pub use squeeze::squeeze;
