//! Shared helpers for TUI rendering.

pub mod text;

pub use text::{display_width, truncate_with_ellipsis};
