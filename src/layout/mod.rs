//! Layout composition
//!
//! Turns a [`ResumeDocument`](crate::models::ResumeDocument) plus the
//! validated stylesheet into the renderer-ready element tree. Page
//! breaking, font loading, and output encoding belong to the external
//! paginated renderer; this stage only decides structure and styles.

pub mod compose;
pub mod tree;

pub use compose::compose;
pub use tree::{Element, PageSetup, RenderDocument};
