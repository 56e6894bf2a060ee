//! Dependency injection infrastructure.
//!
//! Compile-time wiring through the `FromRef` trait and the derive macros from
//! `di-macros`:
//!
//! - `#[derive(Context)]` on [`crate::context::Context`] makes each field
//!   extractable
//! - `#[derive(FromContext)]` on repositories and services resolves every
//!   field from the context
//!
//! # Example
//!
//! ```ignore
//! use propgraph::context::{AppClient, Context};
//! use propgraph::di::{FromContext, FromRef};
//!
//! #[derive(FromContext, Clone)]
//! pub struct EdgeRepository {
//!     client: AppClient, // resolved via FromRef<Context>
//! }
//!
//! let ctx = Context::connect(config)?;
//! let repo = EdgeRepository::from_ref(&ctx);
//! ```

/// Extracts a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
