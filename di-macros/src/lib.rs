//! Compile-time dependency injection macros for propgraph.
//!
//! - `#[derive(Context)]` makes every field of the root context extractable
//! - `#[derive(FromContext)]` builds a repository or service from a context
//!
//! Generated code references `crate::FromRef`, so the consuming crate must
//! define (or re-export) that trait at its root.

use proc_macro::TokenStream;

mod context;
mod from_context;

/// Derive macro for the root DI context.
///
/// Generates one `FromRef<Self>` implementation per field type, cloning the
/// field out of the context. All field types must be `Clone` and distinct.
///
/// # Example
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub client: AppClient,
///     pub config: Arc<Config>,
/// }
///
/// // Generated:
/// // impl FromRef<Context> for AppClient { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derive macro for types that can be built from a context.
///
/// Each field is resolved with `<FieldType as FromRef<Context>>::from_ref`.
/// The context type defaults to `Context` and can be overridden with
/// `#[from_context(Context = "path::To::Ctx")]`.
///
/// # Example
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct EdgeRepository {
///     client: AppClient,
/// }
///
/// let repo = EdgeRepository::from_ref(&ctx);
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
