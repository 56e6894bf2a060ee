//! `#[derive(FromContext)]` expansion.

use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

pub fn derive_from_context_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let context_type = match parse_context_type(&input) {
        Ok(ty) => ty,
        Err(err) => return err.to_compile_error().into(),
    };

    let fields = match named_fields(&input, "FromContext") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_inits = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;

        Some(quote! {
            #field_name: <#field_type as crate::FromRef<#context_type>>::from_ref(ctx)
        })
    });

    TokenStream::from(quote! {
        impl #impl_generics crate::FromRef<#context_type> for #name #ty_generics #where_clause {
            fn from_ref(ctx: &#context_type) -> Self {
                Self {
                    #(#field_inits),*
                }
            }
        }
    })
}

/// Returns the named fields of a struct, or a spanned error for anything else.
pub(crate) fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{derive} can only be derived for structs"),
        )),
    }
}

/// Reads `#[from_context(Context = "Type")]`, defaulting to `Context`.
fn parse_context_type(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    for attr in &input.attrs {
        if !attr.path().is_ident("from_context") {
            continue;
        }

        let mut context_ty: Option<syn::Type> = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("Context") {
                let value: syn::LitStr = meta.value()?.parse()?;
                context_ty = Some(value.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `Context = \"Type\"`"))
            }
        })?;

        if let Some(ty) = context_ty {
            return Ok(quote! { #ty });
        }
    }

    Ok(quote! { Context })
}
