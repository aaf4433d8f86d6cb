//! Provides derive macros for `tsh::group::OptionGroup`.
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, FieldsNamed};

/// Returns the identifiers of every field that takes part in the presence
/// check, skipping those marked `#[group(ignore)]`.
fn get_presence_idents(input: &DeriveInput) -> syn::Result<Vec<syn::Ident>> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "deriving OptionGroup only supports structs with named fields".to_string(),
            ));
        }
    };

    let mut idents = vec![];
    'outer: for field in fields.iter() {
        // UNWRAP: safe because we only support structs with named fields
        let ident = field.ident.clone().unwrap();
        for att in field.attrs.iter() {
            let mut ignore = false;
            if att.path().is_ident("group") {
                att.parse_nested_meta(|meta| {
                    if meta.path.is_ident("ignore") {
                        ignore = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unsupported field attribute {:?} - must be 'ignore'",
                            meta.path
                                .get_ident()
                                .map(|id| id.to_string())
                                .unwrap_or("unknown".to_string())
                        )))
                    }
                })?;
            }
            if ignore {
                continue 'outer;
            }
        }
        idents.push(ident);
    }

    if idents.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            "deriving OptionGroup requires at least one field that is not ignored".to_string(),
        ));
    }
    Ok(idents)
}

/// Derives `tsh::group::OptionGroup`.
///
/// The group is present iff any of its (non-ignored) fields is present.
#[proc_macro_derive(OptionGroup, attributes(group))]
pub fn derive_option_group(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input: DeriveInput = syn::parse_macro_input!(input);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let idents = match get_presence_idents(&input) {
        Ok(idents) => idents,
        Err(e) => return e.into_compile_error().into(),
    };

    let output = quote! {
        impl #impl_generics tsh::group::OptionGroup for #name #ty_generics #where_clause {
            fn is_present(&self) -> bool {
                #(tsh::group::Presence::is_present(&self.#idents) ||)* false
            }
        }
    };
    output.into()
}
