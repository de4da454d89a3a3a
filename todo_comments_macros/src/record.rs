use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Ident, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = named_fields(input)?;

    let collection = extract_collection(input)?;
    let id_field = marked_field(fields, "id")?
        .or_else(|| field_named(fields, "id"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "Record derive: no field marked with #[record(id)] and no field named `id`",
            )
        })?;
    let owner_field = marked_field(fields, "owner")?.or_else(|| field_named(fields, "user_id"));

    let owned_impl = owner_field.map(|owner| {
        quote! {
            impl ::todo_comments::Owned for #name {
                fn owner_id(&self) -> &str {
                    &self.#owner
                }
            }
        }
    });

    Ok(quote! {
        impl ::todo_comments::Record for #name {
            const COLLECTION: &'static str = #collection;

            fn id(&self) -> &str {
                &self.#id_field
            }
        }

        #owned_impl
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(fields);
        }
    }
    Err(syn::Error::new_spanned(
        &input.ident,
        "Record derive: only structs with named fields are supported",
    ))
}

fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        let mut collection = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `collection = \"...\"`"))
            }
        })?;

        if let Some(c) = collection {
            return Ok(c);
        }
    }

    Ok(format!("{}s", to_snake_case(&input.ident.to_string())))
}

/// Finds the field carrying `#[record(<flag>)]`.
fn marked_field(fields: &FieldsNamed, flag: &str) -> syn::Result<Option<Ident>> {
    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            let mut found = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") || meta.path.is_ident("owner") {
                    found |= meta.path.is_ident(flag);
                    Ok(())
                } else {
                    Err(meta.error("expected `id` or `owner`"))
                }
            })?;
            if found {
                return Ok(field.ident.clone());
            }
        }
    }
    Ok(None)
}

fn field_named(fields: &FieldsNamed, name: &str) -> Option<Ident> {
    fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| *ident == name)
        .cloned()
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
