//! `#[base_entity]` injects the bookkeeping columns every table shares (`id`,
//! `created_at`, `updated_at`) into a sea-orm model and wires up the traits the
//! DAO layer uses to stamp them on insert and update.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    Expr, ExprLit, Field, Fields, Ident, ItemStruct, Lit, Meta, Path, Token, parse_macro_input,
    parse_quote, punctuated::Punctuated,
};

const ID: &str = "id";
const CREATED_AT: &str = "created_at";
const UPDATED_AT: &str = "updated_at";

#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let traits_path = match traits_path(args) {
        Ok(path) => path,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(&input, "base_entity requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let has_field = |name: &str| {
        fields
            .named
            .iter()
            .any(|field| field.ident.as_ref().is_some_and(|ident| ident == name))
    };

    let mut injected: Vec<Field> = Vec::with_capacity(3);
    if !has_field(ID) {
        injected.push(parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: uuid::Uuid
        });
    }
    for name in [CREATED_AT, UPDATED_AT] {
        if !has_field(name) {
            let ident = Ident::new(name, Span::call_site());
            injected.push(parse_quote! {
                #[sea_orm(default_expr = "Expr::current_timestamp()")]
                pub #ident: sea_orm::entity::prelude::DateTimeWithTimeZone
            });
        }
    }

    // Bookkeeping columns lead so every table starts with id, created_at, updated_at.
    let domain = std::mem::take(&mut fields.named);
    fields.named.extend(injected);
    fields.named.extend(domain);

    quote! {
        #input

        impl #traits_path::HasIdActiveModel for ActiveModel {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.id = sea_orm::ActiveValue::Set(id);
            }
        }

        impl #traits_path::TimestampedActiveModel for ActiveModel {
            fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.created_at = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.updated_at = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl #traits_path::HasCreatedAtColumn for Entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }

            fn id_column() -> Column {
                Column::Id
            }
        }
    }
    .into()
}

/// Only `traits = "path::to::module"` is accepted; it defaults to the crate's DAO traits.
fn traits_path(args: Punctuated<Meta, Token![,]>) -> syn::Result<Path> {
    let mut path: Path = parse_quote!(crate::db::dao::base_traits);
    for meta in args {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected `traits = \"path::to::traits\"`",
            ));
        };
        if !pair.path.is_ident("traits") {
            return Err(syn::Error::new_spanned(
                pair.path,
                "unknown base_entity attribute key",
            ));
        }
        let Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) = pair.value
        else {
            return Err(syn::Error::new_spanned(
                pair.value,
                "expected string literal for attribute value",
            ));
        };
        path = value
            .parse()
            .map_err(|err| syn::Error::new(value.span(), format!("invalid traits path: {err}")))?;
    }
    Ok(path)
}
