use super::{field, printable, ty};

use athena_schema_core::{Primitive, Schema, Ty, TypeDef};

/// Adds a definition for every supported item, descending into inline
/// modules.
pub(crate) fn items(nodes: &[syn::Item], schema: &mut Schema) {
    for item in nodes {
        match item {
            syn::Item::Struct(item) => schema.insert(record(item)),
            syn::Item::Enum(item) => schema.insert(enumeration(item)),
            syn::Item::Type(item) => {
                schema.insert(TypeDef::new(item.ident.to_string(), ty(&item.ty)));
            }
            syn::Item::Mod(item) => {
                if let Some((_, content)) = &item.content {
                    items(content, schema);
                }
            }
            _ => {}
        }
    }
}

fn record(item: &syn::ItemStruct) -> TypeDef {
    let name = item.ident.to_string();

    match &item.fields {
        syn::Fields::Named(fields) => {
            TypeDef::record(name, fields.named.iter().filter_map(field).collect())
        }
        syn::Fields::Unit => TypeDef::record(name, vec![]),
        // A newtype is serialized as the value it wraps
        syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            TypeDef::new(name, ty(&fields.unnamed[0].ty))
        }
        syn::Fields::Unnamed(_) => {
            let description = format!("tuple struct {}", printable(&item.ident));
            TypeDef::new(name, Ty::unsupported(description))
        }
    }
}

/// Enums with only unit variants are serialized as their variant name; any
/// other enum has no column mapping.
fn enumeration(item: &syn::ItemEnum) -> TypeDef {
    let name = item.ident.to_string();

    let unit_only = item
        .variants
        .iter()
        .all(|variant| matches!(variant.fields, syn::Fields::Unit));

    if unit_only {
        TypeDef::new(name, Primitive::String.into())
    } else {
        let description = format!("enum {}", printable(&item.ident));
        TypeDef::new(name, Ty::unsupported(description))
    }
}
