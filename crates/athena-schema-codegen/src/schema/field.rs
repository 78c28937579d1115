use super::{ty, FieldAttr};

use athena_schema_core::Field;

/// Converts a named struct field. Returns `None` for unnamed fields.
pub(super) fn field(node: &syn::Field) -> Option<Field> {
    let ident = node.ident.as_ref()?;
    let attr = FieldAttr::from_ast(&node.attrs);

    let mut field = Field::new(ident_to_string(ident), ty(&node.ty)).tags(attr.tags);
    field.embedded = attr.embedded;

    Some(field)
}

/// Identifier text without the raw identifier prefix (`r#type` is `type`).
fn ident_to_string(ident: &syn::Ident) -> String {
    let ident = ident.to_string();
    match ident.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => ident,
    }
}
