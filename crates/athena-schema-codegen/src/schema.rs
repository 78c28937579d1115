mod field;
use field::field;

mod field_attr;
use field_attr::FieldAttr;

mod item;
pub(crate) use item::items;

mod ty;
use ty::ty;

/// Printable form of a syntax node, used to describe unsupported types and
/// the location of malformed attributes.
fn printable(node: &impl quote::ToTokens) -> String {
    node.to_token_stream().to_string()
}

fn location(node: &impl syn::spanned::Spanned) -> String {
    let start = node.span().start();
    format!("{}:{}", start.line, start.column + 1)
}
