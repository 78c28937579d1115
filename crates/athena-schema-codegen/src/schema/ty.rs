use super::printable;

use athena_schema_core::{Primitive, Ty};

/// Rust builtin scalars mapped straight to a primitive. Every other path is
/// kept as a named type and left to the resolver's lookup.
fn builtin(ident: &str) -> Option<Primitive> {
    Some(match ident {
        "bool" => Primitive::Bool,
        "i8" => Primitive::I8,
        "i16" => Primitive::I16,
        "i32" => Primitive::I32,
        "i64" => Primitive::I64,
        "i128" => Primitive::I64,
        "isize" => Primitive::Isize,
        "u8" => Primitive::U8,
        "u16" => Primitive::U16,
        "u32" => Primitive::U32,
        "u64" => Primitive::U64,
        "u128" => Primitive::U64,
        "usize" => Primitive::Usize,
        "f32" => Primitive::F32,
        "f64" => Primitive::F64,
        "char" | "str" | "String" => Primitive::String,
        _ => return None,
    })
}

/// Converts a declared field type into a type descriptor.
pub(super) fn ty(node: &syn::Type) -> Ty {
    match node {
        syn::Type::Path(node) if node.qself.is_none() => path(&node.path),
        syn::Type::Reference(node) => match byte_sequence(&node.elem) {
            true => Primitive::Bytes.into(),
            false => Ty::reference(ty(&node.elem)),
        },
        syn::Type::Ptr(node) => Ty::reference(ty(&node.elem)),
        syn::Type::Array(node) => sequence(&node.elem),
        syn::Type::Slice(node) => sequence(&node.elem),
        syn::Type::Paren(node) => ty(&node.elem),
        syn::Type::Group(node) => ty(&node.elem),
        _ => Ty::unsupported(printable(node)),
    }
}

fn path(path: &syn::Path) -> Ty {
    let Some(last) = path.segments.last() else {
        return Ty::unsupported(printable(path));
    };

    let ident = last.ident.to_string();
    let args = type_args(&last.arguments);

    match (ident.as_str(), args.as_slice()) {
        ("Vec", [elem]) if is_u8(elem) => Primitive::Bytes.into(),
        (
            "Vec" | "VecDeque" | "LinkedList" | "BinaryHeap" | "HashSet" | "BTreeSet" | "IndexSet",
            [elem],
        ) => Ty::sequence(ty(elem)),
        ("HashMap" | "BTreeMap" | "IndexMap", [key, value, ..]) => Ty::mapping(ty(key), ty(value)),
        ("Option" | "Box" | "Rc" | "Arc" | "Cow", [target, ..]) => Ty::reference(ty(target)),
        (ident, []) if path.segments.len() == 1 => match builtin(ident) {
            Some(primitive) => primitive.into(),
            None => Ty::named(ident),
        },
        _ => Ty::named(name(path)),
    }
}

fn sequence(elem: &syn::Type) -> Ty {
    match is_u8(elem) {
        true => Primitive::Bytes.into(),
        false => Ty::sequence(ty(elem)),
    }
}

/// `[u8]` and `[u8; N]`, the byte sequences that appear behind a reference.
fn byte_sequence(node: &syn::Type) -> bool {
    match node {
        syn::Type::Slice(node) => is_u8(&node.elem),
        syn::Type::Array(node) => is_u8(&node.elem),
        _ => false,
    }
}

fn is_u8(node: &syn::Type) -> bool {
    matches!(node, syn::Type::Path(node) if node.qself.is_none() && node.path.is_ident("u8"))
}

/// The generic type arguments of a path segment, ignoring lifetimes and
/// const arguments.
fn type_args(arguments: &syn::PathArguments) -> Vec<&syn::Type> {
    match arguments {
        syn::PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => vec![],
    }
}

/// The printable name of a path without generic arguments, e.g.
/// `chrono::DateTime` for `chrono::DateTime<Utc>`.
fn name(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
