use super::location;

use athena_schema_core::Tags;

/// Tag keys produced from field attributes. These are the default keys read
/// by the resolver.
const NAME_KEY: &str = "json";
const TYPE_KEY: &str = "athena";

/// Field level attributes relevant to column generation
#[derive(Debug, Default)]
pub(super) struct FieldAttr {
    /// Tags collected from `#[serde]`, `#[athena]` and `#[tag]`
    pub(super) tags: Tags,

    /// True if the field is annotated with `#[serde(flatten)]`
    pub(super) embedded: bool,
}

impl FieldAttr {
    /// Collects the field attributes in declaration order; later attributes
    /// overwrite tags set by earlier ones.
    ///
    /// A malformed attribute is skipped with a warning, which leaves the
    /// field without the override it was meant to carry.
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> Self {
        let mut ret = FieldAttr::default();

        for attr in attrs {
            let res = if attr.path().is_ident("serde") {
                ret.populate_serde(attr)
            } else if attr.path().is_ident("athena") {
                ret.populate_athena(attr)
            } else if attr.path().is_ident("tag") {
                ret.populate_tag(attr)
            } else {
                Ok(())
            };

            if let Err(err) = res {
                log::warn!(
                    "{}: ignoring malformed #[{}] attribute: {err}",
                    location(attr),
                    super::printable(attr.path()),
                );
            }
        }

        ret
    }

    /// `#[serde(rename = "name")]`, `#[serde(skip)]`, `#[serde(flatten)]`.
    /// Other serde options are accepted and ignored.
    fn populate_serde(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let mut tags = vec![];
        let mut embedded = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if meta.input.peek(syn::token::Paren) {
                    // rename(serialize = "a", deserialize = "b")
                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("serialize") {
                            let lit: syn::LitStr = nested.value()?.parse()?;
                            tags.push((NAME_KEY, lit.value()));
                            Ok(())
                        } else {
                            skip(&nested)
                        }
                    })
                } else {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    tags.push((NAME_KEY, lit.value()));
                    Ok(())
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                tags.push((NAME_KEY, "-".to_string()));
                Ok(())
            } else if meta.path.is_ident("flatten") {
                embedded = true;
                Ok(())
            } else {
                skip(&meta)
            }
        })?;

        self.apply(tags);
        self.embedded |= embedded;
        Ok(())
    }

    /// `#[athena(type = "timestamp")]`, `#[athena(name = "col")]`,
    /// `#[athena(skip)]`.
    fn populate_athena(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let mut tags = vec![];

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                tags.push((TYPE_KEY, lit.value()));
            } else if meta.path.is_ident("name") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                tags.push((NAME_KEY, lit.value()));
            } else if meta.path.is_ident("skip") {
                tags.push((TYPE_KEY, "-".to_string()));
            } else {
                return Err(meta.error("unsupported athena attribute"));
            }
            Ok(())
        })?;

        self.apply(tags);
        Ok(())
    }

    /// `#[tag("json:\"name\" athena:\"timestamp\"")]`, a raw struct tag.
    fn populate_tag(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let lit: syn::LitStr = attr.parse_args()?;

        for (key, value) in Tags::parse(&lit.value()).iter() {
            self.tags.insert(key, value);
        }
        Ok(())
    }

    fn apply(&mut self, tags: Vec<(&str, String)>) {
        for (key, value) in tags {
            self.tags.insert(key, value);
        }
    }
}

/// Consumes the value of an option this crate does not interpret, whether it
/// is a flag, `key = value` or `key(...)`.
fn skip(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: proc_macro2::TokenStream = content.parse()?;
    }
    Ok(())
}
