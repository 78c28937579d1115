use athena_schema_core::{
    config::TagKeys, Column, Config, Field, Primitive, Resolver, Schema, Tags, Ty,
};
use pretty_assertions::assert_eq;

fn column_with(config: &Config, field: Field) -> Option<Column> {
    let schema = Schema::new();
    let mut resolver = Resolver::new(&schema, config);
    resolver.column(&field).unwrap()
}

fn column(field: Field) -> Option<Column> {
    column_with(&Config::default(), field)
}

#[test]
fn derived_snake_case_name() {
    let cases = [
        ("UserID", "user_id"),
        ("HTTPHeader", "http_header"),
        ("URL", "url"),
        ("CreatedAt", "created_at"),
        ("created_at", "created_at"),
        ("StatusCode", "status_code"),
    ];

    for (ident, expected) in cases {
        let column = column(Field::new(ident, Primitive::String)).unwrap();
        assert_eq!(column.name, expected);
    }
}

#[test]
fn name_override_wins() {
    let field = Field::new("UpdatedAt", Primitive::String).tag("json", "modified_at");
    assert_eq!(
        column(field),
        Some(Column::new("modified_at", "string"))
    );
}

#[test]
fn name_override_uses_first_segment() {
    let field = Field::new("Response", Primitive::String).tag("json", "response,omitempty");
    assert_eq!(column(field).unwrap().name, "response");
}

#[test]
fn empty_name_override_keeps_derived_name() {
    let field = Field::new("RequestBody", Primitive::String).tag("json", ",omitempty");
    assert_eq!(column(field).unwrap().name, "request_body");
}

#[test]
fn type_override_wins_without_checking_declared_type() {
    let field = Field::new("UpdatedAt", Primitive::String).tag("athena", "timestamp");
    assert_eq!(
        column(field),
        Some(Column::new("updated_at", "timestamp"))
    );

    // The declared type is never inspected, even when it cannot be resolved.
    let field = Field::new("Payload", Ty::unsupported("dyn Any")).tag("athena", "string");
    assert_eq!(column(field).unwrap().ty, "string");
}

#[test]
fn drop_marker_on_name_key() {
    let field = Field::new("Secret", Primitive::String)
        .tag("json", "-")
        .tag("athena", "string");
    assert_eq!(column(field), None);
}

#[test]
fn drop_marker_on_type_key() {
    let field = Field::new("Secret", Primitive::String)
        .tag("json", "secret")
        .tag("athena", "-");
    assert_eq!(column(field), None);
}

#[test]
fn dropped_field_is_not_resolved() {
    let field = Field::new("Callback", Ty::unsupported("fn()")).tag("json", "-");
    assert_eq!(column(field), None);
}

#[test]
fn unrelated_tags_are_ignored() {
    let tags = Tags::parse(r#"test:"" db:"user_name""#);
    let field = Field::new("UserName", Primitive::String).tags(tags);
    assert_eq!(column(field), Some(Column::new("user_name", "string")));
}

#[test]
fn custom_tag_keys() {
    let config = Config::new().tag_keys(TagKeys::new().name("serde").ty("presto"));

    let field = Field::new("CreatedAt", Primitive::String)
        .tag("json", "ignored")
        .tag("serde", "created")
        .tag("presto", "timestamp");

    assert_eq!(
        column_with(&config, field),
        Some(Column::new("created", "timestamp"))
    );
}

#[test]
fn malformed_tag_falls_through_to_type_resolution() {
    let tags = Tags::parse(r#"json:"id" athena:timestamp"#);
    let field = Field::new("ID", Primitive::I64).tags(tags);

    assert_eq!(column(field), Some(Column::new("id", "int")));
}

#[test]
fn unresolvable_field_is_an_error() {
    let schema = Schema::new();
    let config = Config::default();
    let field = Field::new("Handler", Ty::unsupported("Box<dyn Fn()>"));

    let mut resolver = Resolver::new(&schema, &config);
    let err = resolver.column(&field).unwrap_err();

    assert!(err.is_unresolvable_type());
    assert!(err.to_string().contains("`Handler`"));
}
