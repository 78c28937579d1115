use athena_schema_core::{
    generate, Column, Config, Field, Primitive, Resolver, Schema, Table, TableRequest, Ty,
    TypeDef,
};
use pretty_assertions::assert_eq;

fn user() -> TypeDef {
    TypeDef::record(
        "User",
        vec![
            Field::new("UserID", Primitive::I64).tag("json", "user_id"),
            Field::new("Name", Primitive::String).tag("json", "name"),
        ],
    )
}

fn post() -> TypeDef {
    TypeDef::record(
        "Post",
        vec![
            Field::new("Author", Ty::named("User")).tag("json", "author_info"),
            Field::new("CreatedAt", Primitive::Timestamp).tag("json", "created_at"),
        ],
    )
}

fn schema() -> Schema {
    [user(), post()].into_iter().collect()
}

fn table(schema: &Schema, request: TableRequest) -> athena_schema_core::Result<Table> {
    let config = Config::default();
    Resolver::new(schema, &config).table(&request)
}

#[test]
fn user_table() {
    let table = table(&schema(), TableRequest::new("User")).unwrap();

    assert_eq!(
        table,
        Table {
            name: "user".to_string(),
            folder: "user".to_string(),
            columns: vec![
                Column::new("user_id", "int"),
                Column::new("name", "string"),
            ],
        }
    );
}

#[test]
fn nested_record_table() {
    let table = table(&schema(), TableRequest::new("Post")).unwrap();

    assert_eq!(table.name, "post");
    assert_eq!(
        table.columns,
        vec![
            Column::new("author_info", "struct<user_id: int, name: string>"),
            Column::new("created_at", "timestamp"),
        ]
    );
}

#[test]
fn table_and_folder_overrides() {
    let request = TableRequest::new("HTTPLog")
        .table_name("access_log")
        .folder_name("logs/access");
    let schema: Schema = [TypeDef::record(
        "HTTPLog",
        vec![Field::new("Path", Primitive::String)],
    )]
    .into_iter()
    .collect();

    let table = table(&schema, request).unwrap();
    assert_eq!(table.name, "access_log");
    assert_eq!(table.folder, "logs/access");
}

#[test]
fn default_names_follow_initialism_rules() {
    let schema: Schema = [TypeDef::record("HTTPLog", vec![])].into_iter().collect();

    let table = table(&schema, TableRequest::new("HTTPLog")).unwrap();
    assert_eq!(table.name, "http_log");
    assert_eq!(table.folder, "http_log");
    assert!(table.columns.is_empty());

    // An empty override means "use the default".
    let table = self::table(&schema, TableRequest::new("HTTPLog").table_name("")).unwrap();
    assert_eq!(table.name, "http_log");
}

#[test]
fn folder_defaults_to_table_override() {
    let table = table(&schema(), TableRequest::new("User").table_name("members")).unwrap();
    assert_eq!(table.folder, "members");
}

#[test]
fn dropped_fields_keep_declaration_order() {
    let schema: Schema = [TypeDef::record(
        "Event",
        vec![
            Field::new("A", Primitive::I32),
            Field::new("B", Primitive::I32).tag("json", "-"),
            Field::new("C", Primitive::I32).tag("athena", "-"),
            Field::new("D", Primitive::I32),
        ],
    )]
    .into_iter()
    .collect();

    let table = table(&schema, TableRequest::new("Event")).unwrap();
    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "d"]);
}

#[test]
fn unknown_requested_type() {
    let err = table(&schema(), TableRequest::new("Comment")).unwrap_err();
    assert!(err.is_unknown_type());
    assert_eq!(err.to_string(), "unknown type `Comment`");
}

#[test]
fn requested_type_is_not_a_record() {
    let schema: Schema = [TypeDef::new("Tags", Ty::sequence(Primitive::String))]
        .into_iter()
        .collect();

    let err = table(&schema, TableRequest::new("Tags")).unwrap_err();
    assert!(err.is_not_a_record());
}

#[test]
fn requested_alias_of_record() {
    let mut schema = schema();
    schema.insert(TypeDef::new("Member", Ty::named("User")));

    let table = table(&schema, TableRequest::new("Member")).unwrap();
    assert_eq!(table.name, "member");
    assert_eq!(table.columns.len(), 2);
}

#[test]
fn unresolvable_field_names_table_and_field() {
    let schema: Schema = [TypeDef::record(
        "Job",
        vec![
            Field::new("Name", Primitive::String),
            Field::new("Run", Ty::unsupported("fn()")),
        ],
    )]
    .into_iter()
    .collect();

    let err = table(&schema, TableRequest::new("Job")).unwrap_err();
    assert!(err.is_unresolvable_type());
    assert_eq!(
        err.to_string(),
        "failed to resolve table `job`: no supported mapping for field `Run` of type `fn()`"
    );
}

#[test]
fn self_referential_requested_record() {
    let schema: Schema = [TypeDef::record(
        "Category",
        vec![
            Field::new("Name", Primitive::String),
            Field::new("Children", Ty::sequence(Ty::named("Category"))),
        ],
    )]
    .into_iter()
    .collect();

    let err = table(&schema, TableRequest::new("Category")).unwrap_err();
    assert!(err.is_cyclic_type());
}

#[test]
fn embedded_fields_are_spliced() {
    let schema: Schema = [
        TypeDef::record(
            "Audit",
            vec![
                Field::new("CreatedAt", Primitive::Timestamp),
                Field::new("UpdatedAt", Primitive::Timestamp),
            ],
        ),
        TypeDef::record(
            "Order",
            vec![
                Field::new("ID", Primitive::U64),
                Field::new("Audit", Ty::reference(Ty::named("Audit"))).embedded(),
                Field::new("Total", Primitive::F64),
            ],
        ),
    ]
    .into_iter()
    .collect();

    let table = table(&schema, TableRequest::new("Order")).unwrap();
    assert_eq!(
        table.columns,
        vec![
            Column::new("id", "int"),
            Column::new("created_at", "timestamp"),
            Column::new("updated_at", "timestamp"),
            Column::new("total", "double"),
        ]
    );
}

#[test]
fn dropped_embedded_field() {
    let schema: Schema = [TypeDef::record(
        "Wrapper",
        vec![
            Field::new("Inner", Ty::Record(vec![Field::new("X", Primitive::I8)]))
                .embedded()
                .tag("json", "-"),
        ],
    )]
    .into_iter()
    .collect();

    assert!(table(&schema, TableRequest::new("Wrapper"))
        .unwrap()
        .columns
        .is_empty());
}

#[test]
fn embedding_a_non_record_fails() {
    let schema: Schema = [TypeDef::record(
        "Wrapper",
        vec![Field::new("Count", Primitive::I32).embedded()],
    )]
    .into_iter()
    .collect();

    let err = table(&schema, TableRequest::new("Wrapper")).unwrap_err();
    assert!(err.is_unresolvable_type());
}

#[test]
fn embedding_itself_is_a_cycle() {
    let schema: Schema = [TypeDef::record(
        "Loop",
        vec![Field::new("Inner", Ty::named("Loop")).embedded()],
    )]
    .into_iter()
    .collect();

    let err = table(&schema, TableRequest::new("Loop")).unwrap_err();
    assert!(err.is_cyclic_type());
}

#[test]
fn generate_keeps_request_order() {
    let requests = [TableRequest::new("Post"), TableRequest::new("User")];
    let tables = generate(&schema(), &Config::default(), &requests).unwrap();

    let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["post", "user"]);
}

#[test]
fn generate_is_all_or_nothing() {
    let requests = [TableRequest::new("User"), TableRequest::new("Missing")];
    let err = generate(&schema(), &Config::default(), &requests).unwrap_err();
    assert!(err.is_unknown_type());
}
