use athena_schema_core::{Column, Table};
use athena_schema_sql::{Options, Serde, Serializer};
use pretty_assertions::assert_eq;

fn user() -> Table {
    Table {
        name: "user".to_string(),
        folder: "user".to_string(),
        columns: vec![
            Column::new("user_id", "int"),
            Column::new("name", "string"),
        ],
    }
}

fn post() -> Table {
    Table {
        name: "post".to_string(),
        folder: "posts".to_string(),
        columns: vec![
            Column::new("author_info", "struct<user_id: int, name: string>"),
            Column::new("tags", "array<string>"),
        ],
    }
}

#[test]
fn single_table() {
    let serializer = Serializer::new(Options::new().location("s3://bucket/"));

    assert_eq!(
        serializer.serialize(&[user()]),
        "\
CREATE EXTERNAL TABLE IF NOT EXISTS `user` (
  `user_id` int,
  `name` string
)
ROW FORMAT SERDE 'org.openx.data.jsonserde.JsonSerDe'
LOCATION 's3://bucket/user/';
"
    );
}

#[test]
fn header_and_multiple_tables() {
    let serializer = Serializer::new(
        Options::new()
            .header("athena-schema --type User,Post")
            .location("s3://bucket/")
            .prefix("raw/")
            .suffix("_v1"),
    );

    assert_eq!(
        serializer.serialize(&[user(), post()]),
        "\
-- Code generated by \"athena-schema --type User,Post\"; DO NOT EDIT.

CREATE EXTERNAL TABLE IF NOT EXISTS `user` (
  `user_id` int,
  `name` string
)
ROW FORMAT SERDE 'org.openx.data.jsonserde.JsonSerDe'
LOCATION 's3://bucket/raw/user_v1/';

CREATE EXTERNAL TABLE IF NOT EXISTS `post` (
  `author_info` struct<user_id: int, name: string>,
  `tags` array<string>
)
ROW FORMAT SERDE 'org.openx.data.jsonserde.JsonSerDe'
LOCATION 's3://bucket/raw/posts_v1/';
"
    );
}

#[test]
fn serde_class() {
    let hive = Serializer::new(Options::new().serde(Serde::HiveJson));
    assert!(hive
        .serialize_table(&user())
        .contains("ROW FORMAT SERDE 'org.apache.hive.hcatalog.data.JsonSerDe'\n"));

    let custom = Serializer::new(Options::new().serde(Serde::Custom("com.example.SerDe".into())));
    assert!(custom
        .serialize_table(&user())
        .contains("ROW FORMAT SERDE 'com.example.SerDe'\n"));
}

#[test]
fn quoting() {
    let table = Table {
        name: "odd`name".to_string(),
        folder: "it's".to_string(),
        columns: vec![Column::new("a`b", "int")],
    };

    let sql = Serializer::default().serialize_table(&table);

    assert!(sql.starts_with("CREATE EXTERNAL TABLE IF NOT EXISTS `odd``name` (\n  `a``b` int\n)"), "{sql}");
    assert!(sql.ends_with("LOCATION 'it''s/';\n"), "{sql}");
}

#[test]
fn location() {
    let serializer = Serializer::new(Options::new().location("s3://logs/").prefix("dt=").suffix("-json"));
    assert_eq!(serializer.location(&post()), "s3://logs/dt=posts-json/");

    assert_eq!(Serializer::default().location(&user()), "user/");
}

#[test]
fn no_tables() {
    assert_eq!(Serializer::default().serialize(&[]), "");
    assert_eq!(
        Serializer::new(Options::new().header("athena-schema")).serialize(&[]),
        "-- Code generated by \"athena-schema\"; DO NOT EDIT.\n\n"
    );
}
