use athena_schema_core::schema::Name;

fn snake(src: &str) -> String {
    Name::new(src).snake_case()
}

#[test]
fn camel_case_identifiers() {
    assert_eq!(snake("CreatedAt"), "created_at");
    assert_eq!(snake("RequestBody"), "request_body");
    assert_eq!(snake("Post"), "post");
}

#[test]
fn initialisms_stay_whole() {
    assert_eq!(snake("UserID"), "user_id");
    assert_eq!(snake("HTTPHeader"), "http_header");
    assert_eq!(snake("URL"), "url");
    assert_eq!(snake("ID"), "id");
    assert_eq!(snake("HTTPSProxy"), "https_proxy");
    assert_eq!(snake("UserUUIDList"), "user_uuid_list");
}

#[test]
fn unknown_acronyms_split_per_letter() {
    assert_eq!(snake("ABC"), "a_b_c");
}

#[test]
fn snake_case_is_idempotent() {
    for src in ["created_at", "user_id", "http_header", "url"] {
        assert_eq!(snake(src), src);
        assert_eq!(snake(&snake(src)), src);
    }
}

#[test]
fn name_parts() {
    assert_eq!(Name::new("HTTPHeader").parts, ["http", "header"]);
}
