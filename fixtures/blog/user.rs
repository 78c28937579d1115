use serde::Serialize;

#[derive(Serialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub name: String,
}
