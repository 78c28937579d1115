use serde::Serialize;

use crate::user::User;

#[derive(Serialize)]
pub struct Comment {
    pub user: User,
    pub body: String,
}

#[derive(Serialize)]
pub struct Post {
    #[serde(rename = "author_info")]
    pub author: User,
    pub comments: Vec<Comment>,
    pub two_comments: [Comment; 2],
    pub tags: Option<Vec<Option<String>>>,
    pub created_at: jiff::Timestamp,
    #[athena(type = "timestamp")]
    pub updated_at: String,
    #[serde(skip)]
    pub draft: Option<Box<Post>>,
}
