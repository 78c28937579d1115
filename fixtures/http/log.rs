use std::collections::HashMap;

use serde::Serialize;

#[derive(Serialize)]
pub struct HttpLog {
    pub request: Request,
    pub response: Response,
    pub latency_ms: u32,
}

#[derive(Serialize)]
pub struct Request {
    pub method: Method,
    pub url: String,
    #[serde(rename = "header")]
    pub http_header: HashMap<String, Vec<String>>,
}

#[derive(Serialize)]
pub struct Response {
    pub status: u16,
    pub header: http::HeaderMap,
}

#[derive(Serialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}
