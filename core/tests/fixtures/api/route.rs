//! `GET /route` and `POST /route`.

pub struct Schema {
    get: Get,
    post: Post,
}

pub struct Get {
    request: GetRequest,
    responses: GetResponses,
}

pub struct GetRequest {
    headers: ContentTypeHeader,
    search: VersionSearch,
}

pub struct ContentTypeHeader {
    #[serde(rename = "Content-Type")]
    content_type: String,
}

pub struct VersionSearch {
    version: String,
}

pub struct GetResponses {
    #[serde(rename = "200")]
    ok: AppInfoResponse,
}

pub struct AppInfoResponse {
    content: AppInfoContent,
}

pub struct AppInfoContent {
    #[serde(rename = "application/json")]
    json: AppInfoJson,
}

pub struct AppInfoJson {
    body: AppInfo,
}

#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    app_name: String,
    app_version: String,
}

pub struct Post {
    request: PostRequest,
    responses: PostResponses,
}

pub struct PostRequest {
    content: PostContent,
}

pub struct PostContent {
    #[serde(rename = "application/json")]
    json: PostJson,
}

pub struct PostJson {
    body: NewUser,
}

pub struct NewUser {
    name: String,
    email: String,
    age: Option<f64>,
}

pub struct PostResponses {
    #[serde(rename = "200")]
    ok: PostOk,
}

pub struct PostOk {
    headers: ContentLengthHeader,
    content: PostOkContent,
}

pub struct ContentLengthHeader {
    #[serde(rename = "Content-Length")]
    content_length: String,
}

pub struct PostOkContent {
    #[serde(rename = "application/json")]
    json: PostOkJson,
}

pub struct PostOkJson {
    body: Option<Message>,
}

pub struct Message {
    message: String,
    system: Option<bool>,
}

pub fn handler() {}
