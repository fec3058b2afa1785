pub struct Schema {
    get: Get,
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
    ok: FileListResponse,
}

pub struct FileListResponse {
    content: FileListContent,
}

pub struct FileListContent {
    #[serde(rename = "application/json")]
    json: FileListJson,
}

pub struct FileListJson {
    body: FileList,
}

/// Files visible to the caller.
pub struct FileList {
    #[serde(rename = "appName")]
    app_name: String,
    #[serde(rename = "appVersion")]
    app_version: String,
}
