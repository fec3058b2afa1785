pub struct Schema {
    get: Get,
}

pub struct Get {
    responses: Responses,
}

pub struct Responses {
    #[serde(rename = "204")]
    no_content: NoContent,
}

pub struct NoContent {}
