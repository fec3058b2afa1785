// Declares the wrong type name, so extraction fails.
pub struct Routes {
    get: Get,
}

pub struct Get {}
