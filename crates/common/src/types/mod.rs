use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Success envelope: every endpoint answers `{"data": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebResponse<T> {
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope: `{"errors": "<message>"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub errors: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { errors: msg.into() }
    }
}
