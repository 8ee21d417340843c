use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct RegisterRequest {
    pub name: String,
    pub uri: String,
}

#[derive(Serialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct RegisterResult {
    pub message: String,
    pub fqdn: String,
    pub uri: String,
}

#[derive(Serialize, Debug, Clone, Copy, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct DeleteResult {
    pub success: bool,
}
