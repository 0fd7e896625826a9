use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
