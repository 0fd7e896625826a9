use serde::Deserialize;
use uuid::Uuid;

///
/// Claims of an access token issued by the backend.
/// Unknown claims are ignored.
///
#[derive(Debug, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: i64,
    pub token_type: String,
}
