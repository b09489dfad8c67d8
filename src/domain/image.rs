//! Stored image attached to a user profile or a post.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageModel {
    pub id: i64,
    pub name: String,
    /// Raw image bytes, sent as standard base64
    #[serde(serialize_with = "as_base64")]
    #[schema(value_type = String, format = Byte)]
    pub image_bytes: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
}

fn as_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}

/// Fields needed to insert an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub name: String,
    pub image_bytes: Vec<u8>,
    pub user_id: Option<i64>,
    pub post_id: Option<i64>,
}
