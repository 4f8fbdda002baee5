use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// Back-office operator account, read from the `Admin` collection.
///
/// `password` holds an argon2id hash and is never serialized back out,
/// so the document can be returned to the front-end as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
