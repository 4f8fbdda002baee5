use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// News item as stored in the `News` collection.
///
/// `newsDate` is kept as a real BSON datetime so the store can sort on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "newsHeading")]
    pub heading: String,
    #[serde(rename = "newsDescription")]
    pub description: String,
    /// Generated filename under the news upload directory.
    #[serde(rename = "newsImage")]
    pub image: String,
    #[serde(
        rename = "newsDate",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub date: DateTime<Utc>,
}

/// Client-facing shape of a news item: hex id, RFC 3339 date.
#[derive(Debug, Clone, Serialize)]
pub struct NewsView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "newsHeading")]
    pub heading: String,
    #[serde(rename = "newsDescription")]
    pub description: String,
    #[serde(rename = "newsImage")]
    pub image: String,
    #[serde(rename = "newsDate")]
    pub date: DateTime<Utc>,
}

impl From<NewsDoc> for NewsView {
    fn from(doc: NewsDoc) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            heading: doc.heading,
            description: doc.description,
            image: doc.image,
            date: doc.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_uses_collection_field_names() {
        let doc = NewsDoc {
            id: None,
            heading: "Launch".to_string(),
            description: "We are live".to_string(),
            image: "abc123.png".to_string(),
            date: Utc::now(),
        };
        let bson = bson::to_document(&doc).unwrap();
        assert!(bson.get("newsHeading").is_some());
        assert!(bson.get("newsDescription").is_some());
        assert!(bson.get("newsImage").is_some());
        // stored as a native datetime, not a string
        assert!(matches!(bson.get("newsDate"), Some(bson::Bson::DateTime(_))));
        assert!(bson.get("_id").is_none());
    }

    #[test]
    fn view_exposes_hex_id_and_rfc3339_date() {
        let id = ObjectId::new();
        let view: NewsView = NewsDoc {
            id: Some(id),
            heading: "h".to_string(),
            description: "d".to_string(),
            image: "i.png".to_string(),
            date: Utc::now(),
        }
        .into();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert!(json["newsDate"].is_string());
    }
}
