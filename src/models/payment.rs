use bson::oid::ObjectId;
use bson::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a payment/investment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Active,
    Resolved,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Active => "active",
            PaymentStatus::Resolved => "resolved",
        }
    }

    /// Transition table for `investmentControl`.
    ///
    /// Only one row exists: a requested status of `active` resolves the
    /// payment. Every other requested value is rejected by the caller.
    /// Whether more transitions should exist is an open product question;
    /// until answered, the table stays this narrow on purpose.
    pub fn transition_for(requested: PaymentStatus) -> Option<PaymentStatus> {
        match requested {
            PaymentStatus::Active => Some(PaymentStatus::Resolved),
            PaymentStatus::Pending | PaymentStatus::Resolved => None,
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "active" => Ok(PaymentStatus::Active),
            "resolved" => Ok(PaymentStatus::Resolved),
            _ => Err(()),
        }
    }
}

mod opt_bson_datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(bson::DateTime::from_chrono).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let value = Option::<bson::DateTime>::deserialize(deserializer)?;
        Ok(value.map(bson::DateTime::to_chrono))
    }
}

/// Payment record from the `Payments` collection.
///
/// Only the fields this service reads or writes are typed; everything else
/// (amount, plan, customer reference, ...) belongs to the platform side and
/// passes through untouched in `extra`. The stored `status` is an open set
/// owned by the platform: listing and display must render whatever is
/// there, so it stays a string and only the transition table interprets it.
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub status: String,
    #[serde(rename = "resolveDate", default, with = "opt_bson_datetime")]
    pub resolve_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Client-facing shape of a payment: hex id, RFC 3339 resolve date.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentView {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(rename = "resolveDate", skip_serializing_if = "Option::is_none")]
    pub resolve_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl From<Payment> for PaymentView {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.to_hex(),
            status: payment.status,
            resolve_date: payment.resolve_date,
            extra: bson::Bson::Document(payment.extra).into_relaxed_extjson(),
        }
    }
}
