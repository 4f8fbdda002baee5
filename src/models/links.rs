use serde::{Deserialize, Serialize};

/// The two community platforms the front page links out to.
///
/// The `Links` collection holds at most one document per platform; writes
/// go through a keyed upsert so the invariant survives a missing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPlatform {
    Whatsapp,
    Telegram,
}

impl LinkPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkPlatform::Whatsapp => "whatsapp",
            LinkPlatform::Telegram => "telegram",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDoc {
    pub platform: LinkPlatform,
    pub link: String,
}
