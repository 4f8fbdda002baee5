use std::time::Duration;

use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::config::StoreConfig;
use crate::models::{AdminUser, LinkDoc, NewsDoc, Payment};

/// The two externally owned document databases this service queries.
///
/// Operator accounts and platform subscriptions live in the users database;
/// everything the admin panel manages (links, news, payments) lives in the
/// data database. Connections are lazy: construction succeeds without a
/// reachable server and individual queries surface failures instead.
#[derive(Clone)]
pub struct Stores {
    users: Database,
    data: Database,
}

impl Stores {
    pub async fn connect(cfg: &StoreConfig) -> mongodb::error::Result<Self> {
        let mut options = ClientOptions::parse(&cfg.mongo_url).await?;
        // Bounded so an unreachable store answers 500-class quickly instead
        // of stalling every request for the driver's 30s default
        options.server_selection_timeout = Some(Duration::from_secs(5));
        options.connect_timeout = Some(Duration::from_secs(5));
        let client = Client::with_options(options)?;
        Ok(Self {
            users: client.database(&cfg.users_db),
            data: client.database(&cfg.data_db),
        })
    }

    pub fn admins(&self) -> Collection<AdminUser> {
        self.users.collection("Admin")
    }

    /// Subscriptions have no schema this service owns; they pass through raw.
    pub fn subscriptions(&self) -> Collection<Document> {
        self.users.collection("Subscription")
    }

    pub fn links(&self) -> Collection<LinkDoc> {
        self.data.collection("Links")
    }

    pub fn news(&self) -> Collection<NewsDoc> {
        self.data.collection("News")
    }

    pub fn payments(&self) -> Collection<Payment> {
        self.data.collection("Payments")
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.data.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
