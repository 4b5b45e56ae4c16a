// src/domain/core.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Amount;

pub type ItemId = String;
pub type BidId = String;

/// Display identity used for every bid placed through the storefront.
pub const COLLECTOR_NAME: &str = "나(Collector)";

/// The current custodian of an item. Display role only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub rating: f64,
}

impl Seller {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Seller {
            name: name.into(),
            avatar_url: None,
            rating,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Unknown item: {0}")]
    ItemNotFound(ItemId),

    #[error("Auction has ended: {0}")]
    AuctionHasEnded(ItemId),

    #[error("The starting value of this item is {0}")]
    BelowStartingPrice(Amount),

    #[error("Must place bid over the current value ({0})")]
    BelowCurrentPrice(Amount),
}
