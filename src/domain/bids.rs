// src/domain/bids.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::core::BidId;
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: BidId,
    pub bidder_name: String,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
}

impl Bid {
    pub fn new(bidder_name: impl Into<String>, amount: Amount, timestamp: DateTime<Utc>) -> Self {
        Bid {
            id: Uuid::new_v4().to_string(),
            bidder_name: bidder_name.into(),
            amount,
            timestamp,
        }
    }
}
