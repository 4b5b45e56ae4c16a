use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bids::Bid;
use super::core::ItemId;
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Command {
    #[serde(rename = "PlaceBid")]
    PlaceBid {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        #[serde(rename = "itemId")]
        item_id: ItemId,
        amount: Amount,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CommandSuccess {
    #[serde(rename = "BidAccepted")]
    BidAccepted {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        #[serde(rename = "itemId")]
        item_id: ItemId,
        bid: Bid,
    },
}
