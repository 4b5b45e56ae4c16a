// src/domain/catalog.rs
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::fmt;

use super::bids::Bid;
use super::core::{Errors, COLLECTOR_NAME};
use super::items::{validate_bid, AuctionItem, BiddingRules};
use crate::money::Amount;

pub type Subscriber = Box<dyn Fn(&AuctionItem) + Send + Sync>;

/// The one authoritative list of items. Views look items up by id instead of
/// holding their own copies, and subscribers hear about every accepted bid.
pub struct Catalog {
    items: Vec<AuctionItem>,
    rules: BiddingRules,
    subscribers: Vec<Subscriber>,
}

impl Catalog {
    pub fn new(items: Vec<AuctionItem>, rules: BiddingRules) -> Self {
        Catalog {
            items,
            rules,
            subscribers: Vec::new(),
        }
    }

    /// Seed order.
    pub fn items(&self) -> &[AuctionItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&AuctionItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&AuctionItem) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Places a bid as the collector. On error the catalog is untouched.
    pub fn place_bid(
        &mut self,
        item_id: &str,
        amount: Amount,
        now: DateTime<Utc>,
    ) -> Result<AuctionItem, Errors> {
        self.apply(item_id, Bid::new(COLLECTOR_NAME, amount, now))
    }

    /// Validates `bid` against the current record and swaps in the updated
    /// record in one assignment.
    pub fn apply(&mut self, item_id: &str, bid: Bid) -> Result<AuctionItem, Errors> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| Errors::ItemNotFound(item_id.to_string()))?;

        let current = &self.items[index];
        if let Err(err) = validate_bid(&bid, current, &self.rules) {
            warn!("Rejected bid of {} on item {}: {}", bid.amount, item_id, err);
            return Err(err);
        }

        info!("Accepted bid of {} on item {} from {}", bid.amount, item_id, bid.bidder_name);
        let next = current.with_bid(bid);
        self.items[index] = next.clone();

        for subscriber in &self.subscribers {
            subscriber(&next);
        }

        Ok(next)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("items", &self.items)
            .field("rules", &self.rules)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
