// src/domain/items.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::bids::Bid;
use super::core::{Errors, ItemId, Seller};
use super::states::{BiddingState, Closure};
use crate::money::Amount;

/// A listed object. Descriptive fields are public and never change after
/// seeding; pricing and bid history only move through [`AuctionItem::with_bid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub id: ItemId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub seller: Seller,
    pub end_time: DateTime<Utc>,
    starting_price: Amount,
    current_price: Amount,
    bids: Vec<Bid>,
}

impl AuctionItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        starting_price: Amount,
        end_time: DateTime<Utc>,
        seller: Seller,
    ) -> Self {
        AuctionItem {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            description: String::new(),
            category: String::new(),
            image_url: String::new(),
            location: String::new(),
            year: None,
            seller,
            end_time,
            starting_price,
            current_price: starting_price,
            bids: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn starting_price(&self) -> Amount {
        self.starting_price
    }

    pub fn current_price(&self) -> Amount {
        self.current_price
    }

    /// Oldest first.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn bidding_state(&self) -> BiddingState {
        if self.bids.is_empty() {
            BiddingState::NoBids
        } else {
            BiddingState::HasBids
        }
    }

    pub fn closure(&self, now: DateTime<Utc>) -> Closure {
        if now >= self.end_time {
            Closure::Closed
        } else {
            Closure::Open
        }
    }

    /// A copy of this record with `bid` appended and the price raised to it.
    /// Callers run [`validate_bid`] first; this does not re-check.
    pub fn with_bid(&self, bid: Bid) -> AuctionItem {
        let mut next = self.clone();
        next.current_price = bid.amount;
        next.bids.push(bid);
        next
    }
}

/// Knobs for rules that the storefront leaves to deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BiddingRules {
    /// Accept bids once `end_time` has passed. Off by default.
    pub accept_late_bids: bool,
}

pub fn validate_bid(bid: &Bid, item: &AuctionItem, rules: &BiddingRules) -> Result<(), Errors> {
    if !rules.accept_late_bids && item.closure(bid.timestamp) == Closure::Closed {
        return Err(Errors::AuctionHasEnded(item.id.clone()));
    }

    match item.bidding_state() {
        BiddingState::NoBids => {
            if bid.amount < item.starting_price {
                return Err(Errors::BelowStartingPrice(item.starting_price));
            }
        }
        BiddingState::HasBids => {
            if bid.amount <= item.current_price {
                return Err(Errors::BelowCurrentPrice(item.current_price));
            }
        }
    }

    Ok(())
}
