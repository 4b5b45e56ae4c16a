use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::domain::{
    suggested_next_bid, time_remaining, trust_temperature, AuctionItem, BiddingState, Catalog, ItemId,
    Seller, TimeRemaining,
};
use crate::money::Amount;
use crate::planner::{Planner, PromptTemplate};

pub struct AppState {
    pub catalog: Mutex<Catalog>,
    pub planner: Planner,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BidRequest {
    pub amount: Amount,
}

/// A button in the planning panel.
#[derive(Debug, Serialize)]
pub struct TemplateEntry {
    pub id: PromptTemplate,
    pub label: &'static str,
}

impl From<PromptTemplate> for TemplateEntry {
    fn from(template: PromptTemplate) -> Self {
        TemplateEntry {
            id: template,
            label: template.label(),
        }
    }
}

/// One card in the feed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub seller_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_avatar_url: Option<String>,
    pub current_price: Amount,
    pub bid_count: usize,
    pub time_remaining: TimeRemaining,
}

impl ItemSummary {
    pub fn new(item: &AuctionItem, now: DateTime<Utc>) -> Self {
        ItemSummary {
            id: item.id.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            year: item.year,
            seller_name: item.seller.name.clone(),
            seller_avatar_url: item.seller.avatar_url.clone(),
            current_price: item.current_price(),
            bid_count: item.bids().len(),
            time_remaining: time_remaining(item.end_time, now),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidEntry {
    pub id: String,
    pub bidder_name: String,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
    /// Set on the bid that holds the current value.
    pub leading: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
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
    pub trust_temperature: f64,
    pub starting_price: Amount,
    pub current_price: Amount,
    pub suggested_next_bid: Amount,
    pub bidding_state: BiddingState,
    pub end_time: DateTime<Utc>,
    pub time_remaining: TimeRemaining,
    pub closed: bool,
    /// Newest first.
    pub bids: Vec<BidEntry>,
}

impl ItemDetail {
    pub fn new(item: &AuctionItem, now: DateTime<Utc>) -> Self {
        let remaining = time_remaining(item.end_time, now);
        let bids = item
            .bids()
            .iter()
            .rev()
            .enumerate()
            .map(|(index, bid)| BidEntry {
                id: bid.id.clone(),
                bidder_name: bid.bidder_name.clone(),
                amount: bid.amount,
                timestamp: bid.timestamp,
                leading: index == 0,
            })
            .collect();

        ItemDetail {
            id: item.id.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            location: item.location.clone(),
            year: item.year,
            seller: item.seller.clone(),
            trust_temperature: trust_temperature(item.seller.rating),
            starting_price: item.starting_price(),
            current_price: item.current_price(),
            suggested_next_bid: suggested_next_bid(item),
            bidding_state: item.bidding_state(),
            end_time: item.end_time,
            time_remaining: remaining,
            closed: remaining.is_terminal(),
            bids,
        }
    }
}
