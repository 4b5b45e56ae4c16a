#![allow(dead_code)]
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use gyeol_auction::domain::{AuctionItem, BiddingRules, Catalog, Seller};
use gyeol_auction::money::Amount;
use gyeol_auction::planner::{GenerationError, TextGenerator};
use std::sync::Mutex;
use tokio::sync::Notify;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_item_id() -> String {
    "camera".to_string()
}

pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 15, 8, 28, 0).unwrap()
}

pub fn sample_ends_at() -> DateTime<Utc> {
    sample_now() + Duration::hours(4)
}

pub fn sample_seller() -> Seller {
    Seller::new("시간여행자", 4.9).with_avatar("https://i.pravatar.cc/150?u=time")
}

pub fn won(value: i64) -> Amount {
    Amount::new(value)
}

pub fn sample_item() -> AuctionItem {
    AuctionItem::new(sample_item_id(), "Film camera", won(150_000), sample_ends_at(), sample_seller())
        .with_subtitle("A decade of family trips")
        .with_category("Vintage Camera")
        .with_location("Seongbuk-dong")
        .with_year(1985)
}

pub fn second_item() -> AuctionItem {
    AuctionItem::new(
        "briefcase",
        "Leather briefcase",
        won(80_000),
        sample_now() + Duration::hours(48),
        Seller::new("미생", 4.5),
    )
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![sample_item(), second_item()], BiddingRules::default())
}

pub fn bid_time() -> DateTime<Utc> {
    sample_now() + Duration::minutes(1)
}

/// Holds every request until released, recording the prompts it saw.
pub struct Gate {
    pub release: Notify,
    pub prompts: Mutex<Vec<String>>,
}

impl Gate {
    pub fn new() -> Self {
        Gate {
            release: Notify::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Yields until `count` prompts have reached the generator.
    pub async fn wait_for_prompts(&self, count: usize) {
        while self.prompts.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl TextGenerator for Gate {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.release.notified().await;
        Ok(Some("done".to_string()))
    }
}
