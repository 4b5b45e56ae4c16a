// src/domain/valuation.rs
//
// Derived values recomputed on every read. Nothing here touches the catalog.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use super::items::AuctionItem;
use super::states::BiddingState;
use crate::money::Amount;

/// Default raise offered to the collector once an item has bids.
pub const BID_INCREMENT: Amount = Amount::new(5000);

/// Baseline temperature for a seller rated 3.0.
pub const BASE_TEMPERATURE: f64 = 36.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Closed,
    Days(i64),
    HoursMinutes { hours: i64, minutes: i64 },
}

impl TimeRemaining {
    /// Once closed the countdown never changes again, so callers can stop ticking.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TimeRemaining::Closed)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRemaining::Closed => write!(f, "Closed"),
            TimeRemaining::Days(days) => write!(f, "{} days remaining", days),
            TimeRemaining::HoursMinutes { hours, minutes } => {
                write!(f, "{} hours {} minutes remaining", hours, minutes)
            }
        }
    }
}

impl Serialize for TimeRemaining {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

pub fn time_remaining(end_time: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    if now >= end_time {
        return TimeRemaining::Closed;
    }

    let diff = end_time - now;
    let hours = diff.num_hours();
    let minutes = (diff - Duration::hours(hours)).num_minutes();

    if hours > 24 {
        TimeRemaining::Days(hours / 24)
    } else {
        TimeRemaining::HoursMinutes { hours, minutes }
    }
}

/// Decorative warmth score. Not clamped: 5.0 gives 56.5 and 0.0 gives 6.5.
pub fn trust_temperature(seller_rating: f64) -> f64 {
    BASE_TEMPERATURE + (seller_rating - 3.0) * 10.0
}

/// The amount pre-filled in the bid field. Not an enforced minimum.
pub fn suggested_next_bid(item: &AuctionItem) -> Amount {
    match item.bidding_state() {
        BiddingState::NoBids => item.starting_price(),
        BiddingState::HasBids => item.current_price() + BID_INCREMENT,
    }
}
