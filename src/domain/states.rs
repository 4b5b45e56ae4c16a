// src/domain/states.rs
use serde::Serialize;

/// One-way: the first accepted bid moves an item to `HasBids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BiddingState {
    NoBids,
    HasBids,
}

/// Wall-clock comparison against the item's end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Closure {
    Open,
    Closed,
}
