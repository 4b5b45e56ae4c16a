use chrono::Duration;
use gyeol_auction::domain::{time_remaining, trust_temperature, BiddingRules, BiddingState, Catalog};
use gyeol_auction::seed::seed_items;
#[path = "utils/mod.rs"]
mod utils;
use utils::*;

#[test]
fn test_seed_catalog_shape() {
    let items = seed_items(sample_now()).unwrap();
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    assert_eq!(items[0].current_price(), won(280_000));
    assert_eq!(items[0].bids().len(), 2);
    assert_eq!(items[1].bidding_state(), BiddingState::NoBids);
    assert_eq!(items[1].current_price(), won(80_000));
    assert_eq!(items[2].current_price(), won(120_000));
}

#[test]
fn test_seed_prices_match_highest_bid() {
    for item in seed_items(sample_now()).unwrap() {
        match item.bids().iter().map(|bid| bid.amount).max() {
            Some(max) => assert_eq!(item.current_price(), max),
            None => assert_eq!(item.current_price(), item.starting_price()),
        }
    }
}

#[test]
fn test_seed_countdowns() {
    let now = sample_now();
    let labels: Vec<String> = seed_items(now)
        .unwrap()
        .iter()
        .map(|item| time_remaining(item.end_time, now).to_string())
        .collect();

    assert_eq!(
        labels,
        vec![
            "4 hours 0 minutes remaining",
            "2 days remaining",
            "0 hours 30 minutes remaining"
        ]
    );

    let later = now + Duration::minutes(1);
    let items = seed_items(now).unwrap();
    assert_eq!(time_remaining(items[1].end_time, later).to_string(), "1 days remaining");
}

#[test]
fn test_seed_temperatures() {
    let items = seed_items(sample_now()).unwrap();
    assert_eq!(trust_temperature(items[2].seller.rating), 56.5);
}

#[test]
fn test_bid_on_seeded_item() {
    let mut catalog = Catalog::new(seed_items(sample_now()).unwrap(), BiddingRules::default());
    assert!(catalog.place_bid("1", won(280_000), bid_time()).is_err());
    let item = catalog.place_bid("1", won(285_000), bid_time()).unwrap();
    assert_eq!(item.bids().len(), 3);
}
