use gyeol_auction::domain::{Command, CommandSuccess, TimeRemaining};
use gyeol_auction::money::{Amount, MoneyError};
use gyeol_auction::web::types::BidRequest;
use serde_json::json;
#[path = "utils/mod.rs"]
mod utils;
use utils::*;

#[test]
fn test_amount_display_groups_thousands() {
    assert_eq!(won(280_000).to_string(), "280,000원");
    assert_eq!(won(5_000).to_string(), "5,000원");
    assert_eq!(won(999).to_string(), "999원");
    assert_eq!(won(1_234_567).to_string(), "1,234,567원");
    assert_eq!(won(-50_000).to_string(), "-50,000원");
}

#[test]
fn test_amount_parse() {
    assert_eq!("150000".parse::<Amount>(), Ok(won(150_000)));
    assert_eq!("150,000원".parse::<Amount>(), Ok(won(150_000)));
    assert_eq!(" 80,000 원 ".parse::<Amount>(), Ok(won(80_000)));
    assert_eq!("원".parse::<Amount>(), Err(MoneyError::Empty));
    assert!(matches!("lots".parse::<Amount>(), Err(MoneyError::InvalidValue(_))));
}

#[test]
fn test_amount_is_a_plain_number_on_the_wire() {
    assert_eq!(serde_json::to_value(won(150_000)).unwrap(), json!(150_000));
    let request: BidRequest = serde_json::from_value(json!({ "amount": 200_000 })).unwrap();
    assert_eq!(request.amount, won(200_000));
}

#[test]
fn test_time_remaining_serializes_as_label() {
    let value = serde_json::to_value(TimeRemaining::HoursMinutes { hours: 4, minutes: 0 }).unwrap();
    assert_eq!(value, json!("4 hours 0 minutes remaining"));
}

#[test]
fn test_place_bid_command_serialization() {
    let command = Command::PlaceBid {
        timestamp: sample_now(),
        item_id: sample_item_id(),
        amount: won(150_000),
    };

    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(
        value,
        json!({
            "$type": "PlaceBid",
            "at": "2016-01-15T08:28:00Z",
            "itemId": "camera",
            "amount": 150000
        })
    );

    let parsed: Command = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, command);
}

#[test]
fn test_bid_accepted_serialization() {
    let mut catalog = sample_catalog();
    let item = catalog.place_bid("camera", won(150_000), bid_time()).unwrap();
    let bid = item.bids()[0].clone();

    let success = CommandSuccess::BidAccepted {
        timestamp: bid_time(),
        item_id: item.id.clone(),
        bid: bid.clone(),
    };
    let value = serde_json::to_value(&success).unwrap();

    assert_eq!(value["$type"], json!("BidAccepted"));
    assert_eq!(value["bid"]["bidderName"], json!("나(Collector)"));
    assert_eq!(value["bid"]["id"], json!(bid.id));
}

#[test]
fn test_item_serialization_uses_camel_case() {
    let value = serde_json::to_value(sample_item()).unwrap();

    assert_eq!(value["startingPrice"], json!(150_000));
    assert_eq!(value["currentPrice"], json!(150_000));
    assert_eq!(value["seller"]["avatarUrl"], json!("https://i.pravatar.cc/150?u=time"));
    assert_eq!(value["bids"], json!([]));
    assert!(value.get("endTime").is_some());
}
