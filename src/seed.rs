// src/seed.rs
//
// The fixed catalog every process starts from. End times are relative to the
// moment of seeding; the recorded history goes through the same validation as
// live bids.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{validate_bid, AuctionItem, Bid, BiddingRules, Errors, Seller};
use crate::money::Amount;

fn history_bid(id: &str, bidder: &str, amount: i64, at: DateTime<Utc>) -> Bid {
    Bid {
        id: id.to_string(),
        bidder_name: bidder.to_string(),
        amount: Amount::new(amount),
        timestamp: at,
    }
}

fn replay(item: AuctionItem, history: Vec<Bid>) -> Result<AuctionItem, Errors> {
    let rules = BiddingRules::default();
    history.into_iter().try_fold(item, |item, bid| {
        validate_bid(&bid, &item, &rules)?;
        Ok(item.with_bid(bid))
    })
}

pub fn seed_items(now: DateTime<Utc>) -> Result<Vec<AuctionItem>, Errors> {
    let camera = AuctionItem::new(
        "1",
        "1985년, 아버지의 첫 필름 카메라",
        Amount::new(150_000),
        now + Duration::hours(4),
        Seller::new("시간여행자", 4.9).with_avatar("https://i.pravatar.cc/150?u=time"),
    )
    .with_subtitle("수많은 가족 여행을 기록했던 시간을 내놓습니다.")
    .with_description(
        "아버지가 첫 월급으로 장만하셨다는 1985년산 필름 카메라입니다.\n\n\
         단순한 기계가 아니라 저희 가족의 역사가 담겨있습니다. 셔터를 누를 때의 묵직한 감각과 \
         필름을 감는 소리는 디지털이 흉내 낼 수 없는 깊이가 있죠.\n\n\
         이제는 제가 관리하기 어려워, 이 카메라의 가치를 알고 소중히 다뤄주실 새로운 소장자를 찾습니다. \
         렌즈 곰팡이 없이 깨끗하며, 가죽 케이스에서 세월의 향기가 납니다.",
    )
    .with_category("Vintage Camera")
    .with_image("https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=1000&auto=format&fit=crop")
    .with_location("성북동 주택가")
    .with_year(1985);

    let briefcase = AuctionItem::new(
        "2",
        "손때 묻은 가죽 서류가방",
        Amount::new(80_000),
        now + Duration::hours(48),
        Seller::new("미생", 4.5).with_avatar("https://i.pravatar.cc/150?u=work"),
    )
    .with_subtitle("30년 근속의 영광과 땀이 배어있는 가방")
    .with_description(
        "은퇴하신 저희 부장님께서 물려주신 가죽 가방입니다.\n\n\
         이태리 베지터블 가죽으로 제작되어 사용할수록 광택이 살아나는 물건입니다. \
         중요한 계약이 있는 날이면 항상 이 가방을 드셨다고 해요.\n\n\
         사회초년생이나 새로운 시작을 앞둔 분께 좋은 기운을 드리고 싶어 경매에 올립니다. \
         가죽 에센스로 꾸준히 관리해왔습니다.",
    )
    .with_category("Leather Goods")
    .with_image("https://images.unsplash.com/photo-1553062407-98eeb64c6a62?q=80&w=1000&auto=format&fit=crop")
    .with_location("여의도")
    .with_year(1995);

    let vase = AuctionItem::new(
        "3",
        "작자 미상의 도자기 화병",
        Amount::new(50_000),
        now + Duration::minutes(30),
        Seller::new("여백의미", 5.0),
    )
    .with_subtitle("시골 할머니 댁 다락방에서 발견한 정적인 아름다움")
    .with_description(
        "화려하지 않지만 볼수록 마음이 편안해지는 백자 화병입니다.\n\n\
         할머니께서 시집오실 때 가져오셨다고 하니 족히 60년은 넘은 물건입니다. \
         들꽃 한 송이 꽂아두면 공간의 공기가 달라집니다.\n\n\
         바닥에 작은 빙열이 있지만 물이 새지는 않습니다. 고요한 아름다움을 즐길 줄 아는 분께 갔으면 좋겠습니다.",
    )
    .with_category("Ceramics")
    .with_image("https://images.unsplash.com/photo-1610701596007-11502861dcfa?q=80&w=1000&auto=format&fit=crop")
    .with_location("종로구 평창동")
    .with_year(1960);

    Ok(vec![
        replay(
            camera,
            vec![
                history_bid("b1", "포토그래퍼J", 180_000, now),
                history_bid("b2", "아날로그감성", 280_000, now),
            ],
        )?,
        briefcase,
        replay(
            vase,
            vec![
                history_bid("b3", "도예가", 60_000, now),
                history_bid("b4", "갤러리K", 120_000, now),
            ],
        )?,
    ])
}
