// src/domain/mod.rs
pub mod bids;
pub mod catalog;
pub mod commands;
pub mod core;
pub mod items;
pub mod states;
pub mod valuation;

use thiserror::Error;

pub use self::bids::*;
pub use self::catalog::*;
pub use self::commands::*;
pub use self::core::*;
pub use self::items::*;
pub use self::states::*;
pub use self::valuation::*;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Auction error: {0}")]
    AuctionError(#[from] Errors),
}

pub fn handle(command: Command, catalog: &mut Catalog) -> Result<CommandSuccess, HandleError> {
    match command {
        Command::PlaceBid { timestamp, item_id, amount } => {
            let bid = Bid::new(COLLECTOR_NAME, amount, timestamp);
            catalog.apply(&item_id, bid.clone())?;

            Ok(CommandSuccess::BidAccepted { timestamp, item_id, bid })
        }
    }
}
