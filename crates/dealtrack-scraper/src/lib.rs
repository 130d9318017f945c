pub mod error;
pub mod extract;
pub mod fetch;
pub mod price;
pub mod savings;

pub use error::ScrapeError;
pub use extract::{extract_product, ExtractionResult};
pub use fetch::QuoteFetcher;
pub use price::parse_price;
pub use savings::savings_percentage;
