pub mod convert;

pub use convert::{normalize_price, usd_value, ConvertError, PRICE_DECIMALS};
