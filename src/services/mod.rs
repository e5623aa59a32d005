//! External collaborators: market data in, notifications out.

pub mod market_data;
pub mod telegram;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use telegram::{NotificationSink, TelegramNotifier};
pub use yahoo::YahooFinanceProvider;
