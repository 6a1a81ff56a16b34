pub mod catalog;
pub mod finnhub;
pub mod util;

pub use finnhub::FinnhubProvider;
