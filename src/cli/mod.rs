pub mod holdings;
pub mod platforms;
pub mod profile;
pub mod quote;
pub mod search;
pub mod setup;
pub mod symbols;
pub mod ui;
