//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod holding;
pub mod log;
pub mod profile;
pub mod quote;
pub mod symbol;

// Re-export main types for cleaner imports
pub use profile::{CompanyProfile, ProfileProvider};
pub use quote::{AssetType, QuoteError, QuoteProvider, QuoteRecord};
pub use symbol::{SymbolDescriptor, SymbolProvider};
