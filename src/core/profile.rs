use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::AssetType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub logo: String,
    pub name: String,
    pub country: String,
    pub currency: String,
    pub exchange: String,
    pub industry: String,
}

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn get_profile(&self, symbol: &str, asset_type: AssetType) -> Option<CompanyProfile>;
}
