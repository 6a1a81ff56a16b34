use super::ui;
use crate::core::{AssetType, CompanyProfile, ProfileProvider};
use anyhow::{Result, bail};
use comfy_table::Cell;

pub fn render_profile(profile: &CompanyProfile) -> String {
    let mut table = ui::new_styled_table();
    for (label, value) in [
        ("Name", &profile.name),
        ("Exchange", &profile.exchange),
        ("Country", &profile.country),
        ("Currency", &profile.currency),
        ("Industry", &profile.industry),
        ("Logo", &profile.logo),
    ] {
        table.add_row(vec![ui::header_cell(label), Cell::new(value)]);
    }
    table.to_string()
}

pub async fn run(provider: &dyn ProfileProvider, symbol: &str, asset_type: AssetType) -> Result<()> {
    let Some(profile) = provider.get_profile(symbol, asset_type).await else {
        bail!("Profile not found for {}", symbol.trim().to_uppercase());
    };

    println!("{}", render_profile(&profile));
    Ok(())
}
