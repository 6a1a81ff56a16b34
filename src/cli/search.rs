use super::ui;
use crate::core::{AssetType, SymbolDescriptor, SymbolProvider};
use anyhow::Result;
use comfy_table::Cell;

pub fn render_symbols(symbols: &[SymbolDescriptor]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Display"),
        ui::header_cell("Description"),
        ui::header_cell("Type"),
    ]);

    for symbol in symbols {
        table.add_row(vec![
            Cell::new(&symbol.symbol),
            Cell::new(&symbol.display_symbol),
            Cell::new(&symbol.description),
            Cell::new(&symbol.asset_type),
        ]);
    }

    table.to_string()
}

pub async fn run(provider: &dyn SymbolProvider, query: &str, asset_type: AssetType) -> Result<()> {
    let results = provider.search(query, asset_type).await;
    if results.is_empty() {
        println!(
            "{}",
            ui::style_text(
                &format!("No {asset_type} symbols found for '{}'", query.trim()),
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    println!("{}", render_symbols(&results));
    Ok(())
}
