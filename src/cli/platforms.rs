use super::ui;
use crate::providers::catalog::{PLATFORMS, Platform};
use comfy_table::Cell;

pub fn render_platforms(platforms: &[Platform]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Name"),
        ui::header_cell("Assets"),
    ]);

    for platform in platforms {
        table.add_row(vec![
            Cell::new(platform.id),
            Cell::new(platform.name),
            Cell::new(platform.kind),
        ]);
    }

    table.to_string()
}

pub fn run() {
    println!("{}", render_platforms(PLATFORMS));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_platforms() {
        let output = render_platforms(PLATFORMS);

        assert!(output.contains("interactive_brokers"));
        assert!(output.contains("Buda.com"));
        assert!(output.contains("traditional"));
    }
}
