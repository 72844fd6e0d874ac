// Example: client-side pagination over a block list, with a column drag.
use explorer_table::{Column, ColumnSet, Table, TableBody, TableMode, TableOptions};

struct Block {
    height: u64,
    epoch: u32,
    tx_count: u32,
}

fn main() -> Result<(), explorer_table::TableError> {
    let blocks: Vec<Block> = (0..47)
        .map(|i| Block {
            height: 10_512_000 + i,
            epoch: 480 + (i / 20) as u32,
            tx_count: (i * 3 % 11) as u32,
        })
        .collect();

    let columns = ColumnSet::new(vec![
        Column::new("height", "Block", |b: &Block| Some(b.height.to_string())),
        Column::new("epoch", "Epoch", |b: &Block| Some(b.epoch.to_string())),
        Column::new("tx", "Transactions", |b: &Block| Some(b.tx_count.to_string())),
    ])?;

    let options = TableOptions::new(|b: &Block| b.height)
        .with_mode(TableMode::paginated())
        .with_total_items(blocks.len())
        .with_items_per_page(20)?
        .with_on_order_change(|keys: &[String]| println!("new order: {keys:?}"));

    let mut table = Table::new(columns, options);
    table.go_to_page(3)?;

    let view = table.render(Some(blocks.as_slice()));
    if let TableBody::Rows { rows, .. } = &view.body {
        for row in rows {
            let cells: Vec<&str> = row
                .cells
                .iter()
                .map(|c| c.content.as_deref().unwrap_or("-"))
                .collect();
            println!("{:>10} | {}", row.key, cells.join(" | "));
        }
    }
    if let Some(footer) = &view.footer {
        println!(
            "{} (page {}/{})",
            footer.display_text, footer.current_page, footer.total_pages
        );
    }

    table.drag_start(2);
    table.drop(0)?;
    Ok(())
}
