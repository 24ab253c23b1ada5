use crate::types::PlatformMonthRow;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

/// Write `value` as indented JSON, creating the target directory if it
/// does not exist yet. The document is rendered fully in memory first,
/// so a serialization failure never leaves a partial file behind.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

/// Preview for the per-platform report, whose columns vary with the
/// platforms present in the data, so the table is built by hand instead
/// of derived.
pub fn preview_platform_rows(rows: &[PlatformMonthRow], max_rows: usize) {
    if rows.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for platform in row.platforms.keys() {
            if !columns.contains(&platform.as_str()) {
                columns.push(platform);
            }
        }
    }
    columns.sort_unstable();

    let mut builder = Builder::default();
    let mut header = vec!["name".to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));
    builder.push_record(header);
    for row in rows.iter().take(max_rows) {
        let mut cells = vec![row.name.clone()];
        for col in &columns {
            let cell = match row.platforms.get(*col) {
                Some(v) => format!("{}", v),
                None => "-".to_string(),
            };
            cells.push(cell);
        }
        builder.push_record(cells);
    }
    let table_str = builder.build().with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
