// Entry point and high-level pipeline flow.
//
// The binary turns the cleaned monthly marketing metrics into the JSON
// document the dashboard front end reads:
// - load the cleaned CSV (fail fast if the cleaning step has not
//   produced it yet),
// - run the three aggregation passes (monthly overview, per-platform
//   investment, funnel totals),
// - write the assembled document as indented JSON into the web
//   project's public asset directory.
mod loader;
mod output;
mod reports;
mod types;
mod util;

use std::process;

const INPUT_CSV: &str = "dados_limpos.csv";
const OUTPUT_JSON: &str = "dashboard-marketing/public/data.json";

fn main() {
    let (data, load_report) = match loader::load(INPUT_CSV) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    println!(
        "Processing dataset... ({} rows loaded across {} months)",
        util::format_int(load_report.total_rows as i64),
        util::format_int(load_report.distinct_months as i64)
    );
    println!();

    let dashboard = reports::build_dashboard(&data);

    println!("Monthly overview (Total platform):");
    output::preview_table_rows(&dashboard.monthly, 3);

    println!("Investment per platform:");
    output::preview_platform_rows(&dashboard.platforms, 3);

    println!("Acquisition funnel (all months):");
    output::preview_table_rows(&dashboard.funnel, 5);

    if let Err(e) = output::write_json(OUTPUT_JSON, &dashboard) {
        eprintln!("Write error: {}", e);
        process::exit(1);
    }
    println!("Dashboard data written to '{}'.", OUTPUT_JSON);
}
