use crate::types::RawRecord;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub distinct_months: usize,
}

/// Load the cleaned metrics table from `path`.
///
/// A missing file is the one anticipated failure: it produces a single
/// user-facing message telling the operator to run the cleaning step.
/// Everything else (missing column, non-numeric `Value`) propagates as a
/// row-level parse error; the table is either loaded whole or not at all.
pub fn load(path: &str) -> Result<(Vec<RawRecord>, LoadReport), Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!(
            "'{}' not found. Run the cleaning step to generate it first.",
            path
        )
        .into());
    }
    let file = File::open(path)?;
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<(Vec<RawRecord>, LoadReport), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);
    let mut rows: Vec<RawRecord> = Vec::new();
    let mut months: HashSet<String> = HashSet::new();

    for result in rdr.deserialize::<RawRecord>() {
        let row = result?;
        months.insert(row.month.clone());
        rows.push(row);
    }

    let report = LoadReport {
        total_rows: rows.len(),
        distinct_months: months.len(),
    };
    Ok((rows, report))
}
