//! CSV export of the full item set.

use std::io;

use barstock_inventory::Item;

use crate::item_store::{StoreError, StoreResult};

pub const CSV_HEADER: [&str; 6] = ["ID", "Name", "Quantity", "Unit", "Category", "Location"];
pub const CSV_FILE_NAME: &str = "inventory_report.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Write the header and one record per item, in the given order.
///
/// Fields are written verbatim; the writer only quotes fields containing a
/// delimiter, quote or line break.
pub fn write_csv<W: io::Write>(items: &[Item], out: W) -> StoreResult<W> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for item in items {
        writer.write_record([
            item.id.to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            item.unit.clone(),
            item.category.clone(),
            item.location.clone(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::Csv(csv::Error::from(e.into_error())))
}

pub fn export_csv(items: &[Item]) -> StoreResult<Vec<u8>> {
    write_csv(items, Vec::new())
}
