use contracts::shared::report::ReportTable;

use super::ReportError;
use crate::shared::format::format_amount;

/// Column header row followed by the data rows; the total, when present, is the last line
pub fn render_csv(table: &ReportTable) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    let write_err = |e: csv::Error| ReportError::Render(e.to_string());

    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }
    if let Some(total) = &table.total {
        let amount = format_amount(total.amount);
        writer
            .write_record([total.label.as_str(), amount.as_str()])
            .map_err(write_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Render(e.to_string()))
}
