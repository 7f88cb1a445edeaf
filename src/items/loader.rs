//! Load recurring items from CSV or JSON files

use super::{validate_items, FlowKind, Frequency, RecurringItem};
use crate::error::{PlannerError, Result};
use csv::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row: id,amount,kind,frequency,start_period,end_period
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    amount: f64,
    kind: String,
    frequency: String,
    #[serde(default)]
    start_period: Option<u32>,
    #[serde(default)]
    end_period: Option<u32>,
}

impl CsvRow {
    fn into_item(self) -> Result<RecurringItem> {
        let kind = match self.kind.trim().to_ascii_lowercase().as_str() {
            "inflow" | "income" => FlowKind::Inflow,
            "outflow" | "expense" => FlowKind::Outflow,
            other => {
                return Err(PlannerError::InvalidItem {
                    id: self.id,
                    reason: format!("unknown kind: {}", other),
                })
            }
        };

        let frequency = match self.frequency.trim().to_ascii_lowercase().as_str() {
            "one-time" | "onetime" | "once" => Frequency::OneTime,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annually" | "annual" | "yearly" => Frequency::Annually,
            other => {
                return Err(PlannerError::InvalidItem {
                    id: self.id,
                    reason: format!("unknown frequency: {}", other),
                })
            }
        };

        Ok(RecurringItem {
            id: self.id,
            amount: self.amount,
            kind,
            frequency,
            start_period: self.start_period.unwrap_or(0),
            end_period: self.end_period,
        })
    }
}

/// Load items from a file, picking the format from its extension
pub fn load_items(path: &Path) -> Result<Vec<RecurringItem>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_items_from_csv_reader(File::open(path)?),
        Some("json") => load_items_from_json_reader(File::open(path)?),
        _ => Err(PlannerError::UnknownFormat(path.display().to_string())),
    }
}

/// Load items from any CSV reader (file, string, etc.)
pub fn load_items_from_csv_reader<R: Read>(reader: R) -> Result<Vec<RecurringItem>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut items = Vec::new();

    for (line, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let item = row.into_item().map_err(|err| {
            log::warn!("Rejecting item on data row {}: {}", line + 1, err);
            err
        })?;
        items.push(item);
    }

    validate_items(&items)?;
    log::debug!("Loaded {} items from CSV", items.len());
    Ok(items)
}

/// Load items from a JSON array of item objects
pub fn load_items_from_json_reader<R: Read>(reader: R) -> Result<Vec<RecurringItem>> {
    let items: Vec<RecurringItem> = serde_json::from_reader(reader)?;
    validate_items(&items)?;
    log::debug!("Loaded {} items from JSON", items.len());
    Ok(items)
}
