//! Recurring cash-flow item definitions

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Direction of a cash-flow item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Money coming in (revenue, funding)
    Inflow,
    /// Money going out (rent, payroll)
    Outflow,
}

/// How often an item recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Monthly,
    Quarterly,
    Annually,
}

/// A single recurring cash-flow line entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringItem {
    /// Stable identifier, unchanged across edits
    pub id: String,

    /// Stated amount; the sign is carried by `kind`
    pub amount: f64,

    pub kind: FlowKind,

    pub frequency: Frequency,

    /// Zero-based period offset at which the item becomes active
    #[serde(default)]
    pub start_period: u32,

    /// Last active offset (inclusive), open-ended when None
    #[serde(default)]
    pub end_period: Option<u32>,
}

impl RecurringItem {
    /// Create an item active from offset 0 with no end
    pub fn new(id: impl Into<String>, amount: f64, kind: FlowKind, frequency: Frequency) -> Self {
        Self {
            id: id.into(),
            amount,
            kind,
            frequency,
            start_period: 0,
            end_period: None,
        }
    }

    pub fn starting_at(mut self, start_period: u32) -> Self {
        self.start_period = start_period;
        self
    }

    pub fn ending_at(mut self, end_period: u32) -> Self {
        self.end_period = Some(end_period);
        self
    }

    /// Whether the item's active window covers the given zero-based offset
    pub fn is_active_at(&self, offset: u32) -> bool {
        offset >= self.start_period && self.end_period.map_or(true, |end| offset <= end)
    }

    /// Amount with inflows positive and outflows negative
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            FlowKind::Inflow => self.amount,
            FlowKind::Outflow => -self.amount,
        }
    }

    /// Check the item's own invariants
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| PlannerError::InvalidItem {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !self.amount.is_finite() {
            return Err(invalid("amount must be a finite number"));
        }
        if self.amount < 0.0 {
            return Err(invalid("amount must not be negative; use kind = outflow instead"));
        }
        if let Some(end) = self.end_period {
            if end < self.start_period {
                return Err(invalid(&format!(
                    "end_period {} is before start_period {}",
                    end, self.start_period
                )));
            }
        }
        Ok(())
    }
}

/// Validate every item and reject duplicate ids
pub fn validate_items(items: &[RecurringItem]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(PlannerError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_window() {
        let item = RecurringItem::new("rent", 1500.0, FlowKind::Outflow, Frequency::Monthly)
            .starting_at(2)
            .ending_at(4);

        assert!(!item.is_active_at(1));
        assert!(item.is_active_at(2));
        assert!(item.is_active_at(4));
        assert!(!item.is_active_at(5));
    }

    #[test]
    fn test_open_ended_window() {
        let item = RecurringItem::new("sales", 10.0, FlowKind::Inflow, Frequency::Monthly).starting_at(3);
        assert!(!item.is_active_at(0));
        assert!(item.is_active_at(1_000));
    }

    #[test]
    fn test_signed_amount() {
        let inflow = RecurringItem::new("a", 250.0, FlowKind::Inflow, Frequency::Monthly);
        let outflow = RecurringItem::new("b", 250.0, FlowKind::Outflow, Frequency::Monthly);
        assert_eq!(inflow.signed_amount(), 250.0);
        assert_eq!(outflow.signed_amount(), -250.0);
    }

    #[test]
    fn test_validation_rejects_reversed_window() {
        let item = RecurringItem::new("loan", 100.0, FlowKind::Outflow, Frequency::Monthly)
            .starting_at(6)
            .ending_at(2);
        assert!(matches!(item.validate(), Err(PlannerError::InvalidItem { .. })));
    }

    #[test]
    fn test_validation_rejects_negative_and_nan() {
        let negative = RecurringItem::new("x", -5.0, FlowKind::Inflow, Frequency::Monthly);
        let nan = RecurringItem::new("y", f64::NAN, FlowKind::Inflow, Frequency::Monthly);
        assert!(negative.validate().is_err());
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_duplicate_ids() {
        let items = vec![
            RecurringItem::new("rent", 1.0, FlowKind::Outflow, Frequency::Monthly),
            RecurringItem::new("rent", 2.0, FlowKind::Outflow, Frequency::Monthly),
        ];
        assert!(matches!(validate_items(&items), Err(PlannerError::DuplicateId(id)) if id == "rent"));
    }

    #[test]
    fn test_json_field_names() {
        let item = RecurringItem::new("grant", 5000.0, FlowKind::Inflow, Frequency::OneTime).starting_at(2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "inflow");
        assert_eq!(json["frequency"], "one-time");
        assert_eq!(json["start_period"], 2);
        assert!(json["end_period"].is_null());

        let back: RecurringItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
