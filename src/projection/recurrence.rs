//! Recurrence rules: how much of an item applies in a given period
//!
//! Two deliberately separate models live here:
//! - [`amount_for_period`] gates by exact period for the month-by-month schedule
//! - [`summary_average`] uses flat multipliers for the steady-state summary
//!
//! They disagree for quarterly, annual and one-time items. Each is tested on
//! its own terms and neither is derived from the other.

use crate::items::{Frequency, RecurringItem};

/// Amount of `item` falling in 1-based `period` of the schedule.
///
/// Window checks use the zero-based offset `period - 1`. Quarterly items
/// contribute `amount / 3` in the first month of each 3-month block only, and
/// annual items `amount / 12` in the first month of each 12-month block only;
/// the blocks are counted from period 1, not from the item's start. One-time
/// items contribute their full amount at `start_period` and nothing after.
pub fn amount_for_period(item: &RecurringItem, period: u32) -> f64 {
    let Some(offset) = period.checked_sub(1) else {
        return 0.0;
    };
    if !item.is_active_at(offset) {
        return 0.0;
    }

    match item.frequency {
        Frequency::Monthly => item.amount,
        Frequency::Quarterly => {
            if offset % 3 == 0 {
                item.amount / 3.0
            } else {
                0.0
            }
        }
        Frequency::Annually => {
            if offset % 12 == 0 {
                item.amount / 12.0
            } else {
                0.0
            }
        }
        Frequency::OneTime => {
            if offset == item.start_period {
                item.amount
            } else {
                0.0
            }
        }
    }
}

/// Steady-state monthly equivalent of an item, ignoring its active window.
///
/// Multipliers: monthly 1, quarterly 1/4, annually 1/12. One-time items are
/// not a recurring flow and contribute 0.
pub fn summary_average(item: &RecurringItem) -> f64 {
    let multiplier = match item.frequency {
        Frequency::Monthly => 1.0,
        Frequency::Quarterly => 1.0 / 4.0,
        Frequency::Annually => 1.0 / 12.0,
        Frequency::OneTime => 0.0,
    };
    item.amount * multiplier
}
