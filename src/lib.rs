//! Cashflow Planner - Periodic projection engine for small business financial planning
//!
//! This library provides:
//! - Recurring cash-flow items with frequency rules and active windows
//! - Period-by-period cash-flow schedules with running balances
//! - Steady-state summary metrics (burn rate, runway, extrema)
//! - Fixed-payment loan amortization schedules
//! - Multi-horizon scenario runs

pub mod error;
pub mod currency;
pub mod items;
pub mod projection;
pub mod loan;
pub mod scenario;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use items::{FlowKind, Frequency, RecurringItem};
pub use projection::{
    amount_for_period, simulate, summarize, PeriodResult, ProjectionEngine, ProjectionHorizon,
    ProjectionResult, ProjectionSummary, Runway,
};
pub use loan::{amortize, LoanSummary, LoanTerms, PaymentFrequency, PaymentRow};
pub use scenario::ScenarioRunner;
