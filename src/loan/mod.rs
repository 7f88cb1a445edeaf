//! Loan amortization schedules

mod amortization;

pub use amortization::{amortize, fixed_payment, MAX_TOTAL_PERIODS, LoanSummary, LoanTerms, PaymentFrequency, PaymentRow};
