//! Fixed-payment loan amortization

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PlannerError;

/// Remaining balances below half a cent are treated as paid off
const PAYOFF_TOLERANCE: f64 = 0.005;

/// Longest schedule built: 100 years of monthly payments
pub const MAX_TOTAL_PERIODS: u32 = 1200;

/// How often loan payments are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Annually => 1,
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "annually" | "annual" | "yearly" => Ok(PaymentFrequency::Annually),
            other => Err(PlannerError::UnsupportedFrequency(other.to_string())),
        }
    }
}

/// One payment in an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// Payment number (1-indexed)
    pub number: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Loan parameters as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    /// Annual rate in percent (6.0 = 6%)
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub frequency: PaymentFrequency,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64, frequency: PaymentFrequency) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            frequency,
        }
    }

    /// Full payment schedule
    pub fn schedule(&self) -> Vec<PaymentRow> {
        amortize(
            self.principal,
            self.annual_rate_percent,
            self.term_years,
            self.frequency.periods_per_year(),
        )
    }

    /// Totals for the full schedule
    pub fn summary(&self) -> LoanSummary {
        LoanSummary::from_schedule(&self.schedule())
    }
}

/// Level payment for an annuity.
///
/// Uses the equivalent form `P·r / (1 − (1+r)^−n)` so `(1+r)^n` is never
/// formed and cannot overflow. Falls back to straight-line
/// `principal / total_periods` for a zero rate, or when the rate is so small
/// that the denominator underflows to zero.
pub fn fixed_payment(principal: f64, periodic_rate: f64, total_periods: u32) -> f64 {
    if total_periods == 0 {
        return 0.0;
    }
    let n = total_periods as f64;
    if periodic_rate == 0.0 {
        return principal / n;
    }

    // 1 - (1 + r)^-n
    let discount = -(-n * periodic_rate.ln_1p()).exp_m1();
    if !(discount.is_finite() && discount > 0.0) {
        return principal / n;
    }
    principal * periodic_rate / discount
}

/// Build the amortization schedule for a fixed-payment loan.
///
/// Returns an empty schedule when the principal or term is missing, zero or
/// not finite, the rate is negative, the term rounds to zero payments or more
/// than [`MAX_TOTAL_PERIODS`], or the level payment is not finite.
pub fn amortize(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    periods_per_year: u32,
) -> Vec<PaymentRow> {
    let usable = principal.is_finite()
        && principal > 0.0
        && annual_rate_percent.is_finite()
        && annual_rate_percent >= 0.0
        && term_years.is_finite()
        && term_years > 0.0
        && periods_per_year > 0;
    if !usable {
        log::debug!(
            "Skipping amortization for principal={} rate={} term={} periods_per_year={}",
            principal,
            annual_rate_percent,
            term_years,
            periods_per_year
        );
        return Vec::new();
    }

    let periodic_rate = annual_rate_percent / 100.0 / periods_per_year as f64;
    let periods = (term_years * periods_per_year as f64).round();
    if periods < 1.0 || periods > MAX_TOTAL_PERIODS as f64 {
        log::debug!("Skipping amortization: {} payments outside 1..={}", periods, MAX_TOTAL_PERIODS);
        return Vec::new();
    }
    let total_periods = periods as u32;

    let payment = fixed_payment(principal, periodic_rate, total_periods);
    if !payment.is_finite() {
        log::debug!("Skipping amortization: payment overflows for principal={}", principal);
        return Vec::new();
    }
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(total_periods as usize);

    for number in 1..=total_periods {
        let interest = balance * periodic_rate;
        let principal_portion = payment - interest;

        balance = (balance - principal_portion).max(0.0);
        if balance < PAYOFF_TOLERANCE {
            balance = 0.0;
        }

        schedule.push(PaymentRow {
            number,
            payment,
            principal: principal_portion,
            interest,
            balance,
        });
    }

    log::debug!(
        "Amortized {:.2} over {} payments of {:.2}",
        principal,
        total_periods,
        payment
    );
    schedule
}

/// Summary statistics for a loan schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub payment: f64,
    pub number_of_payments: u32,
    pub total_paid: f64,
    pub total_principal: f64,
    pub total_interest: f64,
}

impl LoanSummary {
    pub fn from_schedule(schedule: &[PaymentRow]) -> Self {
        Self {
            payment: schedule.first().map(|r| r.payment).unwrap_or(0.0),
            number_of_payments: schedule.len() as u32,
            total_paid: schedule.iter().map(|r| r.payment).sum(),
            total_principal: schedule.iter().map(|r| r.principal).sum(),
            total_interest: schedule.iter().map(|r| r.interest).sum(),
        }
    }
}
