//! Monthly aggregation, net forecasting, and the carry-over chain.
//!
//! Everything here follows a "never fail, always degrade" contract: empty
//! inputs yield zero sums, inverted ranges yield empty chains, and no
//! function mutates or caches caller data. Each call re-scans the
//! transaction slice it is given.

pub mod balance;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::{Month, Transaction, TransactionType};

/// Default trailing window for [`monthly_forecast_with_carry`].
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;

/// Paid income totals, dated within the target month.
pub fn monthly_income(transactions: &[Transaction], month: Month) -> f64 {
    paid_total(transactions, month, TransactionType::Income)
}

/// Paid expense totals, dated within the target month.
pub fn monthly_expenses(transactions: &[Transaction], month: Month) -> f64 {
    paid_total(transactions, month, TransactionType::Expense)
}

/// Unpaid income scheduled for exactly the target month.
///
/// Pending items are bucketed by their own nominal month only; a pending
/// transaction scheduled for June never counts toward May.
pub fn monthly_pending_income(transactions: &[Transaction], month: Month) -> f64 {
    pending_total(transactions, month, TransactionType::Income)
}

/// Unpaid expenses scheduled for exactly the target month.
pub fn monthly_pending_expenses(transactions: &[Transaction], month: Month) -> f64 {
    pending_total(transactions, month, TransactionType::Expense)
}

fn paid_total(transactions: &[Transaction], month: Month, kind: TransactionType) -> f64 {
    let start = month.first_day();
    let end = month.last_day();
    transactions
        .iter()
        .filter(|txn| txn.kind == kind && txn.is_paid)
        .filter(|txn| {
            let date = txn.normalized_date();
            date >= start && date <= end
        })
        .map(|txn| txn.amount)
        .sum()
}

fn pending_total(transactions: &[Transaction], month: Month, kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind && !txn.is_paid)
        .filter(|txn| month.contains(txn.normalized_date()))
        .map(|txn| txn.amount)
        .sum()
}

/// A month's forecast net: paid plus pending income, minus paid plus pending
/// expenses, before any carry-in.
pub fn monthly_forecast_net(transactions: &[Transaction], month: Month) -> f64 {
    let income = monthly_income(transactions, month) + monthly_pending_income(transactions, month);
    let expenses =
        monthly_expenses(transactions, month) + monthly_pending_expenses(transactions, month);
    income - expenses
}

/// One month's ledger line in a carry-over chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    #[serde(flatten)]
    pub month: Month,
    pub carry_in: f64,
    pub net: f64,
    #[serde(rename = "final")]
    pub final_balance: f64,
    pub carry_out: f64,
}

/// A positive surplus conceptually moving from one month into the next.
/// Synthetic; never a real ledger transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CarryOverChain {
    pub months: Vec<MonthEntry>,
    pub transfers: Vec<Transfer>,
}

/// Walks the months from `start` through `end` inclusive, rolling any
/// positive leftover balance forward as the next month's opening carry.
///
/// A deficit month never drags the following month's carry-in below zero; it
/// only depresses its own final balance. An inverted range yields an empty
/// chain.
pub fn calculate_carry_over_chain(
    transactions: &[Transaction],
    start: Month,
    end: Month,
) -> CarryOverChain {
    let mut chain = CarryOverChain::default();
    if start > end {
        return chain;
    }

    let mut carry = 0.0_f64;
    let mut cursor = start;
    loop {
        // Invariant: carry entering a month is never negative.
        let carry_in = carry.max(0.0);
        let net = monthly_forecast_net(transactions, cursor);
        let final_balance = carry_in + net;
        let carry_out = final_balance.max(0.0);
        let is_last = cursor == end;

        chain.months.push(MonthEntry {
            month: cursor,
            carry_in,
            net,
            final_balance,
            carry_out,
        });
        if carry_out > 0.0 && !is_last {
            chain.transfers.push(Transfer {
                from: cursor.label(),
                to: cursor.succ().label(),
                amount: carry_out,
            });
        }

        carry = carry_out;
        if is_last {
            break;
        }
        cursor = cursor.succ();
    }
    chain
}

/// The target month's chain entry, without the month key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub carry_in: f64,
    pub net: f64,
    #[serde(rename = "final")]
    pub final_balance: f64,
    pub carry_out: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastWithCarry {
    pub summary: ForecastSummary,
    pub transfers: Vec<Transfer>,
}

/// Forecast for `target` with the default trailing lookback window.
pub fn monthly_forecast_with_carry(
    transactions: &[Transaction],
    target: Month,
) -> ForecastWithCarry {
    monthly_forecast_with_carry_window(transactions, target, DEFAULT_LOOKBACK_MONTHS)
}

/// Forecast for `target`, chaining carry-over across a bounded trailing
/// window ending at the target month.
///
/// The window approximates the true cumulative carry without requiring the
/// account's full history; callers that want exact inception-to-date carry
/// can pass a window large enough to cover it.
pub fn monthly_forecast_with_carry_window(
    transactions: &[Transaction],
    target: Month,
    lookback_months: u32,
) -> ForecastWithCarry {
    let start = target.minus_months(lookback_months.saturating_sub(1));
    let chain = calculate_carry_over_chain(transactions, start, target);
    let summary = chain
        .months
        .last()
        .map(|entry| ForecastSummary {
            carry_in: entry.carry_in,
            net: entry.net,
            final_balance: entry.final_balance,
            carry_out: entry.carry_out,
        })
        .unwrap_or_default();
    debug!(
        target = %target,
        lookback_months,
        carry_in = summary.carry_in,
        carry_out = summary.carry_out,
        "computed monthly forecast with carry"
    );
    ForecastWithCarry {
        summary,
        transfers: chain.transfers,
    }
}
