//! Account-scoped balance helpers.
//!
//! These sit outside the carry-over chain: they answer "how much does this
//! account hold as of the end of a month" style questions for account cards
//! and patrimony totals. Only settled transactions move a balance.

use uuid::Uuid;

use crate::dates;
use crate::ledger::{Account, Investment, Month, Transaction, TransactionType};

/// Paid income minus paid expenses for exactly the target month, across all
/// accounts. Pending items are ignored.
pub fn total_net_for_month(transactions: &[Transaction], month: Month) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_paid && month.contains(txn.normalized_date()))
        .map(signed_amount)
        .sum()
}

/// One account's settled balance accumulated through the last instant of the
/// target month.
pub fn account_cumulative_balance(
    transactions: &[Transaction],
    account_id: Uuid,
    month: Month,
) -> f64 {
    let cutoff = month.last_day();
    transactions
        .iter()
        .filter(|txn| txn.account_id == Some(account_id) && txn.is_paid)
        .filter(|txn| txn.normalized_date() <= cutoff)
        .map(signed_amount)
        .sum()
}

/// Settled balances of every listed account, summed.
pub fn total_cumulative_balance(
    transactions: &[Transaction],
    accounts: &[Account],
    month: Month,
) -> f64 {
    accounts
        .iter()
        .map(|account| account_cumulative_balance(transactions, account.id, month))
        .sum()
}

/// Total invested amount across positions dated up to the end of the target
/// month.
pub fn investments_total_until(investments: &[Investment], month: Month) -> f64 {
    let cutoff = month.last_day();
    investments
        .iter()
        .filter(|position| dates::transaction_date(&position.date) <= cutoff)
        .map(|position| position.amount)
        .sum()
}

fn signed_amount(txn: &Transaction) -> f64 {
    match txn.kind {
        TransactionType::Income => txn.amount,
        TransactionType::Expense => -txn.amount,
        TransactionType::Transfer => 0.0,
    }
}
