use cashflow_core::forecast::balance::{
    account_cumulative_balance, investments_total_until, total_cumulative_balance,
    total_net_for_month,
};
use cashflow_core::ledger::{Account, AccountKind, Investment, Month, Transaction, TransactionType};
use uuid::Uuid;

fn paid_for(
    account_id: Uuid,
    kind: TransactionType,
    amount: f64,
    date: &str,
) -> Transaction {
    Transaction::new(kind, "fixture", amount, date)
        .with_account(account_id)
        .paid()
}

#[test]
fn account_balance_accumulates_up_to_month_end() {
    let account_id = Uuid::new_v4();
    let transactions = vec![
        paid_for(account_id, TransactionType::Income, 1000.0, "2024-01-05"),
        paid_for(account_id, TransactionType::Expense, 300.0, "2024-02-10"),
        paid_for(account_id, TransactionType::Income, 200.0, "2024-03-01"),
    ];

    assert_eq!(
        account_cumulative_balance(&transactions, account_id, Month::new(2024, 1)),
        1000.0
    );
    assert_eq!(
        account_cumulative_balance(&transactions, account_id, Month::new(2024, 2)),
        700.0
    );
    assert_eq!(
        account_cumulative_balance(&transactions, account_id, Month::new(2024, 3)),
        900.0
    );
}

#[test]
fn account_balance_ignores_other_accounts_and_unscoped_rows() {
    let mine = Uuid::new_v4();
    let theirs = Uuid::new_v4();
    let transactions = vec![
        paid_for(mine, TransactionType::Income, 100.0, "2024-01-05"),
        paid_for(theirs, TransactionType::Income, 9999.0, "2024-01-06"),
        Transaction::new(TransactionType::Income, "unscoped", 50.0, "2024-01-07").paid(),
    ];
    assert_eq!(
        account_cumulative_balance(&transactions, mine, Month::new(2024, 1)),
        100.0
    );
}

#[test]
fn pending_and_transfer_rows_do_not_move_balances() {
    let account_id = Uuid::new_v4();
    let transactions = vec![
        paid_for(account_id, TransactionType::Income, 100.0, "2024-01-05"),
        Transaction::new(TransactionType::Expense, "pending", 40.0, "2024-01-06")
            .with_account(account_id),
        paid_for(account_id, TransactionType::Transfer, 500.0, "2024-01-07"),
    ];
    assert_eq!(
        account_cumulative_balance(&transactions, account_id, Month::new(2024, 1)),
        100.0
    );
}

#[test]
fn total_cumulative_balance_sums_listed_accounts() {
    let checking = Account::new("Checking", AccountKind::Checking);
    let savings = Account::new("Savings", AccountKind::Savings);
    let transactions = vec![
        paid_for(checking.id, TransactionType::Income, 400.0, "2024-01-05"),
        paid_for(savings.id, TransactionType::Income, 600.0, "2024-01-06"),
        paid_for(Uuid::new_v4(), TransactionType::Income, 123.0, "2024-01-07"),
    ];
    let accounts = vec![checking, savings];
    assert_eq!(
        total_cumulative_balance(&transactions, &accounts, Month::new(2024, 1)),
        1000.0
    );
}

#[test]
fn total_net_uses_paid_rows_in_the_exact_month() {
    let transactions = vec![
        Transaction::new(TransactionType::Income, "salary", 2000.0, "2024-05-05").paid(),
        Transaction::new(TransactionType::Expense, "rent", 800.0, "2024-05-10").paid(),
        Transaction::new(TransactionType::Income, "bonus", 500.0, "2024-05-15"),
        Transaction::new(TransactionType::Income, "april", 999.0, "2024-04-01").paid(),
    ];
    assert_eq!(total_net_for_month(&transactions, Month::new(2024, 5)), 1200.0);
}

#[test]
fn investments_total_respects_month_cutoff() {
    let investments = vec![
        Investment::new("CDB", 1000.0, "2024-01-15"),
        Investment::new("FII", 500.0, "2024-03-01"),
    ];
    assert_eq!(investments_total_until(&investments, Month::new(2024, 1)), 1000.0);
    assert_eq!(investments_total_until(&investments, Month::new(2024, 2)), 1000.0);
    assert_eq!(investments_total_until(&investments, Month::new(2024, 3)), 1500.0);
}
