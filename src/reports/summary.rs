//! Income, expense and balance totals

use crate::models::{Money, Transaction, TransactionKind};

/// Running totals over a transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expense: Money,
    /// income minus expense (may be negative)
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a transaction list
    ///
    /// Empty input yields all-zero totals.
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn txn(kind: TransactionKind, cents: i64, year: i32, month: u32, day: u32) -> Transaction {
        Transaction::new(
            "test",
            kind,
            Money::from_cents(cents),
            Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_is_all_zero() {
        let totals = Totals::compute(&[]);
        assert_eq!(totals.income, Money::zero());
        assert_eq!(totals.expense, Money::zero());
        assert_eq!(totals.balance, Money::zero());
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let transactions = vec![
            txn(TransactionKind::Income, 100000, 2025, 1, 10),
            txn(TransactionKind::Expense, 30000, 2025, 1, 20),
            txn(TransactionKind::Income, 50000, 2025, 2, 5),
            txn(TransactionKind::Expense, 70000, 2025, 3, 1),
        ];

        let totals = Totals::compute(&transactions);
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let transactions = vec![
            txn(TransactionKind::Income, 10000, 2025, 1, 10),
            txn(TransactionKind::Expense, 25000, 2025, 1, 20),
        ];

        let totals = Totals::compute(&transactions);
        assert_eq!(totals.balance.cents(), -15000);
        assert!(totals.balance.is_negative());
    }

    #[test]
    fn test_known_scenario() {
        let transactions = vec![
            txn(TransactionKind::Income, 100000, 2025, 1, 10),
            txn(TransactionKind::Expense, 30000, 2025, 1, 20),
            txn(TransactionKind::Income, 50000, 2025, 2, 5),
        ];

        let totals = Totals::compute(&transactions);
        assert_eq!(totals.income.cents(), 150000);
        assert_eq!(totals.expense.cents(), 30000);
        assert_eq!(totals.balance.cents(), 120000);
    }
}
