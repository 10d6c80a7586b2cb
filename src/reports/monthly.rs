//! Month-bucketed income/expense series for the trend chart
//!
//! Buckets keep the order in which their month was first seen in the
//! list, not calendar order, so the chart mirrors the order the data
//! was recorded in.

use std::collections::HashMap;

use crate::models::{Money, MonthKey, Transaction, TransactionKind};

/// Chart-ready series: one income and one expense value per label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySeries {
    /// Month labels in first-occurrence order
    pub labels: Vec<MonthKey>,
    /// Income total per label, index-aligned with `labels`
    pub income: Vec<Money>,
    /// Expense total per label, index-aligned with `labels`
    pub expense: Vec<Money>,
}

impl MonthlySeries {
    /// Compute the monthly series over a transaction list
    ///
    /// A month with no transactions of one kind contributes a zero for
    /// that slot, keeping the value vectors the same length as the
    /// labels. Empty input yields no labels but single zero-valued
    /// points, so the output always stays renderable as a chart.
    pub fn compute(transactions: &[Transaction]) -> Self {
        if transactions.is_empty() {
            return Self {
                labels: Vec::new(),
                income: vec![Money::zero()],
                expense: vec![Money::zero()],
            };
        }

        let mut labels: Vec<MonthKey> = Vec::new();
        let mut buckets: HashMap<MonthKey, (Money, Money)> = HashMap::new();

        for txn in transactions {
            let key = txn.month();
            let entry = buckets.entry(key).or_insert_with(|| {
                labels.push(key);
                (Money::zero(), Money::zero())
            });
            match txn.kind {
                TransactionKind::Income => entry.0 += txn.amount,
                TransactionKind::Expense => entry.1 += txn.amount,
            }
        }

        let mut income = Vec::with_capacity(labels.len());
        let mut expense = Vec::with_capacity(labels.len());
        for key in &labels {
            let (inc, exp) = buckets[key];
            income.push(inc);
            expense.push(exp);
        }

        Self {
            labels,
            income,
            expense,
        }
    }

    /// Number of month buckets
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether any month bucket exists
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
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
    fn test_empty_input_stays_renderable() {
        let series = MonthlySeries::compute(&[]);
        assert!(series.labels.is_empty());
        assert_eq!(series.income, vec![Money::zero()]);
        assert_eq!(series.expense, vec![Money::zero()]);
    }

    #[test]
    fn test_vectors_stay_aligned() {
        let transactions = vec![
            txn(TransactionKind::Income, 100, 2025, 3, 1),
            txn(TransactionKind::Expense, 200, 2025, 1, 1),
            txn(TransactionKind::Income, 300, 2025, 2, 1),
            txn(TransactionKind::Expense, 400, 2025, 3, 15),
        ];

        let series = MonthlySeries::compute(&transactions);
        assert_eq!(series.labels.len(), series.income.len());
        assert_eq!(series.labels.len(), series.expense.len());
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_labels_keep_first_occurrence_order() {
        let transactions = vec![
            txn(TransactionKind::Expense, 100, 2025, 3, 1),
            txn(TransactionKind::Income, 200, 2025, 1, 1),
            txn(TransactionKind::Expense, 300, 2025, 3, 20),
        ];

        let series = MonthlySeries::compute(&transactions);
        let labels: Vec<String> = series.labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["MAR 2025", "JAN 2025"]);
    }

    #[test]
    fn test_missing_kind_yields_zero_slot() {
        let transactions = vec![txn(TransactionKind::Income, 1000, 2025, 5, 10)];

        let series = MonthlySeries::compute(&transactions);
        assert_eq!(series.income, vec![Money::from_cents(1000)]);
        assert_eq!(series.expense, vec![Money::zero()]);
    }

    #[test]
    fn test_same_month_different_year_buckets_separately() {
        let transactions = vec![
            txn(TransactionKind::Income, 100, 2024, 1, 10),
            txn(TransactionKind::Income, 200, 2025, 1, 10),
        ];

        let series = MonthlySeries::compute(&transactions);
        let labels: Vec<String> = series.labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["JAN 2024", "JAN 2025"]);
        assert_eq!(series.income[0].cents(), 100);
        assert_eq!(series.income[1].cents(), 200);
    }

    #[test]
    fn test_known_scenario() {
        let transactions = vec![
            txn(TransactionKind::Income, 100000, 2025, 1, 10),
            txn(TransactionKind::Expense, 30000, 2025, 1, 20),
            txn(TransactionKind::Income, 50000, 2025, 2, 5),
        ];

        let series = MonthlySeries::compute(&transactions);
        let labels: Vec<String> = series.labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["JAN 2025", "FEV 2025"]);
        assert_eq!(
            series.income,
            vec![Money::from_cents(100000), Money::from_cents(50000)]
        );
        assert_eq!(
            series.expense,
            vec![Money::from_cents(30000), Money::zero()]
        );
    }
}
