//! Transaction history cache
//!
//! History lives in memory only. The list is mutated by prepending a new
//! record or by replacing it wholesale; entries are never deduplicated.

use crate::domain::entities::Transaction;

/// Transaction repository trait
pub trait TransactionRepository: Send {
    /// Insert at the front (newest first)
    fn prepend(&mut self, transaction: Transaction);

    /// Replace the whole list
    fn replace_all(&mut self, transactions: Vec<Transaction>);

    fn list(&self) -> &[Transaction];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryTransactionRepository {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn prepend(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    fn list(&self) -> &[Transaction] {
        &self.transactions
    }
}
