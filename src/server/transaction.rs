//! Transaction coordination.
//!
//! The [`TransactionHolder`] carries one [`TransactionManager`] and one
//! [`UserTransaction`]. Both are written exactly once while the server boots and
//! are read lock-free afterwards by any component that needs to group several
//! writes into one atomic unit. The holder is shared through `AppState` rather
//! than a global.

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, OnceLock},
    time::Duration,
};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::error::{transaction::TransactionError, AppError};

/// Future returned by a unit of work, borrowing the open transaction.
pub type TransactionFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Begins transactions on the application database.
pub struct TransactionManager {
    db: DatabaseConnection,
}

impl TransactionManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    /// Connection used outside of any transaction.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Runs units of work atomically, bounded by a timeout.
pub struct UserTransaction {
    timeout: Duration,
}

impl UserTransaction {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Executes `work` inside a new transaction.
    ///
    /// Commits when `work` succeeds. Rolls back and returns its error when it fails,
    /// and rolls back with `TransactionError::TimedOut` when it does not complete
    /// within the configured timeout.
    ///
    /// # Arguments
    /// - `manager` - Transaction manager providing the connection
    /// - `work` - Closure receiving the open transaction
    ///
    /// # Returns
    /// - `Ok(T)` - Value produced by `work`, after a successful commit
    /// - `Err(AppError)` - Error from `work`, the timeout, begin or commit
    pub async fn execute<T, F>(&self, manager: &TransactionManager, work: F) -> Result<T, AppError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> TransactionFuture<'c, T> + Send,
    {
        let txn = manager.begin().await?;

        let outcome = tokio::time::timeout(self.timeout, work(&txn)).await;

        match outcome {
            Ok(Ok(value)) => {
                txn.commit().await?;
                Ok(value)
            }
            Ok(Err(err)) => {
                rollback(txn).await;
                Err(err)
            }
            Err(_) => {
                rollback(txn).await;
                Err(TransactionError::TimedOut(self.timeout).into())
            }
        }
    }
}

async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        tracing::error!("Failed to roll back transaction: {}", err);
    }
}

/// Bootstrap-time holder of the shared transaction handles.
#[derive(Default)]
pub struct TransactionHolder {
    transaction_manager: OnceLock<Arc<TransactionManager>>,
    user_transaction: OnceLock<Arc<UserTransaction>>,
}

impl TransactionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the transaction manager; fails if one was already stored.
    pub fn set_transaction_manager(
        &self,
        manager: TransactionManager,
    ) -> Result<(), TransactionError> {
        self.transaction_manager
            .set(Arc::new(manager))
            .map_err(|_| TransactionError::AlreadyInitialized("transaction manager"))
    }

    /// Stores the user transaction; fails if one was already stored.
    pub fn set_user_transaction(&self, user_transaction: UserTransaction) -> Result<(), TransactionError> {
        self.user_transaction
            .set(Arc::new(user_transaction))
            .map_err(|_| TransactionError::AlreadyInitialized("user transaction"))
    }

    pub fn transaction_manager(&self) -> Result<Arc<TransactionManager>, TransactionError> {
        self.transaction_manager
            .get()
            .cloned()
            .ok_or(TransactionError::NotInitialized("transaction manager"))
    }

    pub fn user_transaction(&self) -> Result<Arc<UserTransaction>, TransactionError> {
        self.user_transaction
            .get()
            .cloned()
            .ok_or(TransactionError::NotInitialized("user transaction"))
    }
}
