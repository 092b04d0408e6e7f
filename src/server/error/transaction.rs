use thiserror::Error;

/// Failures of the transaction coordination holder and of user transactions.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// A holder slot was read before bootstrap populated it.
    #[error("{0} has not been initialized")]
    NotInitialized(&'static str),

    /// A holder slot was written a second time.
    #[error("{0} has already been initialized")]
    AlreadyInitialized(&'static str),

    /// The unit of work did not finish within the transaction timeout and was rolled back.
    #[error("Transaction timed out after {0:?}")]
    TimedOut(std::time::Duration),
}
