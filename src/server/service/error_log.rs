//! Error log recording and notification.
//!
//! Recording allocates the next `ERROR_ID` serial and inserts the log inside one
//! user transaction, so a failed insert never consumes an id. Notification runs
//! after the commit: the mail is sent and the log flagged as notified. A mail
//! failure leaves the committed log with `notified_yn = N`.

use crate::server::{
    data::{error_log::ErrorLogRepository, serial::SerialRepository},
    error::AppError,
    integration::mail::MailService,
    middleware::trace::TraceContext,
    model::{
        error_log::{CreateErrorLogParam, ErrorLog},
        serial::SerialName,
    },
    trans_param::{yes_no::YesNo, TransParamEnum},
    transaction::TransactionHolder,
    util::validate::{validate_code, validate_not_blank},
};

struct ErrorNotifier<'a> {
    mail: &'a dyn MailService,
    recipients: &'a [String],
}

pub struct ErrorLogService<'a> {
    transactions: &'a TransactionHolder,
    notifier: Option<ErrorNotifier<'a>>,
    trace: TraceContext,
}

impl<'a> ErrorLogService<'a> {
    /// Creates a new ErrorLogService instance without notification.
    ///
    /// # Arguments
    /// - `transactions` - Holder of the bootstrapped transaction handles
    ///
    /// # Returns
    /// - `ErrorLogService` - New service instance
    pub fn new(transactions: &'a TransactionHolder) -> Self {
        Self {
            transactions,
            notifier: None,
            trace: TraceContext::disabled(),
        }
    }

    /// Mails every recorded log to `recipients`.
    ///
    /// An empty recipient list disables notification.
    pub fn with_notifier(mut self, mail: &'a dyn MailService, recipients: &'a [String]) -> Self {
        self.notifier = Some(ErrorNotifier { mail, recipients });
        self
    }

    /// Records executed statements into `trace`.
    pub fn traced(mut self, trace: TraceContext) -> Self {
        self.trace = trace;
        self
    }

    /// Records a new error log and notifies the configured recipients.
    ///
    /// # Arguments
    /// - `param` - Error details
    ///
    /// # Returns
    /// - `Ok(ErrorLog)` - The stored log, `notified_yn` is `Y` when a mail was sent
    /// - `Err(AppError::BadRequest)` - Blank error message
    /// - `Err(AppError::TransactionErr)` - Holder not initialized or transaction timed out
    /// - `Err(AppError::DbErr)` - Database error; nothing was stored
    /// - `Err(AppError::TransportErr)` - The log was stored but the mail failed
    pub async fn record(&self, param: CreateErrorLogParam) -> Result<ErrorLog, AppError> {
        validate_not_blank("errorMessage", &param.error_message)?;

        let manager = self.transactions.transaction_manager()?;
        let user_transaction = self.transactions.user_transaction()?;
        let trace = self.trace.clone();

        let mut log = user_transaction
            .execute(&manager, move |txn| {
                Box::pin(async move {
                    let error_id = SerialRepository::new(txn)
                        .traced(trace.clone())
                        .next_code(SerialName::ErrorId)
                        .await?;
                    let log = ErrorLogRepository::new(txn)
                        .traced(trace)
                        .create(error_id, param)
                        .await?;

                    Ok(log)
                })
            })
            .await?;

        tracing::info!(error_id = %log.error_id, "Recorded error log");

        let Some(notifier) = &self.notifier else {
            return Ok(log);
        };
        if notifier.recipients.is_empty() {
            return Ok(log);
        }

        notifier
            .mail
            .send_mail(&subject(&log), &content(&log), notifier.recipients)
            .await?;

        ErrorLogRepository::new(manager.connection())
            .traced(self.trace.clone())
            .mark_notified(&log.error_id)
            .await?;
        log.notified_yn = YesNo::Y.value().to_string();

        Ok(log)
    }

    /// Retrieves an error log by id.
    ///
    /// # Returns
    /// - `Ok(ErrorLog)` - The log
    /// - `Err(AppError::BadRequest)` - Malformed id
    /// - `Err(AppError::NotFound)` - No log with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, error_id: &str) -> Result<ErrorLog, AppError> {
        let error_id = validate_code("errorId", error_id)?;
        let manager = self.transactions.transaction_manager()?;

        ErrorLogRepository::new(manager.connection())
            .traced(self.trace.clone())
            .find_by_id(error_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Error log {} not found", error_id)))
    }
}

fn subject(log: &ErrorLog) -> String {
    format!("[{}] {}", log.error_id, log.error_message)
}

fn content(log: &ErrorLog) -> String {
    let unknown = "-";

    format!(
        "Error ID: {}\nOccurred at: {}\nHost: {}\nClient: {}\nLogin: {}\n\n{}\n\n{}",
        log.error_id,
        log.created_at.to_rfc3339(),
        log.host_ip.as_deref().unwrap_or(unknown),
        log.client_ip.as_deref().unwrap_or(unknown),
        log.login_id.as_deref().unwrap_or(unknown),
        log.error_message,
        log.error_body.as_deref().unwrap_or_default(),
    )
}
