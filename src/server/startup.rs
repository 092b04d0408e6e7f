use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    integration::mail::MailConfig,
    middleware::{
        rate_limit::{InProcessRateLimiter, RateLimitPolicy},
        trace::TraceConfig,
    },
    state::AppState,
    trans_param::{
        adm_user_name::AdmUserNameTransformer, engine::TransParamEngine, yes_no::YesNo,
    },
    transaction::{TransactionHolder, TransactionManager, UserTransaction},
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outbound REST calls.
///
/// Redirects are disabled so a gateway cannot bounce requests to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Writes the transaction manager and user transaction into a fresh holder.
///
/// Runs once, before the server accepts requests.
pub fn setup_transactions(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<TransactionHolder, AppError> {
    let holder = TransactionHolder::new();

    holder.set_transaction_manager(TransactionManager::new(db.clone()))?;
    holder.set_user_transaction(UserTransaction::new(config.transaction_timeout))?;

    Ok(holder)
}

/// Registers the shipped field transformers.
pub fn setup_trans_param(db: &DatabaseConnection) -> TransParamEngine {
    TransParamEngine::new()
        .with_enum::<YesNo>(YesNo::NAME)
        .with_service(
            AdmUserNameTransformer::NAME,
            Arc::new(AdmUserNameTransformer::new(db.clone())),
        )
}

/// Assembles the shared application state.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Connected and migrated database
///
/// # Returns
/// - `Ok(AppState)` - State ready to be handed to the router
/// - `Err(AppError)` - HTTP client or transaction setup failed
pub fn build_state(config: &Config, db: DatabaseConnection) -> Result<AppState, AppError> {
    let http_client = setup_reqwest_client()?;
    let transactions = setup_transactions(&db, config)?;
    let trans_param = setup_trans_param(&db);

    let mail = config.mail_api_url.as_ref().map(|api_url| MailConfig {
        api_url: api_url.clone(),
        sender: config.mail_sender.clone(),
        recipients: config.mail_recipients.clone(),
    });
    if mail.is_none() {
        tracing::info!("MAIL_API_URL not set, error notification disabled");
    }

    Ok(AppState {
        db,
        http_client,
        transactions: Arc::new(transactions),
        trans_param: Arc::new(trans_param),
        rate_limiter: Arc::new(InProcessRateLimiter::new()),
        rate_limit_policy: RateLimitPolicy::per_second(config.rate_limit_per_second),
        trace_config: TraceConfig {
            sql_enabled: config.trace_sql_enabled,
            rest_enabled: config.trace_rest_enabled,
        },
        mail,
    })
}
