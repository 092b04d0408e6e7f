//! Generic CRUD repository for code-keyed entities.
//!
//! `BaseRepository` implements the CRUD operations once for every entity that
//! implements [`CodeEntity`]. Entity-specific repositories wrap it and add their
//! own lookups. The repository is generic over the connection so the same code
//! runs against the pool or inside a `DatabaseTransaction`.
//!
//! When the request's [`TraceContext`] has SQL tracing enabled, every executed
//! statement is recorded together with its result.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
    Statement, Value,
};
use serde::Serialize;

use crate::server::middleware::trace::{sql_tracer, TraceContext};

/// Entity identified by a unique, immutable string code.
pub trait CodeEntity: EntityTrait {
    /// Column holding the business code.
    fn code_column() -> Self::Column;

    /// Business code of a row.
    fn code_of(model: &Self::Model) -> &str;
}

/// Entity carrying a secondary, non-unique name attribute.
pub trait NameEntity: CodeEntity {
    fn name_column() -> Self::Column;
}

/// Reusable CRUD operations keyed by business code.
pub struct BaseRepository<'a, E, C = DatabaseConnection> {
    db: &'a C,
    trace: TraceContext,
    _entity: PhantomData<E>,
}

impl<'a, E, C> BaseRepository<'a, E, C>
where
    E: CodeEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: Send,
    C: ConnectionTrait,
{
    /// Creates a new BaseRepository instance without SQL tracing.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `BaseRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            trace: TraceContext::disabled(),
            _entity: PhantomData,
        }
    }

    /// Records executed statements into `trace`.
    pub fn traced(mut self, trace: TraceContext) -> Self {
        self.trace = trace;
        self
    }

    /// Finds the row with the given code.
    ///
    /// # Arguments
    /// - `code` - Business code to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Row found
    /// - `Ok(None)` - No row with that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, code: &str) -> Result<Option<E::Model>, DbErr> {
        let query = E::find().filter(E::code_column().eq(code));
        let statement = self.statement(&query);

        let model = query.one(self.db).await?;

        self.record(statement, &model);
        Ok(model)
    }

    /// Finds every row whose code is in `codes`, ordered by code.
    pub async fn find_all_by_id(&self, codes: &[String]) -> Result<Vec<E::Model>, DbErr> {
        let query = E::find()
            .filter(E::code_column().is_in(codes.iter().cloned()))
            .order_by_asc(E::code_column());
        let statement = self.statement(&query);

        let models = query.all(self.db).await?;

        self.record(statement, &models);
        Ok(models)
    }

    /// Checks whether a row with the given code exists.
    pub async fn exist_by_id(&self, code: &str) -> Result<bool, DbErr> {
        let query = E::find().filter(E::code_column().eq(code));
        let statement = self.statement(&query);

        let count = query.count(self.db).await?;

        self.record(statement, count);
        Ok(count > 0)
    }

    /// Returns every row ordered by code.
    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let query = E::find().order_by_asc(E::code_column());
        let statement = self.statement(&query);

        let models = query.all(self.db).await?;

        self.record(statement, &models);
        Ok(models)
    }

    /// Returns one page of rows ordered by code.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of rows per page
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - Rows of the page and total row count
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_page(&self, page: u64, per_page: u64) -> Result<(Vec<E::Model>, u64), DbErr> {
        let query = E::find().order_by_asc(E::code_column());
        let statement = self.statement(&query);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page).await?;

        self.record(statement, &models);
        Ok((models, total))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        let query = E::find();
        let statement = self.statement(&query);

        let count = query.count(self.db).await?;

        self.record(statement, count);
        Ok(count)
    }

    /// Inserts a new row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a duplicate code
    pub async fn insert(&self, model: E::Model) -> Result<E::Model, DbErr> {
        let query = E::insert(model.into_active_model().reset_all());
        let statement = self.statement(&query);

        let inserted = query.exec_with_returning(self.db).await?;

        self.record(statement, &inserted);
        Ok(inserted)
    }

    /// Overwrites the row sharing the model's code.
    ///
    /// Updating a code that does not exist is a no-op.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the code is absent
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, model: E::Model) -> Result<u64, DbErr> {
        let code = E::code_of(&model).to_string();
        let query = E::update_many()
            .set(model.into_active_model().reset_all())
            .filter(E::code_column().eq(code));
        let statement = self.statement(&query);

        let rows_affected = query.exec(self.db).await?.rows_affected;

        self.record(statement, rows_affected);
        Ok(rows_affected)
    }

    /// Creates or replaces the row keyed by the model's code.
    ///
    /// Runs as a single upsert so repeated calls with the same model converge on
    /// one row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn save(&self, model: E::Model) -> Result<E::Model, DbErr> {
        let code_column = E::code_column();
        let update_columns: Vec<E::Column> = E::Column::iter()
            .filter(|column| column.as_str() != code_column.as_str())
            .collect();

        let mut on_conflict = OnConflict::column(code_column);
        if update_columns.is_empty() {
            // Nothing to overwrite; touch the key so the row is still returned.
            on_conflict.update_column(code_column);
        } else {
            on_conflict.update_columns(update_columns);
        }

        let query = E::insert(model.into_active_model().reset_all())
            .on_conflict(on_conflict.to_owned());
        let statement = self.statement(&query);

        let saved = query.exec_with_returning(self.db).await?;

        self.record(statement, &saved);
        Ok(saved)
    }

    /// Deletes the row with the given code.
    ///
    /// Deleting a code that does not exist is a no-op.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the code is absent
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_id(&self, code: &str) -> Result<u64, DbErr> {
        let query = E::delete_many().filter(E::code_column().eq(code));
        let statement = self.statement(&query);

        let rows_affected = query.exec(self.db).await?.rows_affected;

        self.record(statement, rows_affected);
        Ok(rows_affected)
    }

    /// Sets one column on the row with the given code.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the code is absent
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_column(
        &self,
        code: &str,
        column: E::Column,
        value: Value,
    ) -> Result<u64, DbErr> {
        let query = E::update_many()
            .col_expr(column, Expr::value(value))
            .filter(E::code_column().eq(code));
        let statement = self.statement(&query);

        let rows_affected = query.exec(self.db).await?.rows_affected;

        self.record(statement, rows_affected);
        Ok(rows_affected)
    }

    pub(super) fn statement<Q: QueryTrait>(&self, query: &Q) -> Option<Statement> {
        self.trace
            .sql_enabled()
            .then(|| query.build(self.db.get_database_backend()))
    }

    pub(super) fn record(&self, statement: Option<Statement>, data: impl Serialize) {
        if let Some(statement) = statement {
            let data = serde_json::to_value(data).unwrap_or_default();
            self.trace.record_sql(sql_tracer(statement, data));
        }
    }
}

impl<'a, E, C> BaseRepository<'a, E, C>
where
    E: NameEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: Send,
    C: ConnectionTrait,
{
    /// Finds every row whose name equals `name`, ordered by code.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching rows, empty when none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<E::Model>, DbErr> {
        let query = E::find()
            .filter(E::name_column().eq(name))
            .order_by_asc(E::code_column());
        let statement = self.statement(&query);

        let models = query.all(self.db).await?;

        self.record(statement, &models);
        Ok(models)
    }
}
