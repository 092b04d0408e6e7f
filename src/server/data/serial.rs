//! Serial counter repository.
//!
//! A counter is allocated with a single upsert that creates the row at 1 or
//! increments it, so concurrent callers never see the same value. Running the
//! allocation inside a transaction makes it gap-free: a rollback releases the
//! value.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::{
    data::base::{BaseRepository, CodeEntity},
    middleware::trace::TraceContext,
    model::serial::SerialName,
};

impl CodeEntity for entity::serial_no::Entity {
    fn code_column() -> Self::Column {
        entity::serial_no::Column::SerialName
    }

    fn code_of(model: &Self::Model) -> &str {
        &model.serial_name
    }
}

pub struct SerialRepository<'a, C = DatabaseConnection> {
    db: &'a C,
    base: BaseRepository<'a, entity::serial_no::Entity, C>,
}

impl<'a, C: ConnectionTrait> SerialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            base: BaseRepository::new(db),
        }
    }

    /// Records executed statements into `trace`.
    pub fn traced(self, trace: TraceContext) -> Self {
        Self {
            db: self.db,
            base: self.base.traced(trace),
        }
    }

    /// Increments the named counter and returns its new value.
    ///
    /// A counter that does not exist yet starts at 1.
    pub async fn next_value(&self, name: SerialName) -> Result<i64, DbErr> {
        use entity::serial_no::{ActiveModel, Column, Entity};

        let query = Entity::insert(ActiveModel {
            serial_name: ActiveValue::Set(name.as_str().to_string()),
            current_value: ActiveValue::Set(1),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::SerialName)
                .value(
                    Column::CurrentValue,
                    Expr::col((Entity, Column::CurrentValue)).add(1),
                )
                .update_column(Column::UpdatedAt)
                .to_owned(),
        );
        let statement = self.base.statement(&query);

        let counter = query.exec_with_returning(self.db).await?;

        self.base.record(statement, &counter);
        Ok(counter.current_value)
    }

    /// Allocates the next business code for `name`, e.g. `E0000000001`.
    pub async fn next_code(&self, name: SerialName) -> Result<String, DbErr> {
        let value = self.next_value(name).await?;

        Ok(name.format(value))
    }
}
