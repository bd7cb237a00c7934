//! Scoped storage session.
//!
//! A `Session` wraps one database transaction. It is opened right before the
//! work it guards and either committed explicitly or, when dropped on any other
//! path (early `?` return, panic), rolled back by SeaORM.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::trace;

use crate::errors::ServiceError;

pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, ServiceError> {
        let txn = db.begin().await?;
        trace!("session opened");
        Ok(Self { txn })
    }

    /// Connection to run statements on inside this session.
    pub fn conn(&self) -> &DatabaseTransaction { &self.txn }

    pub async fn commit(self) -> Result<(), ServiceError> {
        self.txn.commit().await?;
        trace!("session committed");
        Ok(())
    }
}
