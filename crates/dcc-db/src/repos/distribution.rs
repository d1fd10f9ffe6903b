//! Single-column projections feeding the aggregator.
//!
//! The dashboard and analytics views never need whole rows; they pull one
//! column across a table and bucket it in memory.

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_string_list};
use crate::service::DccService;

/// A nullable text attribute that can be bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarColumn {
    CompanyType,
    Category,
    RemotePolicy,
    WorkEnvironment,
}

impl ScalarColumn {
    /// `(table, column)` holding this attribute.
    #[must_use]
    pub const fn source(self) -> (&'static str, &'static str) {
        match self {
            Self::CompanyType => ("companies", "company_type"),
            Self::Category => ("companies", "category"),
            Self::RemotePolicy => ("company_culture", "remote_policy"),
            Self::WorkEnvironment => ("company_culture", "work_environment"),
        }
    }
}

/// A JSON string array attribute whose elements are bucketed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListColumn {
    TechStack,
}

impl ListColumn {
    #[must_use]
    pub const fn source(self) -> (&'static str, &'static str) {
        match self {
            Self::TechStack => ("company_technologies", "tech_stack"),
        }
    }
}

impl DccService {
    /// Every value of a scalar column, one entry per row, in rowid order.
    pub async fn select_scalar_column(
        &self,
        column: ScalarColumn,
    ) -> Result<Vec<Option<String>>, DatabaseError> {
        let (table, col) = column.source();
        let conn = self.db().conn();
        let sql = format!("SELECT {col} FROM {table} ORDER BY rowid");
        let sql = sql.as_str();
        let what = format!("select {table}.{col}");
        self.read(&what, || async move {
            let mut rows = conn.query(sql, ()).await?;
            let mut values = Vec::new();
            while let Some(row) = rows.next().await? {
                values.push(get_opt_string(&row, 0)?);
            }
            Ok(values)
        })
        .await
    }

    /// Every value of a list column, one entry per row, in rowid order.
    pub async fn select_list_column(
        &self,
        column: ListColumn,
    ) -> Result<Vec<Option<Vec<String>>>, DatabaseError> {
        let (table, col) = column.source();
        let conn = self.db().conn();
        let sql = format!("SELECT {col} FROM {table} ORDER BY rowid");
        let sql = sql.as_str();
        let what = format!("select {table}.{col}");
        self.read(&what, || async move {
            let mut rows = conn.query(sql, ()).await?;
            let mut values = Vec::new();
            while let Some(row) = rows.next().await? {
                values.push(get_string_list(&row, 0)?);
            }
            Ok(values)
        })
        .await
    }
}
