//! Company repository: list, count, lookup by id, and recently added.

use dcc_core::entities::{Company, CompanySummary, RecentCompany};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_opt_year, get_string_list, parse_datetime};
use crate::service::DccService;

const SELECT_COLS: &str = "id, name, logo_url, company_type, category, employee_size, \
     headquarters_address, founded_year, operating_countries, website_url, description, \
     created_at, updated_at";

const SUMMARY_COLS: &str = "id, name, logo_url, company_type, category, employee_size, \
     headquarters_address, operating_countries";

const RECENT_COLS: &str = "id, name, logo_url, company_type, category, created_at";

fn row_to_company(row: &libsql::Row) -> Result<Company, DatabaseError> {
    Ok(Company {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        logo_url: get_opt_string(row, 2)?,
        company_type: get_opt_string(row, 3)?,
        category: get_opt_string(row, 4)?,
        employee_size: get_opt_string(row, 5)?,
        headquarters_address: get_opt_string(row, 6)?,
        founded_year: get_opt_year(row, 7)?,
        operating_countries: get_string_list(row, 8)?,
        website_url: get_opt_string(row, 9)?,
        description: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn row_to_summary(row: &libsql::Row) -> Result<CompanySummary, DatabaseError> {
    Ok(CompanySummary {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        logo_url: get_opt_string(row, 2)?,
        company_type: get_opt_string(row, 3)?,
        category: get_opt_string(row, 4)?,
        employee_size: get_opt_string(row, 5)?,
        headquarters_address: get_opt_string(row, 6)?,
        operating_countries: get_string_list(row, 7)?,
    })
}

fn row_to_recent(row: &libsql::Row) -> Result<RecentCompany, DatabaseError> {
    Ok(RecentCompany {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        logo_url: get_opt_string(row, 2)?,
        company_type: get_opt_string(row, 3)?,
        category: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl DccService {
    /// All companies with the list columns, ordered by name.
    pub async fn list_company_summaries(&self) -> Result<Vec<CompanySummary>, DatabaseError> {
        let conn = self.db().conn();
        let sql = format!("SELECT {SUMMARY_COLS} FROM companies ORDER BY name");
        let sql = sql.as_str();
        let companies = self
            .read("list companies", || async move {
                let mut rows = conn.query(sql, ()).await?;
                let mut results = Vec::new();
                while let Some(row) = rows.next().await? {
                    results.push(row_to_summary(&row)?);
                }
                Ok(results)
            })
            .await?;
        tracing::debug!(rows = companies.len(), "fetched company list");
        Ok(companies)
    }

    /// Count-only query over `companies`.
    pub async fn count_companies(&self) -> Result<u64, DatabaseError> {
        let conn = self.db().conn();
        self.read("count companies", || async move {
            let mut rows = conn.query("SELECT COUNT(*) FROM companies", ()).await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            let count = row.get::<i64>(0)?;
            u64::try_from(count)
                .map_err(|e| DatabaseError::InvalidState(format!("negative count {count}: {e}")))
        })
        .await
    }

    /// Full company row by id. `Ok(None)` when no company has that id.
    pub async fn get_company(&self, id: &str) -> Result<Option<Company>, DatabaseError> {
        let conn = self.db().conn();
        let sql = format!("SELECT {SELECT_COLS} FROM companies WHERE id = ?1");
        let sql = sql.as_str();
        self.read("get company", || async move {
            let mut rows = conn.query(sql, [id]).await?;
            match rows.next().await? {
                Some(row) => Ok(Some(row_to_company(&row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    /// Most recently created companies first.
    pub async fn list_recent_companies(
        &self,
        limit: u32,
    ) -> Result<Vec<RecentCompany>, DatabaseError> {
        let conn = self.db().conn();
        let sql = format!(
            "SELECT {RECENT_COLS} FROM companies ORDER BY created_at DESC, rowid DESC LIMIT ?1"
        );
        let sql = sql.as_str();
        self.read("list recent companies", || async move {
            let mut rows = conn.query(sql, [i64::from(limit)]).await?;
            let mut results = Vec::new();
            while let Some(row) = rows.next().await? {
                results.push(row_to_recent(&row)?);
            }
            Ok(results)
        })
        .await
    }
}
