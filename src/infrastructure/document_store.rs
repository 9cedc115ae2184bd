use diesel::prelude::*;
use diesel::sql_types::Text;
use serde_json::Value;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::document::StoredDocument;
use crate::domain::errors::DomainError;
use crate::domain::ports::{DocumentFilter, DocumentStore};
use crate::schema::documents;

use super::models::{DocumentRow, NewDocumentRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Document store over a single PostgreSQL table with a JSONB payload column.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for DieselDocumentStore {
    fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = documents::table
            .filter(documents::collection.eq(collection))
            .select(DocumentRow::as_select())
            .into_boxed();
        if !filter.is_empty() {
            // `data @> filter` is field equality for scalar values.
            query = query.filter(documents::data.contains(Value::Object(filter.clone())));
        }

        let rows: Vec<DocumentRow> = query
            .order(documents::seq.asc())
            .limit(limit)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    fn create_document(
        &self,
        collection: &str,
        data: Value,
    ) -> Result<StoredDocument, DomainError> {
        let mut conn = self.pool.get()?;

        let row: DocumentRow = diesel::insert_into(documents::table)
            .values(&NewDocumentRow {
                id: Uuid::new_v4(),
                collection,
                data,
            })
            .returning(DocumentRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn insert_if_empty(
        &self,
        collection: &str,
        batch: Vec<Value>,
    ) -> Result<usize, DomainError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // Serializes concurrent seeders of the same collection until commit.
            diesel::sql_query("SELECT pg_advisory_xact_lock(hashtext($1))")
                .bind::<Text, _>(collection)
                .execute(conn)?;

            let existing = documents::table
                .filter(documents::collection.eq(collection))
                .select(documents::id)
                .first::<Uuid>(conn)
                .optional()?;
            if existing.is_some() {
                return Ok(0);
            }

            let rows: Vec<NewDocumentRow<'_>> = batch
                .into_iter()
                .map(|data| NewDocumentRow {
                    id: Uuid::new_v4(),
                    collection,
                    data,
                })
                .collect();
            let inserted = diesel::insert_into(documents::table)
                .values(&rows)
                .execute(conn)?;

            Ok(inserted)
        })
    }

    fn collection_names(&self, limit: i64) -> Result<Vec<String>, DomainError> {
        let mut conn = self.pool.get()?;

        let names = documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .limit(limit)
            .load::<String>(&mut conn)?;

        Ok(names)
    }
}
