use crate::domain::model::GdpRecord;
use crate::utils::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;

/// Single-connection handle on the GDP database file.
pub struct GdpDatabase {
    conn: Connection,
}

impl GdpDatabase {
    /// Opens (creating if absent) the database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!("Opened database {}", path.as_ref().display());
        Ok(Self { conn })
    }

    /// Drops and recreates `table`, then inserts every row in one transaction.
    /// The table has no primary key and no indexes.
    pub fn replace_table(&mut self, table: &str, rows: &[GdpRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS \"{table}\";
             CREATE TABLE \"{table}\" (\"Country\" TEXT, \"GDP_USD_billions\" REAL);"
        ))?;

        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO \"{table}\" (\"Country\", \"GDP_USD_billions\") VALUES (?1, ?2)"
            ))?;
            for row in rows {
                stmt.execute(params![row.country, row.gdp_usd_billions])?;
            }
        }

        tx.commit()?;
        Ok(rows.len())
    }

    pub fn query_gdp(&self, sql: &str) -> Result<Vec<GdpRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(GdpRecord {
                country: row.get("Country")?,
                gdp_usd_billions: row.get("GDP_USD_billions")?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
