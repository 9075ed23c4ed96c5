//! Repository methods on `KeynoteService`, one module per table family.
//!
//! Repos return `Result<_, DatabaseError>`; sentinel conversion happens in
//! [`crate::gateway`].

pub mod account;
pub mod project;
pub mod qualification;
pub mod speaker;
pub mod stats;
pub mod testimonial;
pub mod wishlist;

/// Accumulates `col = ?N` assignments for a dynamic `UPDATE`.
#[derive(Default)]
pub(crate) struct Assignments {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl Assignments {
    pub(crate) fn set(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish as `UPDATE {table} SET ... WHERE {where_sql}`; `where_params`
    /// are numbered after the assignments.
    pub(crate) fn into_statement(
        mut self,
        table: &str,
        where_sql: impl Fn(usize) -> String,
        where_params: Vec<libsql::Value>,
    ) -> (String, Vec<libsql::Value>) {
        let next = self.params.len() + 1;
        let sql = format!(
            "UPDATE {table} SET {} WHERE {}",
            self.sets.join(", "),
            where_sql(next)
        );
        self.params.extend(where_params);
        (sql, self.params)
    }
}
