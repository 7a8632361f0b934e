//! SQL construction for filtered user listings.

use super::UserFilter;
use innkeep_core::PageWindow;

/// Columns selected for every user row.
pub const USER_COLUMNS: &str =
    "id, name, email, phone, password_hash, role, is_active, created_at, updated_at";

/// A positional statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArg {
    Text(String),
    Bool(bool),
    Int(i64),
}

/// SQL text with its `$n` parameters in binding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<QueryArg>,
}

/// Builds the count and page statements for one [`UserFilter`].
///
/// Both statements share the same WHERE clause and the same leading
/// parameters, so the reported total always describes the rows being paged.
/// Predicates are added in a fixed order: role, then active flag, then
/// search.
#[derive(Debug, Clone)]
pub struct UserQueryBuilder {
    where_clause: String,
    args: Vec<QueryArg>,
}

impl UserQueryBuilder {
    #[must_use]
    pub fn new(filter: &UserFilter) -> Self {
        let mut conditions: Vec<String> = Vec::new();
        let mut args = Vec::new();

        if let Some(role) = filter.role {
            args.push(QueryArg::Text(role.as_str().to_string()));
            conditions.push(format!("role = ${}", args.len()));
        }

        if let Some(is_active) = filter.is_active {
            args.push(QueryArg::Bool(is_active));
            conditions.push(format!("is_active = ${}", args.len()));
        }

        if let Some(term) = filter.search_term() {
            args.push(QueryArg::Text(format!("%{}%", escape_like(&term))));
            let n = args.len();
            conditions.push(format!("(LOWER(name) LIKE ${n} OR LOWER(email) LIKE ${n})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        Self { where_clause, args }
    }

    /// `SELECT COUNT(*)` over the filtered set.
    #[must_use]
    pub fn count_statement(&self) -> Statement {
        Statement {
            sql: format!("SELECT COUNT(*) FROM users{}", self.where_clause),
            args: self.args.clone(),
        }
    }

    /// The newest-first page of the filtered set.
    ///
    /// `LIMIT`/`OFFSET` are appended only for a bounded window.
    #[must_use]
    pub fn select_statement(&self, window: PageWindow) -> Statement {
        let mut sql = format!(
            "SELECT {} FROM users{} ORDER BY created_at DESC, id DESC",
            USER_COLUMNS, self.where_clause
        );
        let mut args = self.args.clone();

        if !window.is_unbounded() {
            let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);
            args.push(QueryArg::Int(i64::from(window.limit)));
            args.push(QueryArg::Int(offset));
            sql.push_str(&format!(" LIMIT ${} OFFSET ${}", args.len() - 1, args.len()));
        }

        Statement { sql, args }
    }
}

// Postgres LIKE treats backslash as the default escape character.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::UserRole;

    fn text(s: &str) -> QueryArg {
        QueryArg::Text(s.to_string())
    }

    #[test]
    fn test_no_predicates() {
        let builder = UserQueryBuilder::new(&UserFilter::new());

        let count = builder.count_statement();
        assert_eq!(count.sql, "SELECT COUNT(*) FROM users");
        assert!(count.args.is_empty());

        let select = builder.select_statement(PageWindow::unbounded());
        assert_eq!(
            select.sql,
            format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC")
        );
        assert!(select.args.is_empty());
    }

    #[test]
    fn test_parameter_order_is_role_active_search() {
        let filter = UserFilter::new()
            .with_search("An")
            .with_active(true)
            .with_role(UserRole::Staff);
        let builder = UserQueryBuilder::new(&filter);

        let count = builder.count_statement();
        assert_eq!(
            count.sql,
            "SELECT COUNT(*) FROM users WHERE role = $1 AND is_active = $2 \
             AND (LOWER(name) LIKE $3 OR LOWER(email) LIKE $3)"
        );
        assert_eq!(
            count.args,
            vec![text("staff"), QueryArg::Bool(true), text("%an%")]
        );
    }

    #[test]
    fn test_count_and_select_share_where_clause() {
        let filter = UserFilter::new().with_active(false).with_search("lee");
        let builder = UserQueryBuilder::new(&filter);

        let count = builder.count_statement();
        let select = builder.select_statement(PageWindow::new(3, 20));
        let where_clause = count.sql.trim_start_matches("SELECT COUNT(*) FROM users");

        assert!(select.sql.contains(where_clause));
        assert_eq!(&select.args[..count.args.len()], count.args.as_slice());
    }

    #[test]
    fn test_pagination_binds_after_predicates() {
        let filter = UserFilter::new().with_role(UserRole::Admin);
        let select = UserQueryBuilder::new(&filter).select_statement(PageWindow::new(3, 20));

        assert!(select
            .sql
            .ends_with("WHERE role = $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"));
        assert_eq!(
            select.args,
            vec![text("admin"), QueryArg::Int(20), QueryArg::Int(40)]
        );
    }

    #[test]
    fn test_pagination_follows_all_three_predicates() {
        let filter = UserFilter::new()
            .with_role(UserRole::Staff)
            .with_active(true)
            .with_search("an");
        let select = UserQueryBuilder::new(&filter).select_statement(PageWindow::new(2, 10));

        assert!(select.sql.ends_with(" LIMIT $4 OFFSET $5"));
        assert_eq!(select.args.len(), 5);
        assert_eq!(&select.args[3..], &[QueryArg::Int(10), QueryArg::Int(10)]);
    }

    #[test]
    fn test_limit_zero_appends_no_pagination() {
        let filter = UserFilter::new().with_active(true);
        let select = UserQueryBuilder::new(&filter).select_statement(PageWindow::new(9, 0));

        assert!(!select.sql.contains("LIMIT"));
        assert!(!select.sql.contains("OFFSET"));
        assert_eq!(select.args, vec![QueryArg::Bool(true)]);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let select = UserQueryBuilder::new(&UserFilter::new()).select_statement(PageWindow::new(0, 5));
        assert_eq!(select.args, vec![QueryArg::Int(5), QueryArg::Int(0)]);
    }

    #[test]
    fn test_blank_search_adds_no_clause() {
        let builder = UserQueryBuilder::new(&UserFilter::new().with_search("  "));
        assert_eq!(builder.count_statement().sql, "SELECT COUNT(*) FROM users");
    }

    #[test]
    fn test_like_wildcards_are_escaped() {
        let builder = UserQueryBuilder::new(&UserFilter::new().with_search("50%_off"));
        assert_eq!(builder.count_statement().args, vec![text("%50\\%\\_off%")]);
    }
}
