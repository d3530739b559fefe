use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ColumnType, Condition, DatabaseBackend,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};

use crate::traits::CrudModel;

// Basic safety limits
const MAX_SEARCH_VALUE_LENGTH: usize = 10_000;

// Same quoting in every dialect, unlike a backslash
const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so user input matches literally.
/// Escapes: ! (the escape char itself), % (match any) and _ (match single char)
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace(LIKE_ESCAPE, "!!")
        .replace('%', "!%")
        .replace('_', "!_")
}

/// Type name used to compare a column by its string representation.
fn text_type(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::MySql => "CHAR",
        _ => "TEXT",
    }
}

fn is_numeric(column_type: &ColumnType) -> bool {
    matches!(
        column_type,
        ColumnType::TinyInteger
            | ColumnType::SmallInteger
            | ColumnType::Integer
            | ColumnType::BigInteger
            | ColumnType::TinyUnsigned
            | ColumnType::SmallUnsigned
            | ColumnType::Unsigned
            | ColumnType::BigUnsigned
            | ColumnType::Float
            | ColumnType::Double
            | ColumnType::Decimal(_)
            | ColumnType::Money(_)
    )
}

/// `column = n` on numeric columns, `CAST(column AS TEXT) = 'n'` elsewhere.
///
/// Binding an integer against a text column is only accepted by SQLite and
/// MySQL, so other columns are compared by their string representation.
#[must_use]
pub fn build_equality_condition<C: ColumnTrait>(
    column: C,
    number: i64,
    backend: DatabaseBackend,
) -> SimpleExpr {
    if is_numeric(column.def().get_column_type()) {
        column.eq(number)
    } else {
        let as_text = Expr::col(column).cast_as(Alias::new(text_type(backend)));
        Expr::expr(as_text).eq(number.to_string())
    }
}

/// `UPPER(CAST(column AS TEXT)) LIKE '%VALUE%' ESCAPE '!'`
#[must_use]
pub fn build_like_condition<C: ColumnTrait>(
    column: C,
    value: &str,
    backend: DatabaseBackend,
) -> SimpleExpr {
    let as_text = Expr::col(column).cast_as(Alias::new(text_type(backend)));
    let pattern = format!("%{}%", escape_like_wildcards(value).to_uppercase());

    Expr::expr(Func::upper(as_text)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Filter for a single searchable field.
///
/// The shape of the value decides the filter, not the column type: anything
/// that parses as an integer becomes an equality match (see
/// [`build_equality_condition`]), everything else a case-insensitive
/// "contains" match. Blank values produce no filter.
#[must_use]
pub fn search_expr<C: ColumnTrait>(
    column: C,
    value: &str,
    backend: DatabaseBackend,
) -> Option<SimpleExpr> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_SEARCH_VALUE_LENGTH {
        return None;
    }

    if let Ok(number) = trimmed.parse::<i64>() {
        return Some(build_equality_condition(column, number, backend));
    }

    Some(build_like_condition(column, trimmed, backend))
}

/// AND together one filter per searchable field present in the query string.
#[must_use]
pub fn build_search_condition<M: CrudModel>(
    params: &HashMap<String, String>,
    backend: DatabaseBackend,
) -> Condition {
    M::searchable_fields()
        .into_iter()
        .filter_map(|(name, column)| {
            params
                .get(name)
                .and_then(|value| search_expr(column, value, backend))
        })
        .fold(Condition::all(), |condition, expr| condition.add(expr))
}
