use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{cell_i64, cell_string, run_script, ColumnIndex, DbError};

/// Extremes over the distinct first names in the network
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FirstNameInfo {
    pub longest_names: Vec<String>,
    pub shortest_names: Vec<String>,
    pub most_common_names: Vec<String>,
    /// Users holding each of the most common names
    pub most_common_count: i64,
}

const NAME_COUNTS: Script<'static> = Script {
    cozo: r#"
        name_counts[first_name, count(user_id)] := *users{user_id, first_name}

        ?[first_name, name_count] := name_counts[first_name, name_count]

        :order first_name
    "#,
    postgres: r#"
        SELECT first_name, COUNT(*) AS name_count
        FROM users
        GROUP BY first_name
        ORDER BY first_name
    "#,
};

/// Longest, shortest and most common first names.
///
/// Length counts characters, not bytes. Every list is alphabetical.
pub fn find_first_name_info(db: &dyn Database) -> Result<FirstNameInfo, DbError> {
    let result = run_script(db, &NAME_COUNTS, QueryParams::new())?;
    let columns = ColumnIndex::from_headers(result.headers());
    let name_idx = columns.index("first_name")?;
    let count_idx = columns.index("name_count")?;

    let mut names: Vec<(String, i64)> = result
        .rows()
        .iter()
        .map(|row| (cell_string(row.as_ref(), name_idx), cell_i64(row.as_ref(), count_idx)))
        .collect();
    names.sort();

    Ok(summarize(&names))
}

fn summarize(names: &[(String, i64)]) -> FirstNameInfo {
    let lengths = names.iter().map(|(name, _)| name.chars().count());
    let (Some(max_len), Some(min_len)) = (lengths.clone().max(), lengths.min()) else {
        return FirstNameInfo::default();
    };
    let most_common_count = names.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let pick = |keep: &dyn Fn(&(String, i64)) -> bool| -> Vec<String> {
        names
            .iter()
            .filter(|entry| keep(entry))
            .map(|(name, _)| name.clone())
            .collect()
    };

    FirstNameInfo {
        longest_names: pick(&|(name, _)| name.chars().count() == max_len),
        shortest_names: pick(&|(name, _)| name.chars().count() == min_len),
        most_common_names: pick(&|(_, count)| *count == most_common_count),
        most_common_count,
    }
}
