//! Cozo Datalog DDL compiler.
//!
//! Generates `:create`, `:put` and `:rm` scripts from schema definitions.

use crate::backend::ValueType;
use crate::db::escape_string;
use crate::schema::SchemaRelation;

/// Compiler for generating Cozo Datalog scripts from schema definitions.
pub struct CozoCompiler;

impl CozoCompiler {
    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create users {
    ///     user_id: Int
    ///     =>
    ///     first_name: String,
    ///     year_of_birth: Int?
    /// }
    /// ```
    /// Relations without value fields omit the `=>` separator.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.data_type.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        if relation.value_fields.is_empty() {
            return format!(":create {} {{\n{}\n}}", relation.name, key_fields);
        }

        let value_fields = relation
            .value_fields
            .iter()
            .map(|f| {
                let optional = if f.nullable { "?" } else { "" };
                format!("    {}: {}{}", f.name, f.data_type.cozo_type(), optional)
            })
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    /// Generate Cozo :put statement for batch insert.
    ///
    /// ```cozo
    /// ?[user_id, first_name, ...] <- [[1, "Ann", ...], [2, "Bo", ...]]
    /// :put users { user_id => first_name, ... }
    /// ```
    pub fn compile_insert(relation: &SchemaRelation, rows: &[Vec<ValueType>]) -> String {
        let all_columns = column_list(relation.all_fields().map(|f| f.name));
        let key_columns = column_list(relation.key_fields.iter().map(|f| f.name));
        let row_literals = rows
            .iter()
            .map(|row| Self::row_literal(row))
            .collect::<Vec<_>>()
            .join(", ");

        let spec = if relation.value_fields.is_empty() {
            key_columns
        } else {
            let value_columns = column_list(relation.value_fields.iter().map(|f| f.name));
            format!("{} => {}", key_columns, value_columns)
        };

        format!(
            "?[{}] <- [{}]\n:put {} {{ {} }}",
            all_columns, row_literals, relation.name, spec
        )
    }

    /// Generate Cozo :rm statement removing every row of a relation.
    ///
    /// ```cozo
    /// ?[user1_id, user2_id] := *friends{user1_id, user2_id}
    /// :rm friends { user1_id, user2_id }
    /// ```
    pub fn compile_clear(relation: &SchemaRelation) -> String {
        let key_columns = column_list(relation.key_fields.iter().map(|f| f.name));
        format!(
            "?[{keys}] := *{name}{{{keys}}}\n:rm {name} {{ {keys} }}",
            keys = key_columns,
            name = relation.name
        )
    }

    /// Format one row as a Cozo list literal.
    pub fn row_literal(row: &[ValueType]) -> String {
        let cells = row.iter().map(value_literal).collect::<Vec<_>>().join(", ");
        format!("[{}]", cells)
    }
}

fn column_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn value_literal(value: &ValueType) -> String {
    match value {
        ValueType::Null => "null".to_string(),
        ValueType::Str(s) => format!("\"{}\"", escape_string(s)),
        ValueType::Int(i) => i.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FRIENDS, USERS};

    #[test]
    fn test_compile_users_relation() {
        let ddl = CozoCompiler::compile_relation(&USERS);
        assert!(ddl.starts_with(":create users {"));
        assert!(ddl.contains("    user_id: Int\n    =>\n"));
        assert!(ddl.contains("first_name: String,"));
        assert!(ddl.contains("year_of_birth: Int?"));
        assert!(ddl.contains("gender: String?"));
    }

    #[test]
    fn test_compile_key_only_relation() {
        let ddl = CozoCompiler::compile_relation(&FRIENDS);
        assert_eq!(ddl, ":create friends {\n    user1_id: Int,\n    user2_id: Int\n}");
    }

    #[test]
    fn test_compile_insert_key_only() {
        let rows = vec![vec![ValueType::Int(1), ValueType::Int(2)]];
        let script = CozoCompiler::compile_insert(&FRIENDS, &rows);
        assert_eq!(
            script,
            "?[user1_id, user2_id] <- [[1, 2]]\n:put friends { user1_id, user2_id }"
        );
    }

    #[test]
    fn test_compile_insert_with_values() {
        let rows = vec![vec![
            ValueType::Int(7),
            ValueType::Str("Ann".into()),
            ValueType::Str("O\"Neil".into()),
            ValueType::Null,
            ValueType::Int(3),
            ValueType::Null,
            ValueType::Str("female".into()),
        ]];
        let script = CozoCompiler::compile_insert(&USERS, &rows);
        assert!(script.contains(r#"[[7, "Ann", "O\"Neil", null, 3, null, "female"]]"#));
        assert!(script.ends_with(
            ":put users { user_id => first_name, last_name, year_of_birth, month_of_birth, day_of_birth, gender }"
        ));
    }

    #[test]
    fn test_compile_clear() {
        let script = CozoCompiler::compile_clear(&FRIENDS);
        assert_eq!(
            script,
            "?[user1_id, user2_id] := *friends{user1_id, user2_id}\n:rm friends { user1_id, user2_id }"
        );
    }
}
