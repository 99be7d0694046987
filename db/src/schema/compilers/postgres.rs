//! PostgreSQL DDL compiler.

use crate::backend::ValueType;
use crate::db::escape_sql_string;
use crate::schema::SchemaRelation;

/// Compiler for generating PostgreSQL statements from schema definitions.
pub struct PostgresCompiler;

impl PostgresCompiler {
    /// Generate `CREATE TABLE` for a relation, with the key fields as primary key.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let columns = relation
            .all_fields()
            .map(|f| {
                let null = if f.nullable { "" } else { " NOT NULL" };
                format!("    {} {}{}", f.name, f.data_type.postgres_type(), null)
            })
            .collect::<Vec<_>>()
            .join(",\n");
        let keys = relation
            .key_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "CREATE TABLE {} (\n{},\n    PRIMARY KEY ({})\n)",
            relation.name, columns, keys
        )
    }

    /// Query returning one row when the table exists.
    pub fn compile_exists(relation: &SchemaRelation) -> String {
        format!(
            "SELECT 1 FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = '{}'",
            escape_sql_string(relation.name)
        )
    }

    /// Generate an upsert for a batch of rows.
    ///
    /// Rows whose key already exists have their value columns replaced.
    pub fn compile_insert(relation: &SchemaRelation, rows: &[Vec<ValueType>]) -> String {
        let columns = relation
            .all_fields()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        let keys = relation
            .key_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        let values = rows
            .iter()
            .map(|row| {
                let cells = row.iter().map(value_literal).collect::<Vec<_>>().join(", ");
                format!("({})", cells)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let on_conflict = if relation.value_fields.is_empty() {
            "DO NOTHING".to_string()
        } else {
            let updates = relation
                .value_fields
                .iter()
                .map(|f| format!("{0} = EXCLUDED.{0}", f.name))
                .collect::<Vec<_>>()
                .join(", ");
            format!("DO UPDATE SET {}", updates)
        };

        format!(
            "INSERT INTO {} ({}) VALUES {} ON CONFLICT ({}) {}",
            relation.name, columns, values, keys, on_conflict
        )
    }

    pub fn compile_clear(relation: &SchemaRelation) -> String {
        format!("DELETE FROM {}", relation.name)
    }
}

fn value_literal(value: &ValueType) -> String {
    match value {
        ValueType::Null => "NULL".to_string(),
        ValueType::Str(s) => format!("'{}'", escape_sql_string(s)),
        ValueType::Int(i) => i.to_string(),
    }
}
