//! Core schema definition types.

/// Represents a database data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data
    String,
    /// Integer data
    Int,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
        }
    }

    /// Returns the PostgreSQL column type for this data type.
    pub fn postgres_type(&self) -> &'static str {
        match self {
            DataType::String => "TEXT",
            DataType::Int => "BIGINT",
        }
    }
}

/// Represents a field in a schema relation.
#[derive(Debug, Clone)]
pub struct SchemaField {
    /// Field name (e.g., "user_id", "city_name")
    pub name: &'static str,

    /// Field data type
    pub data_type: DataType,

    /// Whether the field may hold null. Key fields never do.
    pub nullable: bool,
}

impl SchemaField {
    pub const fn required(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: false,
        }
    }

    pub const fn optional(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
        }
    }
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone)]
pub struct SchemaRelation {
    /// Relation name (e.g., "users", "friends")
    pub name: &'static str,

    /// Fields that form the key (must be unique)
    pub key_fields: &'static [SchemaField],

    /// Fields that are associated values
    pub value_fields: &'static [SchemaField],
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }
}
