//! Logical data types carried by type literals

use serde::{Deserialize, Serialize};

/// Logical SQL type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// BOOLEAN
    Boolean,
    /// 32-bit INTEGER
    Integer,
    /// 64-bit BIGINT
    BigInt,
    /// DOUBLE precision float
    Double,
    /// Variable-length character string
    Varchar,
}

impl DataType {
    /// SQL name of the type
    pub fn sql_name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Integer => "INTEGER",
            DataType::BigInt => "BIGINT",
            DataType::Double => "DOUBLE",
            DataType::Varchar => "VARCHAR",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_name())
    }
}
