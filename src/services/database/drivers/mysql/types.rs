//! MySQL wire type conversion utilities.
//!
//! This module handles conversion between the MySQL protocol types (from SQLx)
//! and the generic `Value`/`Record` types. SingleStore speaks the same
//! protocol and reports the same type names, so both drivers share it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::mysql::{MySqlArguments, MySqlColumn, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row, TypeInfo, ValueRef};

use crate::services::database::traits::{Record, Value};

/// Converter between MySQL values and the unified `Value` type.
pub struct MySqlValueConverter;

impl MySqlValueConverter {
    /// Convert a MySQL row to a record keyed by column name.
    ///
    /// Fails with the driver's decode error if any column cannot be read.
    pub fn convert_row(mysql_row: &MySqlRow) -> Result<Record, sqlx::Error> {
        let columns = mysql_row.columns();
        let mut record = Record::with_capacity(columns.len());
        for (idx, col) in columns.iter().enumerate() {
            let value = Self::extract_value(mysql_row, col, idx)?;
            record.insert(col.name(), value);
        }
        Ok(record)
    }

    /// Bind every parameter positionally, in order.
    pub fn bind_params<'q>(
        query: Query<'q, MySql, MySqlArguments>,
        params: &[Value],
    ) -> Query<'q, MySql, MySqlArguments> {
        params.iter().fold(query, Self::bind_value)
    }

    fn bind_value<'q>(
        query: Query<'q, MySql, MySqlArguments>,
        value: &Value,
    ) -> Query<'q, MySql, MySqlArguments> {
        match value {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Int(v) => query.bind(*v),
            Value::UInt(v) => query.bind(*v),
            Value::Float(v) => query.bind(*v),
            Value::Decimal(d) => query.bind(*d),
            Value::Text(s) => query.bind(s.clone()),
            Value::Bytes(b) => query.bind(b.clone()),
            Value::Date(d) => query.bind(*d),
            Value::Time(t) => query.bind(*t),
            Value::DateTime(dt) => query.bind(*dt),
            Value::DateTimeTz(dt) => query.bind(*dt),
            Value::Json(j) => query.bind(sqlx::types::Json(j.clone())),
        }
    }

    /// Extract a value from a MySQL row at the given column index.
    ///
    /// Decode failures are returned, never replaced by NULL.
    fn extract_value(
        row: &MySqlRow,
        column: &MySqlColumn,
        index: usize,
    ) -> Result<Value, sqlx::Error> {
        if row.try_get_raw(index)?.is_null() {
            return Ok(Value::Null);
        }

        let kind = ColumnKind::from_type_name(column.type_info().name());
        Self::decode(row, index, kind)
    }

    fn decode(row: &MySqlRow, index: usize, kind: ColumnKind) -> Result<Value, sqlx::Error> {
        let value = match kind {
            // TINYINT(1) keeps its integer value; the display width does not
            // limit the range. Unsigned columns only decode as u8.
            ColumnKind::TinyInt => row
                .try_get::<i8, _>(index)
                .map(|v| Value::Int(v as i64))
                .or_else(|_| row.try_get::<u8, _>(index).map(|v| Value::UInt(v as u64)))?,
            ColumnKind::Int16 => Value::Int(row.try_get::<i16, _>(index)? as i64),
            ColumnKind::Int32 => Value::Int(row.try_get::<i32, _>(index)? as i64),
            ColumnKind::Int64 => Value::Int(row.try_get::<i64, _>(index)?),
            ColumnKind::UInt8 => Value::UInt(row.try_get::<u8, _>(index)? as u64),
            ColumnKind::UInt16 => Value::UInt(row.try_get::<u16, _>(index)? as u64),
            ColumnKind::UInt32 => Value::UInt(row.try_get::<u32, _>(index)? as u64),
            ColumnKind::UInt64 => Value::UInt(row.try_get::<u64, _>(index)?),
            ColumnKind::Float32 => Value::Float(row.try_get::<f32, _>(index)? as f64),
            ColumnKind::Float64 => Value::Float(row.try_get::<f64, _>(index)?),
            ColumnKind::Decimal => Value::Decimal(row.try_get::<Decimal, _>(index)?),
            ColumnKind::Text => Value::Text(row.try_get::<String, _>(index)?),
            ColumnKind::Bytes => Value::Bytes(row.try_get::<Vec<u8>, _>(index)?),
            ColumnKind::Date => Value::Date(row.try_get::<NaiveDate, _>(index)?),
            ColumnKind::Time => Value::Time(row.try_get::<NaiveTime, _>(index)?),
            ColumnKind::DateTime => Value::DateTime(row.try_get::<NaiveDateTime, _>(index)?),
            ColumnKind::Timestamp => row
                .try_get::<DateTime<Utc>, _>(index)
                .map(Value::DateTimeTz)
                .or_else(|_| row.try_get::<NaiveDateTime, _>(index).map(Value::DateTime))?,
            ColumnKind::Json => Value::Json(row.try_get::<serde_json::Value, _>(index)?),
            ColumnKind::Unknown => Self::decode_fallback(row, index)?,
        };
        Ok(value)
    }

    /// Fallback for unknown types: text first, then the numeric decoders,
    /// then raw bytes. The last decoder's error is returned if none fit.
    fn decode_fallback(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
        row.try_get::<String, _>(index)
            .map(Value::Text)
            .or_else(|_| row.try_get::<i64, _>(index).map(Value::Int))
            .or_else(|_| row.try_get::<u64, _>(index).map(Value::UInt))
            .or_else(|_| row.try_get::<f64, _>(index).map(Value::Float))
            .or_else(|_| row.try_get::<Vec<u8>, _>(index).map(Value::Bytes))
    }
}

/// The Rust type a MySQL column is decoded into, chosen by type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    TinyInt,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Text,
    Bytes,
    Date,
    Time,
    DateTime,
    Timestamp,
    Json,
    Unknown,
}

impl ColumnKind {
    fn from_type_name(type_name: &str) -> Self {
        match type_name {
            // SQLx names every TINYINT(1) column BOOLEAN
            "BOOLEAN" | "BOOL" | "TINYINT" => Self::TinyInt,
            "SMALLINT" => Self::Int16,
            "MEDIUMINT" | "INT" | "INTEGER" => Self::Int32,
            "BIGINT" => Self::Int64,
            "TINYINT UNSIGNED" => Self::UInt8,
            // SQLx only decodes YEAR as an unsigned integer
            "SMALLINT UNSIGNED" | "YEAR" => Self::UInt16,
            "MEDIUMINT UNSIGNED" | "INT UNSIGNED" | "INTEGER UNSIGNED" => Self::UInt32,
            "BIGINT UNSIGNED" => Self::UInt64,
            "FLOAT" => Self::Float32,
            "DOUBLE" | "DOUBLE PRECISION" | "REAL" => Self::Float64,
            "DECIMAL" | "NUMERIC" | "DEC" | "FIXED" => Self::Decimal,
            "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => Self::Text,
            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                Self::Bytes
            }
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "DATETIME" => Self::DateTime,
            "TIMESTAMP" => Self::Timestamp,
            "JSON" => Self::Json,
            // ENUM and SET come back as their text
            _ if type_name.starts_with("ENUM") || type_name.starts_with("SET") => Self::Text,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Execute;

    #[test]
    fn test_bind_params_keeps_sql_text() {
        let params = vec![
            Value::Int(1),
            Value::from("alice"),
            Value::Null,
            Value::Decimal("9.99".parse().unwrap()),
        ];
        let query = MySqlValueConverter::bind_params(
            sqlx::query("SELECT * FROM t WHERE a = ? AND b = ? AND c <=> ? AND d = ?"),
            &params,
        );

        assert_eq!(
            query.sql(),
            "SELECT * FROM t WHERE a = ? AND b = ? AND c <=> ? AND d = ?"
        );
    }

    #[test]
    fn test_year_decodes_as_unsigned() {
        assert_eq!(ColumnKind::from_type_name("YEAR"), ColumnKind::UInt16);
    }

    #[test]
    fn test_tinyint_one_keeps_integer_value() {
        assert_eq!(ColumnKind::from_type_name("BOOLEAN"), ColumnKind::TinyInt);
        assert_eq!(ColumnKind::from_type_name("TINYINT"), ColumnKind::TinyInt);
        assert_eq!(ColumnKind::from_type_name("TINYINT UNSIGNED"), ColumnKind::UInt8);
    }

    #[test]
    fn test_type_name_mapping() {
        assert_eq!(ColumnKind::from_type_name("INT UNSIGNED"), ColumnKind::UInt32);
        assert_eq!(ColumnKind::from_type_name("DECIMAL"), ColumnKind::Decimal);
        assert_eq!(ColumnKind::from_type_name("ENUM"), ColumnKind::Text);
        assert_eq!(ColumnKind::from_type_name("SET"), ColumnKind::Text);
        assert_eq!(ColumnKind::from_type_name("TIMESTAMP"), ColumnKind::Timestamp);
        assert_eq!(ColumnKind::from_type_name("GEOMETRY"), ColumnKind::Unknown);
    }
}
