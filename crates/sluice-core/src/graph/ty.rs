use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The logical type of a field, as the execution engine spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    String,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal { precision: u32, scale: u32 },
    Date,
    Time { precision: u32 },
    Timestamp { precision: u32 },
    LocalZonedTimestamp { precision: u32 },
    Bytes,
    Array(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
}

const DEFAULT_TIMESTAMP_PRECISION: u32 = 3;
const DEFAULT_TIME_PRECISION: u32 = 0;
const DEFAULT_DECIMAL: (u32, u32) = (10, 0);

impl FieldType {
    pub fn timestamp(precision: u32) -> FieldType {
        FieldType::Timestamp { precision }
    }

    pub fn timestamp_ltz(precision: u32) -> FieldType {
        FieldType::LocalZonedTimestamp { precision }
    }

    pub fn decimal(precision: u32, scale: u32) -> FieldType {
        FieldType::Decimal { precision, scale }
    }

    pub fn array(element: FieldType) -> FieldType {
        FieldType::Array(Box::new(element))
    }

    pub fn map(key: FieldType, value: FieldType) -> FieldType {
        FieldType::Map(Box::new(key), Box::new(value))
    }

    /// Returns the same type with every timestamp precision, including nested
    /// ones, replaced by `precision`.
    pub fn with_timestamp_precision(&self, precision: u32) -> FieldType {
        match self {
            FieldType::Timestamp { .. } => FieldType::Timestamp { precision },
            FieldType::LocalZonedTimestamp { .. } => FieldType::LocalZonedTimestamp { precision },
            FieldType::Array(element) => {
                FieldType::array(element.with_timestamp_precision(precision))
            }
            FieldType::Map(key, value) => FieldType::map(
                key.with_timestamp_precision(precision),
                value.with_timestamp_precision(precision),
            ),
            ty => ty.clone(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("STRING"),
            FieldType::Boolean => f.write_str("BOOLEAN"),
            FieldType::TinyInt => f.write_str("TINYINT"),
            FieldType::SmallInt => f.write_str("SMALLINT"),
            FieldType::Int => f.write_str("INT"),
            FieldType::BigInt => f.write_str("BIGINT"),
            FieldType::Float => f.write_str("FLOAT"),
            FieldType::Double => f.write_str("DOUBLE"),
            FieldType::Decimal { precision, scale } => write!(f, "DECIMAL({precision}, {scale})"),
            FieldType::Date => f.write_str("DATE"),
            FieldType::Time { precision } => write!(f, "TIME({precision})"),
            FieldType::Timestamp { precision } => write!(f, "TIMESTAMP({precision})"),
            FieldType::LocalZonedTimestamp { precision } => {
                write!(f, "TIMESTAMP_LTZ({precision})")
            }
            FieldType::Bytes => f.write_str("BYTES"),
            FieldType::Array(element) => write!(f, "ARRAY<{element}>"),
            FieldType::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
        }
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<FieldType> {
        let mut parser = Parser { src: s, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_whitespace();

        if parser.pos != s.len() {
            return Err(Error::invalid_type(format!(
                "unexpected `{}` after type in `{s}`",
                &s[parser.pos..]
            )));
        }

        Ok(ty)
    }
}

impl TryFrom<String> for FieldType {
    type Error = Error;

    fn try_from(value: String) -> Result<FieldType> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> String {
        value.to_string()
    }
}

/// Recursive descent over type strings such as `MAP<STRING, ARRAY<INT>>`.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse_type(&mut self) -> Result<FieldType> {
        let keyword = self.keyword()?.to_ascii_uppercase();

        let ty = match keyword.as_str() {
            "STRING" | "VARCHAR" | "CHAR" => {
                // Length arguments carry no meaning for the engine's STRING.
                self.optional_args()?;
                FieldType::String
            }
            "BOOLEAN" | "BOOL" => FieldType::Boolean,
            "TINYINT" => FieldType::TinyInt,
            "SMALLINT" => FieldType::SmallInt,
            "INT" | "INTEGER" => FieldType::Int,
            "BIGINT" => FieldType::BigInt,
            "FLOAT" => FieldType::Float,
            "DOUBLE" => FieldType::Double,
            "DECIMAL" => match self.optional_args()?.as_slice() {
                [] => FieldType::decimal(DEFAULT_DECIMAL.0, DEFAULT_DECIMAL.1),
                [precision] => FieldType::decimal(*precision, 0),
                [precision, scale] => FieldType::decimal(*precision, *scale),
                _ => return Err(self.error("DECIMAL takes at most two arguments")),
            },
            "DATE" => FieldType::Date,
            "TIME" => FieldType::Time {
                precision: self.single_arg(DEFAULT_TIME_PRECISION)?,
            },
            "TIMESTAMP" => FieldType::Timestamp {
                precision: self.single_arg(DEFAULT_TIMESTAMP_PRECISION)?,
            },
            "TIMESTAMP_LTZ" => FieldType::LocalZonedTimestamp {
                precision: self.single_arg(DEFAULT_TIMESTAMP_PRECISION)?,
            },
            "BYTES" | "BINARY" | "VARBINARY" => {
                self.optional_args()?;
                FieldType::Bytes
            }
            "ARRAY" => {
                self.expect('<')?;
                let element = self.parse_type()?;
                self.expect('>')?;
                FieldType::array(element)
            }
            "MAP" => {
                self.expect('<')?;
                let key = self.parse_type()?;
                self.expect(',')?;
                let value = self.parse_type()?;
                self.expect('>')?;
                FieldType::map(key, value)
            }
            _ => return Err(self.error(&format!("unknown type `{keyword}`"))),
        };

        Ok(ty)
    }

    fn keyword(&mut self) -> Result<&str> {
        self.skip_whitespace();
        let start = self.pos;
        let len = self.src[start..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.src.len() - start);

        if len == 0 {
            return Err(self.error("expected a type name"));
        }

        self.pos += len;
        Ok(&self.src[start..start + len])
    }

    fn single_arg(&mut self, default: u32) -> Result<u32> {
        match self.optional_args()?.as_slice() {
            [] => Ok(default),
            [arg] => Ok(*arg),
            _ => Err(self.error("expected a single precision argument")),
        }
    }

    /// Parses `(n[, n]*)` when present.
    fn optional_args(&mut self) -> Result<Vec<u32>> {
        self.skip_whitespace();
        if !self.src[self.pos..].starts_with('(') {
            return Ok(vec![]);
        }
        self.pos += 1;

        let mut args = vec![];
        loop {
            self.skip_whitespace();
            let start = self.pos;
            let len = self.src[start..]
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.src.len() - start);
            let arg = self.src[start..start + len]
                .parse()
                .map_err(|_| self.error("expected a numeric argument"))?;
            self.pos += len;
            args.push(arg);

            self.skip_whitespace();
            match self.src[self.pos..].chars().next() {
                Some(',') => self.pos += 1,
                Some(')') => {
                    self.pos += 1;
                    return Ok(args);
                }
                _ => return Err(self.error("expected `,` or `)`")),
            }
        }
    }

    fn expect(&mut self, ch: char) -> Result<()> {
        self.skip_whitespace();
        if self.src[self.pos..].starts_with(ch) {
            self.pos += ch.len_utf8();
            Ok(())
        } else {
            Err(self.error(&format!("expected `{ch}`")))
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, message: &str) -> Error {
        Error::invalid_type(format!("{message} at offset {} in `{}`", self.pos, self.src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        assert_eq!("timestamp".parse::<FieldType>().unwrap(), FieldType::timestamp(3));
        assert_eq!("DECIMAL".parse::<FieldType>().unwrap(), FieldType::decimal(10, 0));
        assert_eq!("VARCHAR(255)".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!("integer".parse::<FieldType>().unwrap(), FieldType::Int);
    }

    #[test]
    fn parse_nested() {
        let ty: FieldType = "MAP< STRING , ARRAY<TIMESTAMP_LTZ(6)> >".parse().unwrap();
        assert_eq!(
            ty,
            FieldType::map(FieldType::String, FieldType::array(FieldType::timestamp_ltz(6)))
        );
        assert_eq!(ty.to_string(), "MAP<STRING, ARRAY<TIMESTAMP_LTZ(6)>>");
    }

    #[test]
    fn parse_errors() {
        for src in ["", "TEXTY", "MAP<STRING>", "DECIMAL(1, 2, 3)", "INT INT", "TIME(x)"] {
            let err = src.parse::<FieldType>().unwrap_err();
            assert!(err.is_invalid_type(), "{src}: {err}");
        }
    }

    #[test]
    fn timestamp_precision_is_replaced_recursively() {
        let ty = FieldType::map(FieldType::String, FieldType::timestamp(3));
        assert_eq!(
            ty.with_timestamp_precision(9),
            FieldType::map(FieldType::String, FieldType::timestamp(9))
        );
        assert_eq!(FieldType::Int.with_timestamp_precision(9), FieldType::Int);
    }
}
