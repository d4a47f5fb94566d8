use std::fmt::Write;

use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::types::RowValues;

/// Convert bound arguments into engine values, one to one.
///
/// Pure passthrough: the engine does all type coercion from here on.
pub(crate) fn to_engine_values(args: &[RowValues]) -> Vec<Value> {
    args.iter().map(to_engine_value).collect()
}

fn to_engine_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Timestamp(dt) => {
            let mut buf = String::with_capacity(32);
            let _ = write!(buf, "{}", dt.format("%F %T%.f"));
            Value::Text(buf)
        }
        RowValues::Null => Value::Null,
        RowValues::JSON(jval) => Value::Text(jval.to_string()),
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Build a borrowed params slice suitable for rusqlite execution.
pub(crate) fn values_as_tosql(values: &[Value]) -> Vec<&dyn ToSql> {
    values.iter().map(|v| v as &dyn ToSql).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::types::Value;

    use super::to_engine_values;
    use crate::types::RowValues;

    #[test]
    fn scalar_values_map_one_to_one() {
        let values = to_engine_values(&[
            RowValues::Int(42),
            RowValues::Float(2.5),
            RowValues::Text("alice".into()),
            RowValues::Null,
            RowValues::Blob(vec![1, 2, 3]),
        ]);
        assert_eq!(
            values,
            vec![
                Value::Integer(42),
                Value::Real(2.5),
                Value::Text("alice".into()),
                Value::Null,
                Value::Blob(vec![1, 2, 3]),
            ]
        );
    }

    #[test]
    fn bools_become_integers() {
        let values = to_engine_values(&[RowValues::Bool(true), RowValues::Bool(false)]);
        assert_eq!(values, vec![Value::Integer(1), Value::Integer(0)]);
    }

    #[test]
    fn timestamps_and_json_become_text() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        let values = to_engine_values(&[
            RowValues::Timestamp(dt),
            RowValues::JSON(serde_json::json!({"k": 1})),
        ]);
        assert_eq!(
            values,
            vec![
                Value::Text("2024-03-01 12:30:45".into()),
                Value::Text(r#"{"k":1}"#.into()),
            ]
        );
    }
}
