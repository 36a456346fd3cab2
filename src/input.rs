use serde_json::Value;

/// Reads a JSON value as an integer, flooring fractions. Anything that is
/// not a number (or a string holding one) becomes 0.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(floor_to_i64))
            .unwrap_or(0),
        Value::String(text) => parse_numeric(text.trim()),
        Value::Bool(flag) => i64::from(*flag),
        _ => 0,
    }
}

pub fn clamp_int(value: &Value, min: i64, max: i64) -> i64 {
    coerce_int(value).clamp(min, max)
}

fn parse_numeric(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }
    if let Ok(whole) = text.parse::<i64>() {
        return whole;
    }
    text.parse::<f64>().map(floor_to_i64).unwrap_or(0)
}

fn floor_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    // `as` saturates at the i64 bounds.
    value.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_are_floored() {
        assert_eq!(coerce_int(&json!(42)), 42);
        assert_eq!(coerce_int(&json!(2.9)), 2);
        assert_eq!(coerce_int(&json!(-2.1)), -3);
    }

    #[test]
    fn strings_and_garbage() {
        assert_eq!(coerce_int(&json!(" 150 ")), 150);
        assert_eq!(coerce_int(&json!("7.5")), 7);
        assert_eq!(coerce_int(&json!("abc")), 0);
        assert_eq!(coerce_int(&json!("")), 0);
        assert_eq!(coerce_int(&json!(null)), 0);
        assert_eq!(coerce_int(&json!([1, 2])), 0);
        assert_eq!(coerce_int(&json!(true)), 1);
        assert_eq!(coerce_int(&json!("inf")), 0);
    }

    #[test]
    fn clamp_applies_range() {
        assert_eq!(clamp_int(&json!(0), 1, i64::MAX), 1);
        assert_eq!(clamp_int(&json!(500), 1, 72), 72);
        assert_eq!(clamp_int(&json!("nope"), 1, 72), 1);
        assert_eq!(clamp_int(&json!(1e30), 0, 1000), 1000);
    }
}
