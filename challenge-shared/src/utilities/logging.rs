use log::Level;
use serde_json::{json, Value};

/// Logs a single-line JSON record for CloudWatch. `fields` is merged into
/// the record when it is an object, otherwise stored under `data`.
pub fn log_event(level: Level, event: &str, fields: Value) {
    log::log!(level, "{}", event_record(event, fields));
}

pub fn log_info(event: &str, fields: Value) {
    log_event(Level::Info, event, fields);
}

pub fn log_warn(event: &str, fields: Value) {
    log_event(Level::Warn, event, fields);
}

pub fn log_error(event: &str, error_message: &str) {
    log_event(Level::Error, event, json!({ "error": error_message }));
}

fn event_record(event: &str, fields: Value) -> Value {
    let mut record = json!({ "event": event });
    match fields {
        Value::Object(map) => {
            if let Value::Object(target) = &mut record {
                for (key, value) in map {
                    if key != "event" {
                        target.insert(key, value);
                    }
                }
            }
        }
        Value::Null => {}
        other => record["data"] = other,
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record_merges_object_fields() {
        let record = event_record("request", json!({"method": "GET", "event": "ignored"}));
        assert_eq!(record, json!({"event": "request", "method": "GET"}));
    }

    #[test]
    fn test_event_record_wraps_scalars() {
        assert_eq!(event_record("boot", json!("cold")), json!({"event": "boot", "data": "cold"}));
        assert_eq!(event_record("boot", Value::Null), json!({"event": "boot"}));
    }
}
