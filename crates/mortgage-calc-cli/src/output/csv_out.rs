use serde_json::{Map, Value};
use std::io;

use super::{is_row_array, scalar_text};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
///
/// A quote with a schedule writes the schedule rows; a report writes one
/// `section,label,value` record per line item; other results fall back to
/// `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => write_result_csv(&mut wtr, result),
            _ => write_pairs(&mut wtr, map),
        },
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_result_csv(wtr: &mut StdoutWriter<'_>, result: &Map<String, Value>) {
    if let Some(Value::Array(sections)) = result.get("sections") {
        let _ = wtr.write_record(["section", "label", "value"]);
        for section in sections {
            let heading = section.get("heading").map(format_csv_value).unwrap_or_default();
            if let Some(Value::Array(rows)) = section.get("rows") {
                for row in rows {
                    let label = row.get("label").map(format_csv_value).unwrap_or_default();
                    let value = row.get("value").map(format_csv_value).unwrap_or_default();
                    let _ = wtr.write_record([heading.as_str(), &label, &value]);
                }
            }
        }
    } else if let Some(Value::Array(schedule)) = result.get("schedule") {
        write_array_csv(wtr, schedule);
    } else {
        write_pairs(wtr, result);
    }
}

fn write_pairs(wtr: &mut StdoutWriter<'_>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        if is_row_array(val) {
            continue;
        }
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
}

fn write_array_csv(wtr: &mut StdoutWriter<'_>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    scalar_text(value, "")
}
