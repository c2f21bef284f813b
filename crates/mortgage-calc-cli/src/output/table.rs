use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{is_row_array, scalar_text};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => print_result_table(result, map),
            None => print_flat_object(map),
        },
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => match res_map.get("sections") {
            Some(Value::Array(sections)) => print_report(res_map, sections),
            _ => print_quote(res_map),
        },
        _ => print_flat_object(envelope),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Scalar fields in one table; row arrays (the schedule) in their own.
fn print_quote(res_map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut nested = Vec::new();

    for (key, val) in res_map {
        if is_row_array(val) {
            nested.push((key, val));
        } else {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
    }
    println!("{}", Table::from(builder));

    for (key, val) in nested {
        if let Value::Array(rows) = val {
            println!("\n{}:", key);
            print_array_table(rows);
        }
    }
}

fn print_report(res_map: &Map<String, Value>, sections: &[Value]) {
    for key in ["title", "subtitle"] {
        if let Some(Value::String(s)) = res_map.get(key) {
            println!("{}", s);
        }
    }
    if let Some(Value::String(date)) = res_map.get("generated_on") {
        println!("Generated: {}", date);
    }

    for section in sections {
        let heading = section.get("heading").map(|h| scalar_text(h, "")).unwrap_or_default();
        println!("\n{}", heading);

        let mut builder = Builder::default();
        if let Some(Value::Array(rows)) = section.get("rows") {
            for row in rows {
                let label = row.get("label").map(|v| scalar_text(v, "")).unwrap_or_default();
                let value = row.get("value").map(|v| scalar_text(v, "")).unwrap_or_default();
                builder.push_record([label, value]);
            }
        }
        println!("{}", Table::from(builder));
    }

    if let Some(Value::String(disclaimer)) = res_map.get("disclaimer") {
        println!("\nDisclaimer: {}", disclaimer);
    }
    if let Some(Value::String(contact)) = res_map.get("contact") {
        println!("{}", contact);
    }
}

fn print_flat_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        _ => scalar_text(value, "null"),
    }
}
