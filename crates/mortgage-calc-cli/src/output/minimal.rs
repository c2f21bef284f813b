use serde_json::Value;

use super::scalar_text;

/// Print just the headline value from the output.
///
/// Quotes print the monthly payment. Reports print one
/// `label: monthly_payment` line per scenario. Schedules print their row
/// count. Anything else falls back to the first field of the result.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "total_interest", "total_paid"];

    if let Value::Array(rows) = result_obj {
        println!("{}", rows.len());
        return;
    }

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_text(val, "null"));
                    return;
                }
            }
        }

        if let Some(Value::Array(figures)) = map.get("figures") {
            for fig in figures {
                let label = fig.get("label").map(|v| scalar_text(v, "")).unwrap_or_default();
                let payment = fig
                    .pointer("/result/monthly_payment")
                    .map(|v| scalar_text(v, "null"))
                    .unwrap_or_default();
                println!("{}: {}", label, payment);
            }
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_text(val, "null"));
            return;
        }
    }

    println!("{}", scalar_text(result_obj, "null"));
}
