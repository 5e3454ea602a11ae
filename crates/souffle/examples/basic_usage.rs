//! Validates a sample record in both modes with DEBUG logging enabled.

use serde_json::json;
use souffle::prelude::*;

fn main() -> Result<(), SouffleError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let donkey = json!({
        "name": "Magical Donkey",
        "age": 15,
        "owner": { "firstName": "Magic", "lastName": "Dave" }
    });
    let rules = json!({
        "name": { "isString": true, "minLength": 10, "maxLength": 20 },
        "age": { "isNotBlank": true },
        "owner": {
            "firstName": { "isNotBlank": true },
            "lastName": { "isNotBlank": true }
        }
    });

    for error in Souffle::validate(&donkey, &rules)? {
        println!("tree:  {error}");
    }

    for error in Souffle::value("Donkey").is_string().length_between(5, 10).exec()? {
        println!("chain: {error}");
    }

    Ok(())
}
