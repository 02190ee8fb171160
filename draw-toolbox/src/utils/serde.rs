use serde::{Deserialize, Deserializer};

pub fn deserialize_truthy_falsy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let truthy_value: String = String::deserialize(deserializer)?;
    Ok(matches!(
        truthy_value.trim().to_lowercase().as_ref(),
        "x" | "1" | "true" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "deserialize_truthy_falsy")]
        value: bool,
    }

    fn parse(value: &str) -> bool {
        serde_json::from_str::<Flag>(&format!(r#"{{"value": "{}"}}"#, value))
            .unwrap()
            .value
    }

    #[test]
    fn truthy_values() {
        for value in ["x", "X", "1", "true", "TRUE", " yes "] {
            assert!(parse(value), "{}", value);
        }
    }

    #[test]
    fn anything_else_is_falsy() {
        for value in ["", "0", "false", "no", "n/a"] {
            assert!(!parse(value), "{}", value);
        }
    }
}
