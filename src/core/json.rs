use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// 解析 JSON 時忽略鍵值大小寫。
///
/// 所有物件鍵值會遞迴轉成小寫後再交給 serde，因此目標型別的欄位名稱必須是小寫。
/// 若兩個鍵值轉換後相同，以文件中較後出現者為準。
pub fn from_str_case_insensitive<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::from_value(lowercase_keys(value))
}

pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut lowered = Map::with_capacity(map.len());
            for (key, inner) in map {
                lowered.insert(key.to_lowercase(), lowercase_keys(inner));
            }
            Value::Object(lowered)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        media_type: String,
        nested: Option<Inner>,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        iserror: bool,
    }

    #[test]
    fn test_lowercase_keys_recurses_into_objects_and_arrays() {
        let value = json!({"Outer": {"InNer": [ {"KEY": 1} ]}, "plain": "Value"});
        let lowered = lowercase_keys(value);

        assert_eq!(lowered, json!({"outer": {"inner": [ {"key": 1} ]}, "plain": "Value"}));
    }

    #[test]
    fn test_mixed_case_keys_match_fields() {
        let probe: Probe =
            from_str_case_insensitive(r#"{"MEDIA_TYPE":"video","Nested":{"isError":true}}"#)
                .unwrap();

        assert_eq!(probe.media_type, "video");
        assert!(probe.nested.unwrap().iserror);
    }

    #[test]
    fn test_malformed_body_is_error() {
        assert!(from_str_case_insensitive::<Probe>("{\"media_type\":").is_err());
        assert!(from_str_case_insensitive::<Probe>("").is_err());
    }
}
