use serde::{Deserialize, Serialize};

/// Whatever the client reports for the current summoner; the schema is left open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSummoner {
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl CurrentSummoner {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_unknown_fields() {
        let body = json!({
            "displayName": "Ahri Main",
            "summonerLevel": 187,
            "rerollPoints": { "numberOfRolls": 2 }
        });
        let summoner: CurrentSummoner = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(summoner.get("summonerLevel"), Some(&json!(187)));
        assert_eq!(serde_json::to_value(&summoner).unwrap(), body);
    }

    #[test]
    fn keeps_server_key_order() {
        let raw = r#"{"zeta":1,"alpha":2,"displayName":"x","rerollPoints":{"pointsToReroll":0,"currentPoints":250}}"#;
        let summoner: CurrentSummoner = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&summoner).unwrap(), raw);
    }

    #[test]
    fn pretty_output_keeps_non_ascii() {
        let summoner: CurrentSummoner =
            serde_json::from_value(json!({ "gameName": "提莫" })).unwrap();
        let out = serde_json::to_string_pretty(&summoner).unwrap();
        assert_eq!(out, "{\n  \"gameName\": \"提莫\"\n}");
    }
}
