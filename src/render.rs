use serde_json::Value;

use crate::http::response::HttpResponse;

/// Re-serialize the response body as indented JSON, keeping the key order
/// the server sent.
pub fn pretty_json_body(response: &HttpResponse) -> Result<String, String> {
    let value: Value = serde_json::from_str(&response.body)
        .map_err(|e| format!("Response body is not valid JSON ({}): {e}", response.status))?;
    serde_json::to_string_pretty(&value).map_err(|e| format!("Failed to format JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: "200 OK".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn indents_with_two_spaces() {
        let pretty = pretty_json_body(&make_response(r#"{"items":[1,2]}"#)).unwrap();
        assert_eq!(pretty, "{\n  \"items\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn keeps_response_key_order() {
        let pretty = pretty_json_body(&make_response(r#"{"zeta":1,"alpha":2}"#)).unwrap();
        let zeta = pretty.find("zeta").unwrap();
        let alpha = pretty.find("alpha").unwrap();
        assert!(zeta < alpha, "keys were reordered: {pretty}");
    }

    #[test]
    fn non_json_body_is_an_error() {
        let err = pretty_json_body(&make_response("<html>oops</html>")).unwrap_err();
        assert!(err.contains("not valid JSON"));
        assert!(err.contains("200 OK"));
    }
}
