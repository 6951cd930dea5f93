use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderName, HeaderValue};

use super::request::RequestInput;
use super::response::HttpResponse;

pub fn fetch(request: &RequestInput) -> Result<HttpResponse, String> {
    let client = Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
    let url = reqwest::Url::parse(&request.url).map_err(|e| format!("Invalid URL: {e}"))?;

    let mut req_builder = client.get(url);
    req_builder = apply_headers(req_builder, &request.headers)?;

    let response = req_builder.send().map_err(|e| format!("Request failed: {e}"))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| format!("Failed to read response: {e}"))?;

    Ok(HttpResponse {
        status: format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
        body,
    })
}

fn apply_headers(mut req_builder: RequestBuilder, headers: &str) -> Result<RequestBuilder, String> {
    for (name, value) in parse_header_lines(headers)? {
        req_builder = req_builder.header(name, value);
    }
    Ok(req_builder)
}

fn parse_header_lines(headers: &str) -> Result<Vec<(HeaderName, HeaderValue)>, String> {
    let mut parsed = Vec::new();

    for line in headers.lines() {
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let (key, value) = raw
            .split_once(':')
            .ok_or_else(|| format!("Invalid header format: {raw}"))?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(format!("Header key is empty: {raw}"));
        }

        let header_name =
            HeaderName::from_bytes(key.as_bytes()).map_err(|e| format!("Invalid header key `{key}`: {e}"))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| format!("Invalid header value `{value}`: {e}"))?;
        parsed.push((header_name, header_value));
    }

    Ok(parsed)
}
