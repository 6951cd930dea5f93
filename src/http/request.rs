use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RequestInput {
    pub url: String,
    pub headers: String,
    pub timeout: Duration,
}
