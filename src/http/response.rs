#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: String,
    pub body: String,
}
