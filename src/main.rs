mod http;
mod render;

use std::time::Duration;

use http::client::fetch;
use http::request::RequestInput;
use http::response::HttpResponse;

const ENDPOINT_URL: &str = "https://channelsseller.site/api/user/udbcwicnovewwobvo/nfts";
const ADMIN_HEADERS: &str = "X-Admin-Password: nova_admin_2024";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn main() {
    let request = RequestInput {
        url: ENDPOINT_URL.to_string(),
        headers: ADMIN_HEADERS.to_string(),
        timeout: REQUEST_TIMEOUT,
    };

    println!("{}", report(fetch(&request)));
}

/// Folds the outcome of the request into the single line of output: pretty
/// JSON on success, the error's description otherwise.
fn report(result: Result<HttpResponse, String>) -> String {
    match result {
        Ok(response) => render::pretty_json_body(&response).unwrap_or_else(|err| err),
        Err(err) => err,
    }
}
