use crate::board;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::provider::RateProvider;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;

pub fn handle(req: Request, provider: &RateProvider, config: &AppConfig) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") | ("GET", "/rates") => {
            // Provider failures and empty results render the same way: an
            // empty board with a No Data badge. Nothing here is fatal.
            let offers = match provider.fetch_latest(config.include_sample) {
                Ok(offers) => offers,
                Err(e) => {
                    eprintln!("⚠️ Rate provider error: {e}");
                    Vec::new()
                }
            };

            let rate_board = board::build(offers);
            html_response(templates::pages::rates_page(&rate_board))
        }
        _ => Err(ServerError::NotFound),
    }
}
