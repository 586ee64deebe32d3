use crate::config::AppConfig;
use crate::provider::Offer;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Build a plain GET request for router tests.
pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

/// Read a response body out as UTF-8.
pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("body read failed");
    String::from_utf8(bytes).expect("body was not UTF-8")
}

/// Config pointing at an unreachable provider; router tests exercise the
/// error-absorption path, not the network.
pub fn test_config() -> AppConfig {
    AppConfig {
        supabase_url: "http://127.0.0.1:9".to_string(),
        supabase_key: "test-key".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        include_sample: true,
    }
}

/// A fully-populated live offer for page tests.
pub fn live_offer(lender: &str, category: &str, rate: f64, apr: f64) -> Offer {
    Offer {
        lender_name: lender.to_string(),
        category: category.to_string(),
        rate: Some(rate),
        apr: Some(apr),
        points: Some(0.5),
        lender_fees: Some(1500.0),
        state: Some("MA".to_string()),
        loan_amount: Some(600000.0),
        ltv: Some(80.0),
        fico: Some(760),
        lock_days: Some(30),
        updated_at: "2024-06-01T15:30:00+00:00".to_string(),
        source_id: Some(1),
        source_name: Some("Direct scrape".to_string()),
        is_fallback: false,
        details: None,
    }
}
