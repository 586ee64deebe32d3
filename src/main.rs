use crate::config::AppConfig;
use crate::provider::RateProvider;
use astra::Server;
use std::net::SocketAddr;

mod board;
mod config;
mod errors;
mod provider;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the rate provider client
    let provider = match RateProvider::new(&config.supabase_url, &config.supabase_key) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ Provider client init failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("❌ Invalid bind address {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    println!("Starting rate board at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the provider handle into the closure
    let result = server.serve(move |req, _info| match router::handle(req, &provider, &config) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
