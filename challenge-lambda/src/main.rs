use lambda_http::{service_fn, Error};
use challenge_lambda::router::handle_lambda;
use challenge_shared::utilities::config;
use challenge_shared::utilities::fields::api;
use challenge_shared::utilities::logging::log_error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log_error("panic", &info.to_string());
    }));

    config::init();
    log::info!("Starting {} {}", api::TITLE, api::VERSION);
    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}
