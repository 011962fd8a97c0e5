use std::io::Read;

use anyhow::Context;
use calculatepi_cgi::{handle_request, Response, Status};

fn read_body() -> anyhow::Result<String> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("Failed to read request body from stdin")?;
    Ok(body)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the CGI response.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let response = match read_body() {
        Ok(body) => handle_request(&body),
        Err(e) => {
            log::error!("{:#}", e);
            Response::error(Status::InternalServerError, format!("{:#}", e))
        }
    };

    response
        .write_to(std::io::stdout().lock())
        .context("Failed to write response")
}
