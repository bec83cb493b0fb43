use bytes::Bytes;
use reqwest::Client;
use rigel_core::{Context, Result};
use rigel_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("rigel-example/1.0")
        .build()
        .expect("client config is static");

    // Create context with the custom client
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let req = http::Request::builder()
        .method("GET")
        .uri("https://httpbin.org/get")
        .body(Bytes::new())?;

    let resp = ctx.http_send(req).await?;
    println!("Response status: {}", resp.status());
    if let Ok(text) = String::from_utf8(resp.body().to_vec()) {
        println!("{text}");
    }

    Ok(())
}
