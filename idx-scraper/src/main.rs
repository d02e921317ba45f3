use common::{client, fetch_page, output_name, save_page};
use time::OffsetDateTime;

const URL: &str = "https://www.investing.com/indices/switzerland-20";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let client = client()?;
    let body = fetch_page(&client, URL).await?;

    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();
    let file_name = output_name(URL, today);

    log::info!("saving response to {}", file_name);
    save_page(&file_name, &body).await?;

    Ok(())
}
