use common::{client, fetch_page, save_page};

// first page of the etfdb screener, 25 records as served
const URL: &str = "https://etfdb.com/data_set/?tm=92882&no_null_sort=true&count_by_id=&sort=symbol&order=asc&offset=0";
const FILE_NAME: &str = "response.html";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let client = client()?;
    let body = fetch_page(&client, URL).await?;

    log::info!("saving response to {}", FILE_NAME);
    save_page(FILE_NAME, &body).await?;

    Ok(())
}
