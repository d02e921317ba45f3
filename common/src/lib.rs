use time::Date;
use time::macros::format_description;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

// investing.com and etfdb.com both sit behind a Cloudflare front page
// that blocks obvious non-browser agents, so the client presents a
// desktop Chrome identity. JS challenges and CAPTCHAs are not solved.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub fn client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
}

/// One GET, whole body as text. Non-2xx statuses (including a served
/// challenge page's 403) fail the fetch rather than returning the body.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send().await?
        .error_for_status()?;

    response.text().await
}

/// Names the snapshot after the second-to-last `/`-separated segment of
/// the url, so `https://www.investing.com/indices/switzerland-20` on
/// 2024-03-01 becomes `indices_2024-03-01.html`.
pub fn output_name(url: &str, date: Date) -> String {
    let name = url.split('/').rev().nth(1).unwrap_or("page");
    let format = format_description!("[year]-[month]-[day]");
    format!("{}_{}.html", name, date.format(&format).unwrap())
}

/// Creates or truncates `path` and writes `body` verbatim.
pub async fn save_page(path: &str, body: &str) -> std::io::Result<()> {
    let mut buffer = File::create(path).await?;
    buffer.write_all(body.as_bytes()).await?;
    buffer.flush().await?;
    Ok(())
}
