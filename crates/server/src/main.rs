#[tokio::main]
async fn main() -> anyhow::Result<()> {
    text2sql_server::start().await
}
