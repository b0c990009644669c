#[tokio::main]
async fn main() -> Result<(), server::errors::StartupError> {
    server::run().await
}
