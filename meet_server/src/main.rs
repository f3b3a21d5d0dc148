#[tokio::main]
async fn main() {
    if let Err(e) = meet_server::run_with_config().await {
        eprintln!("meet server stopped: {e}");
        std::process::exit(1);
    }
}
