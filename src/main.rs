#[tokio::main]
async fn main() {
    if let Err(e) = med_ia_lib::run().await {
        tracing::error!("Fatal: {e}");
        eprintln!("med-ia: {e}");
        std::process::exit(1);
    }
}
