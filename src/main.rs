#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run the CLI
    dicom_viewer_server::cli::run_cli().await
}
