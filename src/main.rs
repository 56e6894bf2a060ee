use clap::Parser;
use propgraph::cli::App;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run().await
}
