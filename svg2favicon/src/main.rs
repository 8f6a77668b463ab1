use svg2favicon::FaviconPipeline;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    // Set up logging using tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let pipeline = FaviconPipeline::default();
    match pipeline.run() {
        Ok(ico_path) => {
            println!("WROTE {}", ico_path.display());
        }
        Err(err) => {
            tracing::error!("Failed to generate favicon: {}", err);
            std::process::exit(1);
        }
    }
}
