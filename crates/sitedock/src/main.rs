mod output;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use clap::Parser;
use sitedock_cloud::{SiteSpec, provision};
use sitedock_cloud_aws::{CloudFrontCdn, S3Storage, StsIdentity};

#[derive(Parser)]
#[command(name = "sitedock", version)]
#[command(about = "Provision S3 + CloudFront static-website hosting", long_about = None)]
struct Cli {
    /// Globally unique name for the site bucket
    #[arg(long, env = "SITEDOCK_BUCKET", default_value = "my-unique-site-bucket")]
    bucket: String,

    /// Region the bucket is created in
    #[arg(long, env = "SITEDOCK_REGION", default_value = "us-east-1")]
    region: String,

    /// Index document served at the site root
    #[arg(long, default_value = "index.html")]
    index_document: String,

    /// Error document served for missing objects
    #[arg(long, default_value = "error.html")]
    error_document: String,

    /// Origin-access-identity id referenced by the distribution origin
    #[arg(long, env = "SITEDOCK_OAI", default_value = "E127KE33O7Z7YI")]
    origin_access_identity: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();

    let spec = SiteSpec {
        bucket: cli.bucket,
        region: cli.region,
        index_document: cli.index_document,
        error_document: cli.error_document,
        origin_access_identity: cli.origin_access_identity,
    };
    tracing::info!(bucket = %spec.bucket, region = %spec.region, "starting provisioning run");

    // Credentials come from the ambient SDK configuration (env, profile,
    // instance metadata); nothing credential-shaped is accepted here.
    let region_provider =
        RegionProviderChain::first_try(Region::new(spec.region.clone())).or_default_provider();
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let storage = S3Storage::new(&config);
    let cdn = CloudFrontCdn::new(&config);
    let identity = StsIdentity::new(&config);

    let output_dir = std::env::current_dir()?;
    let summary = provision(&storage, &cdn, &identity, &spec, &output_dir).await;
    print!("{}", output::render_summary(&spec, &summary));

    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
