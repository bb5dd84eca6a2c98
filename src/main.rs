use league_assets::{
    download::{Limits, Manager},
    file::Hierarchy,
    sync::sync_versioned,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    let hierarchy = Hierarchy::with_default_structure()?;
    let downloader = Manager::with_limits(Limits::default())?;

    let summary = sync_versioned(&downloader, &hierarchy).await;
    println!(
        "Fetched {}KB, {} of {} entries saved to {}",
        downloader.downloaded_bytes() / 1024,
        summary.succeeded().count(),
        summary.len(),
        hierarchy.assets_dir.display()
    );
    Ok(())
}
