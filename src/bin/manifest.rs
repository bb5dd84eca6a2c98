use league_assets::{
    download::{Limits, Manager},
    file::Hierarchy,
    sync::{sync_from_manifest, update_game_version},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    let hierarchy = Hierarchy::with_default_structure()?;
    let downloader = Manager::with_limits(Limits::default())?;

    update_game_version(&hierarchy).await;
    let summary = sync_from_manifest(&downloader, &hierarchy).await?;
    if !summary.is_empty() {
        println!(
            "Fetched {}KB, {} of {} entries saved to {}",
            downloader.downloaded_bytes() / 1024,
            summary.succeeded().count(),
            summary.len(),
            hierarchy.assets_dir.display()
        );
    }
    Ok(())
}
