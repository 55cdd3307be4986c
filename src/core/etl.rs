use crate::core::Pipeline;
use crate::domain::model::CleanStats;
use crate::utils::error::Result;

/// Drives the pipeline stages in order: extract, transform, load, report.
/// Any stage failure propagates immediately and leaves the later stages
/// unexecuted, so the summary is only printed after a successful write.
pub struct CleanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CleanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<CleanStats> {
        tracing::info!("Extracting restaurants...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} restaurants", records.len());

        tracing::info!("Removing image fields...");
        let outcome = self.pipeline.transform(records).await?;
        let stats = outcome.stats;

        tracing::info!("Writing cleaned data...");
        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("Output saved to: {}", output_path);

        report(&stats);

        Ok(stats)
    }
}

fn report(stats: &CleanStats) {
    println!(
        "✅ Successfully removed images from {} restaurants!",
        stats.restaurants
    );
    println!("✅ Total menu items cleaned: {}", stats.menu_items);
    println!("\n💡 Recommendation:");
    println!("   - Add your own custom images later");
    println!("   - Or use a paid service like Unsplash API");
    println!("   - Or manually curate images for each restaurant");
}
