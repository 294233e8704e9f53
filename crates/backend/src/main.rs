use backend::shared::config::{get_export_dir, load_config};
use backend::shared::export::ExportBlob;
use backend::shared::format::{format_byte_size, format_number};
use backend::shared::latency::tokio_latency;
use backend::shared::options::OptionProvider;
use backend::system::{self, initialization::MasterDataServices};
use contracts::domain::common::RecordStatus;
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;
    tracing::info!(
        "Config: latency={}ms, option limit={}, export limit={}",
        config.mock.latency_ms,
        config.options.default_limit,
        format_number(config.export.max_records)
    );

    let services = MasterDataServices::seeded(&config, tokio_latency(config.mock.latency()))?;

    let first_page = services.companies.list(&FilterQuery::new(1, 5)).await?;
    tracing::info!(
        "Companies: {} total, {} pages of {}",
        first_page.total,
        first_page.total_pages,
        first_page.limit
    );

    let options = services.company_options().load_options(None).await?;
    for option in &options {
        tracing::info!(
            "  option {} | {} | {}",
            option.value,
            option.label,
            option.description.as_deref().unwrap_or("-")
        );
    }

    let export_dir = get_export_dir(&config);
    std::fs::create_dir_all(&export_dir)?;
    tracing::info!("Writing exports to {}", export_dir.display());

    let active = ListFilters::new().eq("status", RecordStatus::Active.as_str());
    let all = ListFilters::new();

    let blobs = [
        services.companies.export(&all, ExportFormat::Csv).await?,
        services.companies.export(&active, ExportFormat::Json).await?,
        services.customers.export(&all, ExportFormat::Csv).await?,
        services.products.export(&active, ExportFormat::Csv).await?,
    ];

    for blob in &blobs {
        write_blob(&export_dir, blob)?;
    }

    tracing::info!("Done: {} files exported", blobs.len());
    Ok(())
}

fn write_blob(dir: &std::path::Path, blob: &ExportBlob) -> anyhow::Result<()> {
    let path = dir.join(&blob.file_name);
    std::fs::write(&path, &blob.bytes)?;
    tracing::info!(
        "  {} ({}, {})",
        path.display(),
        blob.mime_type,
        format_byte_size(blob.bytes.len())
    );
    Ok(())
}
