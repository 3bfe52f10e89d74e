use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tokio::task::spawn_blocking;
use tracing::{error, info, warn};

use crate::analytics::SalesAnalytics;
use crate::enrichment::{build_catalog_mapping, match_catalog, CatalogSource, EnrichmentSummary};
use crate::ingest::{self, ValidationOptions, ValidationOutcome, ValidationReport};
use crate::models::CatalogMapping;
use crate::report::render_report;

/// Batch analytics pipeline: one sales export in, one report file out.
///
/// The whole accepted set is materialized before any aggregation runs, and
/// every aggregation reads that same immutable set. The two collaborators
/// (file system, product catalog) are the only points of failure, and both
/// degrade instead of aborting: a missing source yields zero records, a dead
/// catalog an empty mapping.
pub struct SalesPipeline<C> {
    catalog: C,
    options: ValidationOptions,
}

/// What each run hands back to the caller. The caller decides how to narrate
/// it; the pipeline itself only logs.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub validation: ValidationReport,
    pub enrichment: EnrichmentSummary,
    pub report_path: PathBuf,
}

impl<C: CatalogSource> SalesPipeline<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            options: ValidationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the full batch: load, clean, enrich, aggregate, render, write.
    ///
    /// # Errors
    /// Only unexpected failures surface here (a reader task that panicked,
    /// a report path that cannot be written). Bad records and unavailable
    /// collaborators are handled inside their stages.
    pub async fn run(&self, input: &Path, output: &Path) -> Result<PipelineOutcome> {
        let ValidationOutcome { transactions, report } = self.load_and_validate(input).await?;

        info!(
            "Accepted {} of {} records ({} invalid)",
            report.final_count,
            report.total_input,
            report.invalid_count()
        );

        let mapping = self.fetch_catalog_mapping().await;

        let analytics = SalesAnalytics::compute(&transactions);
        let enrichment = match_catalog(&transactions, &mapping);

        let document = render_report(&transactions, &analytics, &enrichment, Local::now());
        write_report(output, &document)?;

        info!("Report written to {}", output.display());

        Ok(PipelineOutcome {
            validation: report,
            enrichment,
            report_path: output.to_path_buf(),
        })
    }

    async fn load_and_validate(&self, input: &Path) -> Result<ValidationOutcome> {
        let path = input.to_path_buf();
        let options = self.options.clone();

        // File read and cleaning are blocking CPU/disk work
        let outcome = spawn_blocking(move || match ingest::load_source(&path) {
            Ok(source) => ingest::clean_and_validate(&source, &options),
            Err(load_error) => {
                error!("Sales source unavailable, continuing with zero records: {load_error:#}");
                ValidationOutcome::default()
            }
        })
        .await?;

        Ok(outcome)
    }

    async fn fetch_catalog_mapping(&self) -> CatalogMapping {
        match self.catalog.fetch_catalog().await {
            Ok(products) => build_catalog_mapping(products),
            Err(fetch_error) => {
                warn!("Product catalog unavailable, enrichment degrades to an empty mapping: {fetch_error}");
                CatalogMapping::new()
            }
        }
    }
}

fn write_report(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create report directory {}", parent.display()))?;
        }
    }

    std::fs::write(path, document)
        .with_context(|| format!("cannot write report to {}", path.display()))
}
