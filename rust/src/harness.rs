//! End-to-end run: load, normalize, verify, report.

use std::path::Path;

use tracing::{info, warn};

use crate::alias::NormalizedCase;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, LoadError};
use crate::registry::{BuilderCatalog, BuilderRegistry, RegistryBuilder};
use crate::report::RunReport;
use crate::vectors::{self, LoadedCorpus, VectorSource};
use crate::verify::{verify_all, VerificationResult};

/// Results of one run, with the per-case detail kept alongside the summary.
#[derive(Debug)]
pub struct RunOutput {
    pub results: Vec<VerificationResult>,
    pub report: RunReport,
}

pub struct Harness {
    config: HarnessConfig,
    registry: BuilderRegistry,
}

impl Harness {
    pub fn new(config: HarnessConfig, registry: BuilderRegistry) -> Self {
        Self { config, registry }
    }

    /// Registry from everything `C` exports.
    pub fn from_catalog<C: BuilderCatalog>(config: HarnessConfig) -> Result<Self, HarnessError> {
        Ok(Self::new(config, RegistryBuilder::from_catalog::<C>()?))
    }

    pub fn from_config_file(path: &Path, registry: BuilderRegistry) -> Result<Self, HarnessError> {
        Ok(Self::new(HarnessConfig::from_file(path)?, registry))
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    /// Run every group under the configured vector directory.
    pub fn run(&self) -> Result<RunOutput, HarnessError> {
        let corpus = vectors::load_dir(&self.config.vector_dir, self.config.on_format_error)?;
        Ok(self.verify_corpus(corpus))
    }

    /// Run explicit sources instead of walking the vector directory.
    pub fn run_sources<S: VectorSource>(&self, sources: &[S]) -> Result<RunOutput, LoadError> {
        let corpus = vectors::load(sources, self.config.on_format_error)?;
        Ok(self.verify_corpus(corpus))
    }

    pub fn normalize(&self, corpus: LoadedCorpus) -> Vec<NormalizedCase> {
        corpus
            .items
            .into_iter()
            .map(|item| self.config.aliases.normalize(item))
            .collect()
    }

    fn verify_corpus(&self, mut corpus: LoadedCorpus) -> RunOutput {
        let skipped = std::mem::take(&mut corpus.skipped);
        let cases = self.normalize(corpus);
        let results = verify_all(cases, &self.registry, self.config.execution);
        let report = RunReport::new(&results, &skipped);

        if report.failed > 0 {
            warn!(
                total = report.total,
                passed = report.passed,
                failed = report.failed,
                "conformance run finished with failures"
            );
        } else {
            info!(total = report.total, skipped_groups = report.skipped_groups.len(), "conformance run passed");
        }
        RunOutput { results, report }
    }
}
