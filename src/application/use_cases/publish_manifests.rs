use crate::application::dto::{PublishFailure, PublishRequest, PublishSummary};
use crate::ports::outbound::{ManifestReader, ProgressReporter, TopologyClient};
use crate::shared::Result;
use crate::topology::domain::FederatedAppManifest;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;

/// Number of manifests posted at the same time
const MAX_CONCURRENT_PUBLISHES: usize = 4;

/// PublishManifestsUseCase - Sends manifest files to a running server
///
/// Every file is read and validated locally first; files that fail are
/// reported and skipped. The rest are posted concurrently. One failed
/// manifest does not stop the others.
///
/// # Type Parameters
/// * `R` - ManifestReader implementation
/// * `C` - TopologyClient implementation
/// * `P` - ProgressReporter implementation
pub struct PublishManifestsUseCase<R, C, P> {
    reader: R,
    client: C,
    progress_reporter: P,
}

impl<R, C, P> PublishManifestsUseCase<R, C, P>
where
    R: ManifestReader,
    C: TopologyClient,
    P: ProgressReporter,
{
    pub fn new(reader: R, client: C, progress_reporter: P) -> Self {
        Self {
            reader,
            client,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: PublishRequest) -> Result<PublishSummary> {
        let mut summary = PublishSummary::default();

        // Step 1: Read and validate locally
        let manifests = self.read_manifests(request.manifest_paths, &mut summary);
        if manifests.is_empty() {
            self.progress_reporter
                .report_error("⚠️  No valid manifest to publish");
            return Ok(summary);
        }

        // Step 2: Publish concurrently
        self.progress_reporter.report(&format!(
            "📤 Publishing {} manifest(s)...",
            manifests.len()
        ));
        let total = manifests.len();
        let mut results = stream::iter(manifests)
            .map(|(path, manifest)| async move {
                let outcome = self.client.publish(&manifest).await;
                (path, outcome)
            })
            .buffer_unordered(MAX_CONCURRENT_PUBLISHES);

        let mut done = 0;
        while let Some((path, outcome)) = results.next().await {
            done += 1;
            match outcome {
                Ok(saved) => {
                    self.progress_reporter
                        .report_progress(done, total, Some(&saved.name));
                    summary.published.push(saved);
                }
                Err(e) => {
                    self.progress_reporter
                        .report_progress(done, total, Some(&path.display().to_string()));
                    summary.failures.push(PublishFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Step 3: Report
        for failure in &summary.failures {
            self.progress_reporter.report_error(&format!(
                "❌ {}: {}",
                failure.path.display(),
                failure.reason
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Published {} of {} manifest(s)",
            summary.published.len(),
            summary.published.len() + summary.failures.len()
        ));

        Ok(summary)
    }

    fn read_manifests(
        &self,
        paths: Vec<PathBuf>,
        summary: &mut PublishSummary,
    ) -> Vec<(PathBuf, FederatedAppManifest)> {
        let mut manifests = Vec::new();
        for path in paths {
            let checked = self
                .reader
                .read_manifest(&path)
                .and_then(|manifest| manifest.validate().map(|_| manifest));
            match checked {
                Ok(manifest) => manifests.push((path, manifest)),
                Err(e) => summary.failures.push(PublishFailure {
                    path,
                    reason: e.to_string(),
                }),
            }
        }
        manifests
    }
}
