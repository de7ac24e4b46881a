use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use jdparse_core::{BatchReport, InputUnit, ParseOutcome, ProcessingResult};

use crate::processor::JobProcessor;
use crate::progress::ProgressEvent;

/// Fans a batch of input units out across a bounded number of concurrent
/// tasks and collects exactly one result per unit, in completion order.
/// Tasks never touch shared state; the coordinator is the single writer of
/// the result map and the completed count.
pub struct BatchCoordinator {
    processor: Arc<JobProcessor>,
    concurrency: usize,
}

impl BatchCoordinator {
    pub fn new(processor: JobProcessor, concurrency: usize) -> Self {
        Self {
            processor: Arc::new(processor),
            concurrency: concurrency.max(1),
        }
    }

    /// Process every unit and return one result per unit. Progress events
    /// are emitted per completed unit on multi-unit batches only; a dropped
    /// receiver does not stop the batch.
    pub async fn run_batch(
        &self,
        units: Vec<InputUnit>,
        progress: Option<UnboundedSender<ProgressEvent>>,
    ) -> BatchReport {
        let started = Instant::now();
        let total = units.len();

        if total == 0 {
            return BatchReport {
                results: HashMap::new(),
                elapsed: Duration::ZERO,
            };
        }

        // A single unit runs inline: no pool, no progress events.
        if total == 1 {
            let result = self.processor.process(&units[0]).await;
            let mut results = HashMap::new();
            results.insert(result.label.clone(), result);
            return BatchReport {
                results,
                elapsed: started.elapsed(),
            };
        }

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let mut labels_by_task = HashMap::with_capacity(total);

        for unit in units {
            let processor = self.processor.clone();
            let semaphore = semaphore.clone();
            let label = unit.label.clone();
            let handle = tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("batch semaphore closed");
                processor.process(&unit).await
            });
            labels_by_task.insert(handle.id(), label);
        }

        let mut results = HashMap::with_capacity(total);
        let mut completed = 0usize;

        while let Some(joined) = tasks.join_next_with_id().await {
            let result = match joined {
                Ok((_id, result)) => result,
                // A crash outside the captured-failure contract still yields
                // a result for its label, so the one-result-per-unit
                // invariant holds.
                Err(join_error) => {
                    let label = labels_by_task
                        .get(&join_error.id())
                        .cloned()
                        .unwrap_or_default();
                    tracing::error!(
                        label = %label,
                        error = %join_error,
                        "Batch task failed unexpectedly"
                    );
                    ProcessingResult {
                        label,
                        outcome: ParseOutcome::failed(format!("processing error: {join_error}")),
                        elapsed: Duration::ZERO,
                    }
                }
            };

            results.insert(result.label.clone(), result);
            completed += 1;

            if let Some(sender) = &progress {
                let event = ProgressEvent { completed, total };
                if sender.send(event).is_err() {
                    tracing::debug!("Progress receiver dropped, continuing without reporting");
                }
            }
        }

        let elapsed = started.elapsed();
        let parsed = results.values().filter(|r| r.outcome.is_parsed()).count();
        tracing::info!(
            units = total,
            parsed,
            elapsed_secs = elapsed.as_secs_f64(),
            "Batch complete"
        );

        BatchReport { results, elapsed }
    }
}
