use crate::core::counts::CountsByPage;
use crate::core::fetcher::fetch_outcome;
use crate::core::keywords::KeywordMatcher;
use crate::domain::model::{DerivedMetrics, HypeLevelTable, PageOutcome};
use crate::domain::ports::{ConfigProvider, GaugeObserver, PostSource};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub const DEADLINE_EXCEEDED: &str = "deadline exceeded";

/// Final state of a run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub counts: CountsByPage,
    pub metrics: DerivedMetrics,
}

/// Fans out one fetch per page and folds the results into [`CountsByPage`].
///
/// Every fetch runs in its own task and reports back over a channel; the
/// controller is the only owner of the counts. The observer sees the empty
/// state first and then one update per merged page.
pub struct AppController {
    source: Arc<dyn PostSource>,
    matcher: Arc<KeywordMatcher>,
    table: HypeLevelTable,
    num_pages: usize,
    page_size: usize,
    deadline: Option<Duration>,
}

impl AppController {
    pub fn new(
        source: Arc<dyn PostSource>,
        matcher: KeywordMatcher,
        table: HypeLevelTable,
        num_pages: usize,
        page_size: usize,
    ) -> Self {
        Self {
            source,
            matcher: Arc::new(matcher),
            table,
            num_pages,
            page_size,
            deadline: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(source: Arc<dyn PostSource>, config: &C) -> Self {
        Self::new(
            source,
            KeywordMatcher::new(config.keywords(), config.boundary()),
            config.hype_levels().clone(),
            config.num_pages(),
            config.page_size(),
        )
        .with_deadline(config.deadline())
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub async fn run<O>(&self, observer: &O) -> Result<RunOutcome>
    where
        O: GaugeObserver + ?Sized,
    {
        tracing::info!(
            "🚀 Fetching {} pages of {} posts",
            self.num_pages,
            self.page_size
        );

        let mut counts = CountsByPage::new(self.num_pages, self.page_size);
        observer.on_update(&counts.derive(&self.table)).await?;

        let (tx, mut rx) = mpsc::channel::<PageOutcome>(self.num_pages.max(1));
        let mut tasks = JoinSet::new();

        for page in 0..self.num_pages {
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            let matcher = Arc::clone(&self.matcher);
            let page_size = self.page_size;
            tasks.spawn(async move {
                let outcome = fetch_outcome(source.as_ref(), &matcher, page, page_size).await;
                // 接收端已關閉代表整個 run 已結束
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let deadline = async {
            match self.deadline {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            // 已送達的結果優先於期限
            tokio::select! {
                biased;
                message = rx.recv() => {
                    let Some(outcome) = message else { break };
                    if counts.merge(outcome) {
                        let metrics = counts.derive(&self.table);
                        log_progress(&metrics);
                        observer.on_update(&metrics).await?;
                    }
                }
                _ = &mut deadline => {
                    tasks.abort_all();
                    while let Ok(outcome) = rx.try_recv() {
                        counts.merge(outcome);
                    }
                    let pending = counts.pending_pages();
                    tracing::warn!(
                        "⏱️ Deadline reached with {} pages outstanding: {:?}",
                        pending.len(),
                        pending
                    );
                    for page in pending {
                        counts.merge(PageOutcome::Failed {
                            page,
                            reason: DEADLINE_EXCEEDED.to_string(),
                        });
                    }
                    observer.on_update(&counts.derive(&self.table)).await?;
                    break;
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    tracing::error!("❌ Fetch task panicked: {}", e);
                }
            }
        }

        let metrics = counts.derive(&self.table);
        tracing::info!(
            "✅ Hype level {} ({:.1}% of {} titles, hype {:.4})",
            metrics.label,
            metrics.percent * 100.0,
            metrics.sampled,
            metrics.hype
        );

        Ok(RunOutcome { counts, metrics })
    }
}

fn log_progress(metrics: &DerivedMetrics) {
    tracing::info!(
        "📊 {} resolved, {} failed, {} pending - {}/{} matching ({:.1}%), hype {:.4} {}",
        metrics.pages_resolved,
        metrics.pages_failed,
        metrics.pages_pending,
        metrics.matched,
        metrics.sampled,
        metrics.percent * 100.0,
        metrics.hype,
        metrics.label
    );
}
