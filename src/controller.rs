use crate::charts::{ChartSeries, Headline, SummaryViewModel};
use crate::gateway::{FeedbackApi, GatewayResult};
use crate::models::{
    FeedbackRecord, FilterCriteria, SortSpec, SummaryKind, SummaryPayload, SummaryReport,
};
use crate::store::FeedbackStore;
use chrono::Local;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

impl Phase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Phase plus dispatch bookkeeping for one view. Every action takes a
/// ticket; whichever response settles last wins, even if its ticket is
/// older than the latest dispatch.
#[derive(Debug, Default)]
struct Tracker {
    phase: Phase,
    issued: u64,
    updated_at: Option<String>,
}

impl Tracker {
    fn begin(&mut self, view: &str) -> u64 {
        self.issued += 1;
        self.phase = Phase::Loading;
        info!("{view}: dispatch #{}", self.issued);
        self.issued
    }

    fn settle<T>(&mut self, view: &str, ticket: u64, result: &GatewayResult<T>) {
        if ticket < self.issued {
            debug!(
                "{view}: response #{ticket} settled after newer dispatch #{}, applying anyway",
                self.issued
            );
        }

        match result {
            Ok(_) => {
                self.phase = Phase::Ready;
                self.updated_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
                info!("{view}: response #{ticket} ready");
            }
            Err(err) => {
                warn!("{view}: response #{ticket} failed: {err:?}");
                self.phase = Phase::Failed {
                    message: err.user_message(),
                };
            }
        }
    }
}

#[derive(Debug, Default)]
struct TableView {
    tracker: Tracker,
    store: FeedbackStore,
    search: String,
}

#[derive(Debug, Default)]
struct ChartsView {
    tracker: Tracker,
    model: SummaryViewModel,
    criteria: FilterCriteria,
}

#[derive(Debug, Default)]
struct SummaryView {
    tracker: Tracker,
    kind: SummaryKind,
    report: Option<SummaryReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    #[serde(flatten)]
    pub phase: Phase,
    pub columns: Vec<String>,
    pub rows: Vec<FeedbackRecord>,
    pub total: usize,
    pub sort: SortSpec,
    pub search: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartsSnapshot {
    #[serde(flatten)]
    pub phase: Phase,
    pub criteria: FilterCriteria,
    pub categories: Vec<String>,
    pub series: ChartSeries,
    pub headline: Headline,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarySnapshot {
    #[serde(flatten)]
    pub phase: Phase,
    pub kind: SummaryKind,
    pub report: Option<SummaryReport>,
    pub updated_at: Option<String>,
}

/// Owns the table, charts and summary views and runs every user action
/// against the gateway. Locks are never held across a request.
pub struct DashboardController {
    gateway: Arc<dyn FeedbackApi>,
    table: Mutex<TableView>,
    charts: Mutex<ChartsView>,
    summary: Mutex<SummaryView>,
}

impl DashboardController {
    pub fn new(gateway: Arc<dyn FeedbackApi>) -> Self {
        Self {
            gateway,
            table: Mutex::new(TableView::default()),
            charts: Mutex::new(ChartsView::default()),
            summary: Mutex::new(SummaryView::default()),
        }
    }

    /// Initial load of the views that fetch on mount.
    pub async fn mount(&self) {
        tokio::join!(self.load_table(), self.load_charts());
    }

    // Table
    // =====

    pub async fn load_table(&self) -> TableSnapshot {
        let ticket = self.table.lock().await.tracker.begin("table");
        self.fetch_table(ticket).await
    }

    /// Loads the table if nothing has been dispatched for it yet.
    pub async fn ensure_table(&self) -> TableSnapshot {
        let ticket = {
            let mut table = self.table.lock().await;
            if table.tracker.phase != Phase::Idle {
                return table_snapshot(&table);
            }
            table.tracker.begin("table")
        };
        self.fetch_table(ticket).await
    }

    async fn fetch_table(&self, ticket: u64) -> TableSnapshot {
        let result = self.gateway.fetch_feedback().await;

        let mut table = self.table.lock().await;
        table.tracker.settle("table", ticket, &result);
        match result {
            Ok(records) => table.store.load(records),
            Err(_) => table.store.clear(),
        }
        table_snapshot(&table)
    }

    pub async fn request_sort(&self, field: &str) -> TableSnapshot {
        let mut table = self.table.lock().await;
        let spec = table.store.request_sort(field);
        debug!("table: sort {:?} {:?}", spec.field, spec.direction);
        table_snapshot(&table)
    }

    pub async fn search(&self, term: &str) -> TableSnapshot {
        let mut table = self.table.lock().await;
        table.search = term.to_string();
        table_snapshot(&table)
    }

    pub async fn table_snapshot(&self) -> TableSnapshot {
        table_snapshot(&*self.table.lock().await)
    }

    // Charts
    // ======

    /// Unfiltered summary, used on mount.
    pub async fn load_charts(&self) -> ChartsSnapshot {
        let ticket = self.charts.lock().await.tracker.begin("charts");
        self.fetch_charts(ticket).await
    }

    pub async fn ensure_charts(&self) -> ChartsSnapshot {
        let ticket = {
            let mut charts = self.charts.lock().await;
            if charts.tracker.phase != Phase::Idle {
                return charts_snapshot(&charts);
            }
            charts.tracker.begin("charts")
        };
        self.fetch_charts(ticket).await
    }

    pub async fn apply_filters(&self, criteria: FilterCriteria) -> ChartsSnapshot {
        let criteria = criteria.normalized();
        let ticket = {
            let mut charts = self.charts.lock().await;
            charts.criteria = criteria.clone();
            charts.tracker.begin("charts")
        };
        let result = self.gateway.fetch_filtered_feedback(&criteria).await;
        self.settle_charts(ticket, result).await
    }

    /// Clears the criteria and reloads the unfiltered summary.
    pub async fn reset_filters(&self) -> ChartsSnapshot {
        let ticket = {
            let mut charts = self.charts.lock().await;
            charts.criteria = FilterCriteria::default();
            charts.tracker.begin("charts")
        };
        self.fetch_charts(ticket).await
    }

    pub async fn charts_snapshot(&self) -> ChartsSnapshot {
        charts_snapshot(&*self.charts.lock().await)
    }

    async fn fetch_charts(&self, ticket: u64) -> ChartsSnapshot {
        let result = self.gateway.fetch_summary().await;
        self.settle_charts(ticket, result).await
    }

    async fn settle_charts(
        &self,
        ticket: u64,
        result: GatewayResult<SummaryPayload>,
    ) -> ChartsSnapshot {
        let mut charts = self.charts.lock().await;
        charts.tracker.settle("charts", ticket, &result);
        match result {
            Ok(payload) => charts.model.ingest(payload),
            Err(_) => charts.model.clear(),
        }
        charts_snapshot(&charts)
    }

    // Summary
    // =======

    pub async fn generate_summary(&self, kind: SummaryKind) -> SummarySnapshot {
        let ticket = {
            let mut summary = self.summary.lock().await;
            summary.kind = kind;
            summary.report = None;
            summary.tracker.begin("summary")
        };
        let result = self.gateway.request_summary_report(kind).await;

        let mut summary = self.summary.lock().await;
        summary.tracker.settle("summary", ticket, &result);
        summary.report = result.ok();
        summary_snapshot(&summary)
    }

    pub async fn summary_snapshot(&self) -> SummarySnapshot {
        summary_snapshot(&*self.summary.lock().await)
    }
}

fn table_snapshot(table: &TableView) -> TableSnapshot {
    let ready = table.tracker.phase.is_ready();
    let rows = if ready {
        table
            .store
            .view(&table.search)
            .into_iter()
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    TableSnapshot {
        phase: table.tracker.phase.clone(),
        columns: if ready { table.store.columns() } else { Vec::new() },
        rows,
        total: if ready { table.store.len() } else { 0 },
        sort: table.store.sort_spec().clone(),
        search: table.search.clone(),
        updated_at: table.tracker.updated_at.clone(),
    }
}

fn charts_snapshot(charts: &ChartsView) -> ChartsSnapshot {
    let ready = charts.tracker.phase.is_ready();
    ChartsSnapshot {
        phase: charts.tracker.phase.clone(),
        criteria: charts.criteria.clone(),
        categories: if ready {
            charts.model.categories()
        } else {
            Vec::new()
        },
        series: if ready {
            charts.model.series().clone()
        } else {
            ChartSeries::default()
        },
        headline: if ready {
            charts.model.headline()
        } else {
            Headline::default()
        },
        updated_at: charts.tracker.updated_at.clone(),
    }
}

fn summary_snapshot(summary: &SummaryView) -> SummarySnapshot {
    SummarySnapshot {
        phase: summary.tracker.phase.clone(),
        kind: summary.kind,
        report: summary.report.clone(),
        updated_at: summary.tracker.updated_at.clone(),
    }
}
