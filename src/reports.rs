use crate::types::{
    DashboardData, FunnelStageRow, MonthlyRow, PlatformMonthRow, RawRecord, FUNNEL_STAGES,
    METRIC_INVESTMENT, METRIC_LEADS, METRIC_REVENUE, METRIC_ROAS, PLATFORM_TOTAL,
};
use crate::util::{month_abbrev, month_rank};
use std::collections::{BTreeMap, HashMap};

/// Look up a pivoted metric, defaulting to 0 when the month has no row
/// for it. Absent metrics are a business rule, not an error.
fn metric_or_zero(metrics: &HashMap<&str, f64>, name: &str) -> f64 {
    metrics.get(name).copied().unwrap_or(0.0)
}

pub fn monthly_overview(data: &[RawRecord]) -> Vec<MonthlyRow> {
    // Raw month -> metric -> summed value. The BTreeMap keeps the
    // pre-sort order deterministic, so months ranked 99 stay in a
    // stable alphabetical order after the chronological sort.
    let mut by_month: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    for r in data.iter().filter(|r| r.platform == PLATFORM_TOTAL) {
        *by_month
            .entry(r.month.as_str())
            .or_default()
            .entry(r.metric.as_str())
            .or_insert(0.0) += r.value;
    }

    let mut rows: Vec<MonthlyRow> = by_month
        .into_iter()
        .map(|(month, metrics)| MonthlyRow {
            name: month_abbrev(month),
            invest: metric_or_zero(&metrics, METRIC_INVESTMENT),
            faturamento: metric_or_zero(&metrics, METRIC_REVENUE),
            leads: metric_or_zero(&metrics, METRIC_LEADS) as i64,
            roas: metric_or_zero(&metrics, METRIC_ROAS),
        })
        .collect();
    rows.sort_by_key(|r| month_rank(&r.name));
    rows
}

pub fn platform_investment(data: &[RawRecord]) -> Vec<PlatformMonthRow> {
    // Only the investment metric is broken out per platform. Keys are
    // lowercased at accumulation time so the wire field names are final
    // before serialization.
    let mut by_month: BTreeMap<&str, BTreeMap<String, f64>> = BTreeMap::new();
    for r in data
        .iter()
        .filter(|r| r.platform != PLATFORM_TOTAL && r.metric == METRIC_INVESTMENT)
    {
        *by_month
            .entry(r.month.as_str())
            .or_default()
            .entry(r.platform.to_lowercase())
            .or_insert(0.0) += r.value;
    }

    let mut rows: Vec<PlatformMonthRow> = by_month
        .into_iter()
        .map(|(month, platforms)| PlatformMonthRow {
            name: month_abbrev(month),
            platforms,
        })
        .collect();
    rows.sort_by_key(|r| month_rank(&r.name));
    rows
}

pub fn funnel_totals(data: &[RawRecord]) -> Vec<FunnelStageRow> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for r in data.iter().filter(|r| r.platform == PLATFORM_TOTAL) {
        if let Some((metric, _)) = FUNNEL_STAGES.iter().find(|(m, _)| *m == r.metric) {
            *sums.entry(*metric).or_insert(0.0) += r.value;
        }
    }

    // Emission follows the fixed stage order; a stage with no
    // contributing rows is omitted rather than zero-filled.
    FUNNEL_STAGES
        .iter()
        .filter_map(|(metric, label)| {
            sums.get(metric).map(|total| FunnelStageRow {
                stage: (*label).to_string(),
                value: *total as i64,
            })
        })
        .collect()
}

pub fn build_dashboard(data: &[RawRecord]) -> DashboardData {
    DashboardData {
        monthly: monthly_overview(data),
        platforms: platform_investment(data),
        funnel: funnel_totals(data),
    }
}
