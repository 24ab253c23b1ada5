use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabled::Tabled;

// Schema constants shared by all three passes. The CSV matches these by
// exact string equality, so they live here and nowhere else.
pub const PLATFORM_TOTAL: &str = "Total";
pub const METRIC_INVESTMENT: &str = "Investimento ( mkt)";
pub const METRIC_REVENUE: &str = "Faturamento";
pub const METRIC_LEADS: &str = "Leads (Contatos Recebidos) (mkt)";
pub const METRIC_ROAS: &str = "ROAS";

/// Funnel stages as (source metric, friendly label), in emission order.
pub const FUNNEL_STAGES: [(&str, &str); 5] = [
    ("Cliques (mkt)", "Cliques"),
    (METRIC_LEADS, "Leads"),
    ("Atendimentos (Conversas sem vácuo)", "Atendimentos"),
    ("Agendamentos", "Agendamentos"),
    ("Pessoas que compraram", "Vendas"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// One month of the overview report, all metrics pivoted from the
/// `Total` platform rows.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct MonthlyRow {
    pub name: String,
    pub invest: f64,
    pub faturamento: f64,
    pub leads: i64,
    pub roas: f64,
}

/// One month of the per-platform investment report. The platform set
/// varies by month, so the columns are an ordered map flattened into the
/// JSON object next to `name`; a platform with no spend that month has
/// no key at all.
#[derive(Debug, Serialize, Clone)]
pub struct PlatformMonthRow {
    pub name: String,
    #[serde(flatten)]
    pub platforms: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct FunnelStageRow {
    pub stage: String,
    pub value: i64,
}

/// The full document consumed by the dashboard front end.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub monthly: Vec<MonthlyRow>,
    pub platforms: Vec<PlatformMonthRow>,
    pub funnel: Vec<FunnelStageRow>,
}
