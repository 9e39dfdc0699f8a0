//! Wire types shared between the KPI backend and its dashboard.

pub mod dashboards;
pub mod shared;
