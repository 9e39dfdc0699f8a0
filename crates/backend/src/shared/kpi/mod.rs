//! KPI computations over raw sheet grids. Nothing here touches the network.

pub mod cells;
pub mod comparator;
pub mod config_lookup;
pub mod dates;
pub mod grid_alerts;
