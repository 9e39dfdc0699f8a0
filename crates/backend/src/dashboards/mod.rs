pub mod common;
pub mod d410_kpi_check;
pub mod d411_kpi_config;
pub mod d412_kpi_v2;
pub mod d413_kpi_input;
pub mod error;
