pub mod report_model;
pub mod report_service;

#[cfg(test)]
mod report_service_tests;

pub use report_model::PortfolioReport;
pub use report_service::{PortfolioReportService, PortfolioReportServiceTrait};
