use serde::{Deserialize, Serialize};

use crate::models::complaintmodel::ComplaintStats;

use super::complaintdtos::FilterComplaintDto;
use super::workerdtos::FilterWorkerDto;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponseDto {
    pub success: bool,
    pub worker: FilterWorkerDto,
    pub complaint_stats: ComplaintStats,
}

/// The logged-in variant also carries the most recent grievances.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentDashboardResponseDto {
    pub success: bool,
    pub worker: FilterWorkerDto,
    pub complaint_stats: ComplaintStats,
    pub recent_complaints: Vec<FilterComplaintDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PortalSummaryResponseDto {
    pub success: bool,
    pub employers: i64,
    pub active_employers: i64,
}
