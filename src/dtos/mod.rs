pub mod admindtos;
pub mod common;
pub mod dashboarddtos;
pub mod complaintdtos;
pub mod employerdtos;
pub mod jobdtos;
pub mod workerdtos;
