pub mod adminmodel;
pub mod applicationmodel;
pub mod complaintmodel;
pub mod employermodel;
pub mod jobmodel;
pub mod sessionmodel;
pub mod workermodel;
