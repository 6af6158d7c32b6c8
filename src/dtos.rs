pub mod jobdtos;
pub mod reviewdtos;
