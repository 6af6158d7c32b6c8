pub mod db;
pub mod jobdb;
pub mod proposaldb;
pub mod reviewdb;
