pub mod master_data;
