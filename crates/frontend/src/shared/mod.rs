pub mod components;
pub mod export;
pub mod icons;
pub mod latency;
pub mod master_data_select;
