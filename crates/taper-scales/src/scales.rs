pub mod aws;
pub mod ciwa_ar;
pub mod ciwa_b;
pub mod cows;
pub mod cwas;
pub mod nsw_cws;
pub mod saws;
