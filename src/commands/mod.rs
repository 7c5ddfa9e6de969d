pub mod check;
pub mod context;
pub mod explain;
pub mod init;

pub use check::{check_in_pool, run_check, run_check_impl};
pub use explain::{explain_path, run_explain};
pub use init::{generate_config_template, run_init, run_init_impl};
