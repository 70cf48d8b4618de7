mod board;
mod config;
mod ls;

pub use board::cmd_board;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::cmd_ls;
