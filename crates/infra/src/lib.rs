pub mod leagues;
pub mod models;
pub mod rec_net;

pub use leagues::{DatasetError, LeagueDataset};
pub use rec_net::{RecNetClient, RecNetConfig, RecNetError};
