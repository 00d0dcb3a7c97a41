// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod accounts;
pub mod leagues;
