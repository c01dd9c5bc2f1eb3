pub use config::*;
pub use errors::*;
pub use graph::*;
pub use player::*;
pub use policy::*;
pub use session::*;
pub use tickets::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod config;
mod errors;
mod graph;
mod player;
mod policy;
mod session;
#[cfg(test)]
mod test_boards;
mod tickets;
mod turn;
mod visualization;
