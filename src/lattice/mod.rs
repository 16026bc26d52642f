pub mod builder;
pub mod node;

pub use builder::{build, Lattice};
pub use node::{LatticeToken, TokenKind};
