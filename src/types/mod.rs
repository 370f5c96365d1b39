mod board;
mod conflict;
mod ids;
mod locked;
mod school;
mod session;
mod store;
mod teacher;
mod time;

pub use board::*;
pub use conflict::*;
pub use ids::*;
pub use locked::*;
pub use school::*;
pub use session::*;
pub use store::*;
pub use teacher::*;
pub use time::*;
