pub mod constants;
pub mod mapper;
pub mod motion;
pub mod scene;
pub mod state;

pub use constants::*;
pub use mapper::*;
pub use motion::*;
pub use scene::*;
pub use state::*;
