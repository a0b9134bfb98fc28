pub mod audio;
pub mod burst;
pub mod constants;
pub mod melody;
pub mod notes;
pub mod recorder;
pub mod spheres;
pub mod state;
pub mod transport;

pub use audio::*;
pub use burst::*;
pub use constants::*;
pub use melody::*;
pub use notes::*;
pub use recorder::*;
pub use spheres::*;
pub use state::*;
pub use transport::*;
