pub mod io;
pub mod model;
pub mod ops;
pub mod session;
pub mod tui;
pub mod util;
