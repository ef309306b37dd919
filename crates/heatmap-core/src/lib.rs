pub mod color;
pub mod compose;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod overlay;
pub mod room;
pub mod scene;
pub mod view;
