mod lines;

pub use lines::{CountResult, LineCounter};
