mod context;
mod probe;

pub use context::{apply_cli_overrides, color_choice_to_mode, load_config};
pub use probe::{run_probe, run_probe_impl};
