mod args;
mod exit_status;
mod output;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use output::{print_summary, render_report, write_report};
pub use run::run;
