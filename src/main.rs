use tracing_subscriber::EnvFilter;
use tsk::commands::Cli;
use tsk::libs::messages::macros::is_debug_mode;
use tsk::msg_error;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsk=debug")))
            .init();
    }

    if let Err(error) = Cli::menu() {
        msg_error!(error);
        std::process::exit(1);
    }
}
