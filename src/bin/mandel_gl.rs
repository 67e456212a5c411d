use tracing::{error, info};

use mandel_gl::config::LogConfig;
use mandel_gl::{RunGuiCommand, load_config, logging};

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            logging::init(&LogConfig::default());
            error!(error = %err, "Could not load configuration");
            std::process::exit(1);
        }
    };

    logging::init(&config.log);
    info!("Hello Mandel-GL!");

    if let Err(err) = RunGuiCommand::new(config).execute() {
        error!(error = %err, "Mandel-GL stopped");
        std::process::exit(1);
    }
}
