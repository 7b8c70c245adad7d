use tracing::{debug, Level};
use crate::core::domain::Configuration;

pub fn log_level(config: &Configuration) -> Level {
    config.log_level.parse::<Level>().unwrap_or(Level::INFO)
}

// installs the global subscriber; logs go to stderr so that the console output
// on stdout only carries command replies.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    let res = if config.log_json {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = res {
        debug!(error = %err, "tracing already initialized");
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logs::{log_level, setup_tracing};

    #[test]
    fn test_should_parse_log_level() {
        let mut config = Configuration::new("test");
        assert_eq!(Level::INFO, log_level(&config));
        config.log_level = "debug".to_string();
        assert_eq!(Level::DEBUG, log_level(&config));
        config.log_level = "chatty".to_string();
        assert_eq!(Level::INFO, log_level(&config));
    }

    #[test]
    fn test_should_setup_tracing_twice() {
        let config = Configuration::new("test");
        setup_tracing(&config);
        setup_tracing(&config);
    }
}
