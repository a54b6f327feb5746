use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

pub const PROJECT_NAME: &str = "feedscan";

/// Level applied to this crate. Errors are never filtered out, so failed
/// fetches always reach stderr.
pub fn crate_level(requested: LevelFilter) -> LevelFilter {
    requested.max(LevelFilter::Error)
}

/// Routes diagnostics to stderr so stdout only carries scan results.
pub fn setup_logger(level: LevelFilter) -> Result<()> {
    let colors = ColoredLevelConfig {
        trace: Color::Cyan,
        debug: Color::Magenta,
        info: Color::Green,
        warn: Color::Yellow,
        error: Color::BrightRed,
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                colors.color(record.level()),
                message
            ))
        })
        .level(LevelFilter::Warn.min(level))
        .level_for(PROJECT_NAME, crate_level(level))
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_survive_quiet_levels() {
        assert_eq!(crate_level(LevelFilter::Off), LevelFilter::Error);
        assert_eq!(crate_level(LevelFilter::Error), LevelFilter::Error);
        assert_eq!(crate_level(LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(crate_level(LevelFilter::Debug), LevelFilter::Debug);
    }
}
