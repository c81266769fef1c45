use log::{Level, LevelFilter};

/// Console level for a configured filter; `Off` maps to `Info`.
pub fn console_level(filter: LevelFilter) -> Level {
    filter.to_level().unwrap_or(Level::Info)
}

/// Routes `log` records to the browser console.
pub fn init(filter: LevelFilter) {
    wasm_logger::init(wasm_logger::Config::new(console_level(filter)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_filters_to_console_levels() {
        assert_eq!(console_level(LevelFilter::Debug), Level::Debug);
        assert_eq!(console_level(LevelFilter::Error), Level::Error);
        assert_eq!(console_level(LevelFilter::Off), Level::Info);
    }
}
