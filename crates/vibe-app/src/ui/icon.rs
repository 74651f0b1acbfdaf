use crate::state::Route;

// Glyphs available in egui's bundled emoji fonts.

pub(crate) const BELL: &str = "🔔";
pub(crate) const BOOK: &str = "📖";
pub(crate) const BUILDING: &str = "🏢";
pub(crate) const CHART: &str = "📊";
pub(crate) const CHECK: &str = "✔";
pub(crate) const CHEVRON_LEFT: &str = "⏴";
pub(crate) const CHEVRON_RIGHT: &str = "⏵";
pub(crate) const CLOSE: &str = "🗙";
pub(crate) const DOCUMENT: &str = "📄";
pub(crate) const EXCHANGE: &str = "🔀";
pub(crate) const GEAR: &str = "⚙";
pub(crate) const HOME: &str = "🏠";
pub(crate) const INFO: &str = "ℹ";
pub(crate) const LOG_OUT: &str = "🚪";
pub(crate) const MAIL: &str = "✉";
pub(crate) const MESSAGE: &str = "💬";
pub(crate) const RESET: &str = "🔄";
pub(crate) const SHIELD: &str = "🛡";
pub(crate) const USER: &str = "👤";
pub(crate) const WARNING: &str = "⚠";
pub(crate) const WRENCH: &str = "🔧";

#[must_use]
pub(crate) const fn route(route: Route) -> &'static str {
    match route {
        Route::Companies => BUILDING,
        Route::Catalog => BOOK,
        Route::Quotes => DOCUMENT,
        Route::Services => WRENCH,
        Route::Reports => CHART,
        Route::AuditLogs => SHIELD,
        Route::Migrations => EXCHANGE,
        Route::MyCompany => HOME,
        Route::Settings => GEAR,
        Route::Account => USER,
        Route::Messages => MESSAGE,
        Route::Docs => BOOK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // egui renders each glyph from a single code point; emoji variation
    // selectors and joiners fall back to replacement boxes.
    #[test]
    fn glyphs_are_single_code_points() {
        let glyphs = [
            BELL,
            BOOK,
            BUILDING,
            CHART,
            CHECK,
            CHEVRON_LEFT,
            CHEVRON_RIGHT,
            CLOSE,
            DOCUMENT,
            EXCHANGE,
            GEAR,
            HOME,
            INFO,
            LOG_OUT,
            MAIL,
            MESSAGE,
            RESET,
            SHIELD,
            USER,
            WARNING,
            WRENCH,
        ];
        for glyph in glyphs {
            assert_eq!(glyph.chars().count(), 1, "{glyph:?}");
        }
    }

    #[test]
    fn every_route_has_a_glyph() {
        for page in Route::ALL {
            assert!(!route(page).is_empty());
        }
    }
}
