const ROOT_PREFIX: &str = "TRAPEZOIDAL";

fn var(group: &str, key: &str) -> Option<String> {
    std::env::var(format!("{}_{}_{}", ROOT_PREFIX, group, key)).ok()
}

pub(crate) mod svg {
    use std::path;

    use crate::debug::svg::SvgOutputLevel;

    const GROUP: &str = "SVG";

    /// Directory the snapshots are written to; svg output is disabled without it
    pub(crate) fn output_path() -> Option<path::PathBuf> {
        super::var(GROUP, "OUTPUT_PATH").map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        super::var(GROUP, "HIDE_LABELS").is_none()
    }

    /// `3`/`all`: before and after every insertion, `2`/`major`: after every insertion,
    /// `1`/`result`: the finished trapezoidation only
    pub(crate) fn output_level() -> SvgOutputLevel {
        match super::var(GROUP, "OUTPUT_LEVEL").map(|value| value.to_ascii_lowercase()).as_deref() {
            Some("3") | Some("all") => SvgOutputLevel::AllSteps,
            Some("2") | Some("major") => SvgOutputLevel::MajorSteps,
            Some("1") | Some("result") => SvgOutputLevel::ResultOnly,
            _ => SvgOutputLevel::None,
        }
    }
}
