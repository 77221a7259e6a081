use crate::capability_engine::defaults::{SERIES_2_SECTIONS, SERIES_3_SECTIONS};
use crate::domain::Series;

/// Configuration sections reachable from the configuration menu. Unknown series get the series 2 menu.
pub fn available_sections(series: Series) -> &'static [&'static str] {
    match series {
        Series::Three => SERIES_3_SECTIONS,
        Series::Two | Series::Unknown => SERIES_2_SECTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::series_2(Series::Two, false)]
    #[case::series_3(Series::Three, true)]
    #[case::unknown(Series::Unknown, false)]
    fn ptp_and_upload_only_on_series_3(#[case] series: Series, #[case] expected: bool) {
        let sections = available_sections(series);

        assert_eq!(sections.contains(&"ptp"), expected);
        assert_eq!(sections.contains(&"upload"), expected);
        assert!(sections.contains(&"general"));
    }
}
