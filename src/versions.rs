//! Android SDK level to release codename table.

/// (SDK level, codename) pairs in ascending level order.
pub const SDK_VERSION_NAMES: &[(u32, &str)] = &[
    (1, "BASE"),
    (2, "BASE_1_1"),
    (3, "CUPCAKE"),
    (4, "DONUT"),
    (5, "ECLAIR"),
    (6, "ECLAIR_0_1"),
    (7, "ECLAIR_MR1"),
    (8, "FROYO"),
    (9, "GINGERBREAD"),
    (10, "GINGERBREAD_MR1"),
    (11, "HONEYCOMB"),
    (12, "HONEYCOMB_MR1"),
    (13, "HONEYCOMB_MR2"),
    (14, "ICE_CREAM_SANDWICH"),
    (15, "ICE_CREAM_SANDWICH_MR1"),
    (16, "JELLY_BEAN"),
    (17, "JELLY_BEAN_MR1"),
    (18, "JELLY_BEAN_MR2"),
    (19, "KITKAT"),
    (20, "KITKAT_WATCH"),
    (21, "LOLLIPOP"),
    (22, "LOLLIPOP_MR1"),
    (23, "M"),
    (24, "N"),
    (25, "N_MR1"),
    (26, "O"),
    (27, "O_MR1"),
    (28, "P"),
    (29, "Q"),
    (30, "R"),
    (31, "S"),
    (32, "S_V2"),
    (33, "TIRAMISU"),
    (34, "UPSIDE_DOWN_CAKE"),
    (35, "VANILLA_ICE_CREAM"),
    (36, "BAKLAVA"),
];

/// Returns the codename for an SDK level, if known.
pub fn sdk_version_name(level: u32) -> Option<&'static str> {
    SDK_VERSION_NAMES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(sdk_version_name(1), Some("BASE"));
        assert_eq!(sdk_version_name(23), Some("M"));
        assert_eq!(sdk_version_name(33), Some("TIRAMISU"));
        assert_eq!(sdk_version_name(36), Some("BAKLAVA"));
    }

    #[test]
    fn test_unknown_levels() {
        assert_eq!(sdk_version_name(0), None);
        assert_eq!(sdk_version_name(10000), None);
    }

    #[test]
    fn test_table_is_strictly_ascending() {
        assert!(SDK_VERSION_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
