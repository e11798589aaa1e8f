/// Identification of a use case for menus, page ids and logs
pub trait UseCaseMetadata {
    /// Index such as `"u201"`
    fn usecase_index() -> &'static str;

    /// Technical name such as `"grc_return"`
    fn usecase_name() -> &'static str;

    /// Title shown on the page header
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// `"u201_grc_return"`
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
