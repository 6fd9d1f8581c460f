use crate::{
    config::model::Config,
    filter::{
        element::SvgElement,
        markup::{filter_code, filter_container},
    },
    keyframes::css::{PreviewStyle, css_code, keyframes_stylesheet},
};

/// Everything a preview surface shows for one configuration.
///
/// Always rebuilt in full from a snapshot; nothing is diffed or cached, so the
/// outputs are consistent with each other by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifacts {
    /// Hidden `svg` holding the filter chain, for injection into a page.
    pub filters: SvgElement,
    /// `@keyframes` stylesheet for injection into a page.
    pub stylesheet: String,
    /// Inline style for each preview target.
    pub preview: PreviewStyle,
    /// Copyable filter markup.
    pub filter_code: String,
    /// Copyable CSS.
    pub css_code: String,
}

impl Artifacts {
    /// Regenerate every artifact from `config`.
    #[tracing::instrument(skip_all)]
    pub fn regenerate(config: &Config) -> Self {
        Self {
            filters: filter_container(config),
            stylesheet: keyframes_stylesheet(),
            preview: PreviewStyle::from_config(config),
            filter_code: filter_code(config),
            css_code: css_code(config),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/artifacts.rs"]
mod tests;
