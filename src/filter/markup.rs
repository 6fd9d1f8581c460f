use crate::{
    config::model::Config,
    filter::{
        element::SvgElement,
        spec::{FilterSpec, NOISE_RESULT, filter_chain},
    },
    foundation::core::{Num, filter_id},
};

/// Inline style of the zero-size `svg` that hosts the filter definitions.
pub const HIDDEN_CONTAINER_STYLE: &str = "position:absolute;width:0;height:0;";

impl FilterSpec {
    /// Structured form: `filter#svg_filter_<i>` > `feTurbulence`, `feDisplacementMap`.
    pub fn to_element(&self) -> SvgElement {
        let t = &self.turbulence;
        let turbulence = SvgElement::new("feTurbulence")
            .with_attr("type", t.kind)
            .with_attr("baseFrequency", Num(t.base_frequency))
            .with_attr("numOctaves", t.num_octaves)
            .with_attr("result", NOISE_RESULT)
            .with_attr("seed", t.seed);

        let displacement = SvgElement::new("feDisplacementMap")
            .with_attr("in", "SourceGraphic")
            .with_attr("in2", NOISE_RESULT)
            .with_attr("scale", Num(self.displacement.scale));

        SvgElement::new("filter")
            .with_attr("id", filter_id(self.index))
            .with_child(turbulence)
            .with_child(displacement)
    }

    /// Text form: the filter line indented by two spaces, primitives by four.
    pub fn to_text(&self) -> String {
        self.to_element().to_indented(1)
    }
}

/// Text form of every filter, joined by newlines.
pub fn filters_text(config: &Config) -> String {
    filter_chain(config)
        .iter()
        .map(FilterSpec::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Zero-size `svg` element carrying every filter, ready to inject into a page.
pub fn filter_container(config: &Config) -> SvgElement {
    filter_chain(config).iter().fold(
        SvgElement::new("svg").with_attr("style", HIDDEN_CONTAINER_STYLE),
        |svg, f| svg.with_child(f.to_element()),
    )
}

/// Copyable HTML snippet defining the filter chain.
pub fn filter_code(config: &Config) -> String {
    filter_container(config).to_indented(0)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/markup.rs"]
mod tests;
