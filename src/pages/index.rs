use yew::prelude::*;

use crate::config::SiteConfig;
use crate::hooks::use_site_config;
use crate::pages::{
    admission::AdmissionProcess, colleges::CollegeComparison, counselling::CounsellingSection,
    documentation::DocumentationSection, footer::FooterSection, hero::HeroSection,
    mistakes::MistakesSection, webinars::PlacementWebinarSection,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Mistakes,
    Colleges,
    Counselling,
    Documentation,
    Admission,
    Webinars,
    Footer,
}

/// Sections composed into the page, top to bottom.
pub fn sections(config: &SiteConfig) -> Vec<Section> {
    let mut out = vec![Section::Hero, Section::Mistakes, Section::Colleges, Section::Counselling];
    if config.include_documentation {
        out.push(Section::Documentation);
    }
    out.push(Section::Admission);
    if config.include_webinars {
        out.push(Section::Webinars);
    }
    if config.include_footer {
        out.push(Section::Footer);
    }
    out
}

fn render(section: Section) -> Html {
    match section {
        Section::Hero => html! { <HeroSection key="hero" /> },
        Section::Mistakes => html! { <MistakesSection key="mistakes" /> },
        Section::Colleges => html! { <CollegeComparison key="colleges" /> },
        Section::Counselling => html! { <CounsellingSection key="counselling" /> },
        Section::Documentation => html! { <DocumentationSection key="documentation" /> },
        Section::Admission => html! { <AdmissionProcess key="admission" /> },
        Section::Webinars => html! { <PlacementWebinarSection key="webinars" /> },
        Section::Footer => html! { <FooterSection key="footer" /> },
    }
}

#[function_component(Index)]
pub fn index() -> Html {
    let config = use_site_config();
    let sections = sections(&config);
    log::info!("Rendering landing page with {} sections", sections.len());

    html! {
        <div class="page">
            { for sections.into_iter().map(render) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_matches_the_published_order() {
        assert_eq!(
            sections(&SiteConfig::default()),
            [Section::Hero, Section::Mistakes, Section::Colleges, Section::Counselling, Section::Admission]
        );
    }

    #[test]
    fn footer_toggle_appends_the_footer() {
        let config = SiteConfig {
            include_footer: true,
            ..SiteConfig::default()
        };
        let sections = sections(&config);
        assert_eq!(sections.last(), Some(&Section::Footer));
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn every_section_enabled() {
        let config = SiteConfig {
            include_footer: true,
            include_documentation: true,
            include_webinars: true,
            fallback_on_unsupported: true,
        };
        assert_eq!(
            sections(&config),
            [
                Section::Hero,
                Section::Mistakes,
                Section::Colleges,
                Section::Counselling,
                Section::Documentation,
                Section::Admission,
                Section::Webinars,
                Section::Footer,
            ]
        );
    }

    #[test]
    fn composition_is_stable_across_calls() {
        let config = SiteConfig::default();
        assert_eq!(sections(&config), sections(&config));
    }
}
