// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Landing page sections.
//!
//! Everything here is direct composition of configured content; the only
//! generated structure is the topics timeline (see [`crate::timeline`]).
//! Class names follow the site stylesheet (`site.css`, `timeline.css`).

use crate::config::{About, ImportantDate, SiteConfig, TravelCard};
use crate::markdown::render_inline;
use crate::timeline::{self, Topic};
use crate::urls::UrlMode;
use maud::{Markup, PreEscaped, html};

const TOPICS_HEADING: &str = "Topics";
const DATES_HEADING: &str = "Important dates";
const TRAVEL_HEADING: &str = "How to get there?";
const MORE_INFO: &str = "MORE INFORMATION";

/// Masthead: navigation bar, social icon column and the event banner.
pub fn hero(config: &SiteConfig, urls: &UrlMode) -> Markup {
    let event = &config.event;
    html! {
        header class="masthead vh-100" {
            nav class="mb-1 navbar navbar-expand-lg navbar-dark fixed-top" {
                span class="nav-brand" {
                    a href="#" class="home" {
                        @if let Some(logo) = &event.logo {
                            img src=(urls.rewrite(logo)) alt=(event.logo_alt);
                        } @else {
                            (config.site.site_name())
                        }
                    }
                }
                button class="navbar-toggler" type="button" data-toggle="collapse"
                    data-target="#navbarMobile" aria-controls="navbarMobile"
                    aria-expanded="false" aria-label="Toggle navigation" {
                    span class="navbar-toggler-icon" {}
                }
                div class="collapse navbar-collapse" id="navbarMobile" {
                    ul class="navbar-nav ml-auto pr-5" {
                        @for link in &config.nav {
                            li class="nav-item active px-3" {
                                a href=(urls.rewrite(&link.href)) class="nav-link local"
                                    target=[link.external.then_some("_blank")] {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
            }
            div class="row mr-0 mt-5" style="height: 85%" {
                div class="col-lg-1 border-right text-center pr-0" {
                    @for social in &config.social {
                        a href=(social.href) target="_blank" title=(social.title) {
                            img src=(urls.rewrite(&social.icon)) alt=(social.title.to_lowercase())
                                class="social-icon";
                        }
                    }
                }
                div class="col-lg-10 h-100 px-0" {
                    @if event.logo.is_some() || event.abstract_logo.is_some() {
                        div style="padding: 5% 0 0 0" {
                            @if let Some(logo) = &event.logo {
                                img src=(urls.rewrite(logo)) alt=(event.logo_alt) class="text-logo";
                            }
                            @if let Some(art) = &event.abstract_logo {
                                img src=(urls.rewrite(art)) alt=(event.abstract_logo_alt) class="abstract-logo";
                            }
                        }
                    }
                    div class="heading-text mont-400 h5 pb-5" { (event.tagline) }
                    div class="heading-text mont-700 h1 pt-5" { (event.date) }
                    div class="heading-text mont-700 h4" { (event.location) }
                    @if let Some(cta) = &event.cta {
                        div class="heading-text pt-5 mt-5" {
                            a href=(urls.rewrite(&cta.href)) target="_blank"
                                class="border p-3 h2 mont-700"
                                style="border-width: 3px !important;" {
                                (cta.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Image and text of the "about" block. Paragraphs are inline markdown.
pub fn about(about: &About, urls: &UrlMode) -> Markup {
    html! {
        div class="row mt-4 py-5" {
            @if let Some(image) = &about.image {
                div class="col-lg-4 mx-5 mb-5 text-center" {
                    img src=(urls.rewrite(image)) class="mw-100" alt=(about.image_alt);
                }
            }
            div class="col-lg-6 px-5" {
                h1 class="mont-700 underline pb-4" { (about.heading) }
                div class="os-400" {
                    @for paragraph in &about.paragraphs {
                        p { (PreEscaped(render_inline(paragraph))) }
                    }
                }
            }
        }
    }
}

/// The topics heading and the centered timeline list.
pub fn topics(topics: &[Topic]) -> Markup {
    html! {
        div class="row" {
            div class="h1 mx-5 mont-700" { (TOPICS_HEADING) }
        }
        div class="row py-4" {
            div class="col-xs-10 col-xs-offset-1 col-sm-10 col-sm-offset-2 mx-auto" {
                (timeline_list(topics))
            }
        }
    }
}

/// `<ul class="timeline timeline-centered">` around the timeline items.
pub fn timeline_list(topics: &[Topic]) -> Markup {
    html! {
        ul class="timeline timeline-centered" {
            (PreEscaped(timeline::render_timeline(topics)))
        }
    }
}

/// Important dates, laid out in left/right column pairs.
///
/// An odd number of dates is padded with an empty entry so the last row
/// keeps its pair.
pub fn important_dates(dates: &[ImportantDate]) -> Markup {
    html! {
        section id="news" class="mx-auto py-5 col-lg-11" {
            div class="row" {
                div class="h1 mx-5 mont-700" { (DATES_HEADING) }
            }
            div class="row" {
                (date_entries(dates))
            }
        }
    }
}

/// Just the paired date cells, without the section wrapper.
pub fn date_entries(dates: &[ImportantDate]) -> Markup {
    let padding = ImportantDate::default();
    let padded = dates
        .iter()
        .chain((dates.len() % 2 == 1).then_some(&padding));

    html! {
        @for (i, date) in padded.enumerate() {
            div class=(date_column_class(i)) {
                div class="row" {
                    div class="col-4 h5 mont-700" { (date.when) }
                    div class="col-8" {
                        div class="row" {
                            div class="col mont-600" { (date.what) }
                        }
                    }
                }
            }
        }
    }
}

fn date_column_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "col-10 col-md-5 mr-md-0 mx-auto py-3 border-bottom"
    } else {
        "col-10 col-md-5 ml-md-0 mx-auto py-3 border-bottom"
    }
}

/// Travel information cards.
pub fn travel(cards: &[TravelCard], urls: &UrlMode) -> Markup {
    html! {
        section id="travel" class="mx-auto py-5 col-lg-11" {
            div class="row" {
                div class="mont-700 h1 underline position-relative mx-5 pb-4" { (TRAVEL_HEADING) }
            }
            div class="row py-4" {
                @for (i, card) in cards.iter().enumerate() {
                    div class={ "col-xl-3 container card-body my-2 " (card_margin(i, cards.len())) }
                        style=[card.background.as_ref().map(|bg| format!("background: {}", bg))] {
                        div class="row h-100 align-items-center" {
                            div class="col text-center" {
                                @if let Some(icon) = &card.icon {
                                    img src=(urls.rewrite(icon)) class="my-4" alt=(card.icon_alt)
                                        style="height: 74px";
                                }
                                h2 class="mont-700 mb-0" { (card.title) }
                                div class="card-text os-400 pt-3" { (card.text) }
                                @if let Some(href) = &card.href {
                                    p class="card-text my-5" {
                                        a href=(urls.rewrite(href)) class="border p-3 mont-700" {
                                            (MORE_INFO)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Outer cards hug the centered group; a lone card is centered.
fn card_margin(index: usize, count: usize) -> &'static str {
    if count == 1 {
        "mx-xl-auto"
    } else if index == 0 {
        "ml-xl-auto mr-xl-3"
    } else if index + 1 == count {
        "ml-xl-3 mr-xl-auto"
    } else {
        "mx-xl-3"
    }
}

/// Compose the full landing page body.
pub fn landing_page(config: &SiteConfig, urls: &UrlMode) -> Markup {
    diagnostics::debug!(
        "Composing landing page: {topics} topics, {dates} dates, {cards} travel cards",
        topics: config.topics.len(),
        dates: config.dates.len(),
        cards: config.travel.len()
    );

    let has_about = config.about.is_some() || !config.topics.is_empty();
    html! {
        (hero(config, urls))
        @if has_about {
            section id="about" class="mx-auto col-lg-11" {
                @if let Some(about_cfg) = &config.about {
                    (about(about_cfg, urls))
                }
                @if !config.topics.is_empty() {
                    (topics(&config.topics))
                }
            }
        }
        @if !config.dates.is_empty() {
            (important_dates(&config.dates))
        }
        @if !config.travel.is_empty() {
            (travel(&config.travel, urls))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EventInfo, NavLink, SiteMeta, SocialLink};

    fn site() -> SiteConfig {
        SiteConfig {
            site: SiteMeta {
                title: "DevConf.US 2020".into(),
                name: Some("DevConf.US".into()),
                base_url: "/".into(),
                description: String::new(),
                url: None,
                image: None,
            },
            event: EventInfo {
                tagline: "open source community conference".into(),
                date: "August, 2020".into(),
                location: "Boston, USA".into(),
                logo: Some("/assets/images/devconf-logo-us-reverse.svg".into()),
                logo_alt: "DevConf logo".into(),
                abstract_logo: Some("/assets/images/devconf-abstract.svg".into()),
                abstract_logo_alt: "DevConf abstract logo".into(),
                cta: None,
            },
            nav: vec![
                NavLink { label: "About & Topics".into(), href: "#about".into(), external: false },
                NavLink { label: "Policies".into(), href: "/coc".into(), external: true },
            ],
            social: vec![SocialLink {
                title: "Twitter".into(),
                href: "https://twitter.com/devconf_us".into(),
                icon: "/assets/images/twitter.svg".into(),
            }],
            about: None,
            topics: vec![],
            dates: vec![],
            travel: vec![],
            pages: vec![],
            partials: Default::default(),
            stylesheets: vec![],
            static_dir: None,
        }
    }

    fn card(title: &str) -> TravelCard {
        TravelCard {
            title: title.into(),
            icon: None,
            icon_alt: String::new(),
            text: String::new(),
            href: None,
            background: None,
        }
    }

    #[test]
    fn test_hero_links() {
        let html = hero(&site(), &UrlMode::site("/")).into_string();
        assert!(html.contains("August, 2020"));
        assert!(html.contains("Boston, USA"));
        assert!(html.contains(r##"<a href="#about" class="nav-link local">About &amp; Topics</a>"##), "{}", html);
        assert!(html.contains(r#"<a href="/coc" class="nav-link local" target="_blank">Policies</a>"#), "{}", html);
        assert!(html.contains(r#"alt="twitter" class="social-icon""#), "{}", html);
        assert!(!html.contains("border-width: 3px"));
    }

    #[test]
    fn test_hero_abstract_logo() {
        let html = hero(&site(), &UrlMode::site("/")).into_string();
        assert!(html.contains(
            r#"<img src="/assets/images/devconf-abstract.svg" alt="DevConf abstract logo" class="abstract-logo">"#
        ), "{}", html);

        let mut config = site();
        config.event.abstract_logo = None;
        let html = hero(&config, &UrlMode::site("/")).into_string();
        assert!(!html.contains("abstract-logo"));
        assert!(html.contains(r#"class="text-logo""#));
    }

    #[test]
    fn test_hero_local_urls() {
        let html = hero(&site(), &UrlMode::local("/srv/build")).into_string();
        assert!(html.contains("file:///srv/build/assets/images/twitter.svg"));
        assert!(html.contains(r##"href="#about""##));
    }

    #[test]
    fn test_timeline_list_wraps_items() {
        let html = timeline_list(&[Topic::new("Serverless", "")]).into_string();
        assert!(html.starts_with(r#"<ul class="timeline timeline-centered"><li class="timeline-item">"#));
        assert!(html.ends_with("</li></ul>"));
    }

    #[test]
    fn test_dates_are_padded_to_pairs() {
        let dates = vec![ImportantDate { when: "TBD".into(), what: "CfP opens".into() }];
        let html = date_entries(&dates).into_string();
        assert_eq!(html.matches("mr-md-0").count(), 1);
        assert_eq!(html.matches("ml-md-0").count(), 1);
        assert!(html.contains(r#"<div class="col-4 h5 mont-700">TBD</div>"#));
        assert!(html.contains(r#"<div class="col-4 h5 mont-700"></div>"#));
    }

    #[test]
    fn test_dates_even_not_padded() {
        let dates = vec![ImportantDate::default(), ImportantDate::default()];
        let html = date_entries(&dates).into_string();
        assert_eq!(html.matches("border-bottom").count(), 2);
    }

    #[test]
    fn test_card_margins() {
        assert_eq!(card_margin(0, 1), "mx-xl-auto");
        assert_eq!(card_margin(0, 3), "ml-xl-auto mr-xl-3");
        assert_eq!(card_margin(1, 3), "mx-xl-3");
        assert_eq!(card_margin(2, 3), "ml-xl-3 mr-xl-auto");
    }

    #[test]
    fn test_travel_card_background_and_link() {
        let mut hotels = card("Hotels");
        hotels.background = Some("#8e83e4".into());
        hotels.href = Some("/us/hotels".into());
        let html = travel(&[card("Getting around"), hotels], &UrlMode::site("/")).into_string();
        assert!(html.contains(r#"style="background: #8e83e4""#), "{}", html);
        assert_eq!(html.matches("MORE INFORMATION").count(), 1);
        assert!(html.contains(r#"href="/us/hotels""#));
    }

    #[test]
    fn test_about_renders_markdown_paragraphs() {
        let about_cfg = About {
            heading: "About DevConf".into(),
            image: None,
            image_alt: String::new(),
            paragraphs: vec!["There is **no** ticket charge.".into()],
        };
        let html = about(&about_cfg, &UrlMode::site("/")).into_string();
        assert!(html.contains("<p>There is <strong>no</strong> ticket charge.</p>"), "{}", html);
    }

    #[test]
    fn test_landing_omits_empty_sections() {
        let html = landing_page(&site(), &UrlMode::site("/")).into_string();
        assert!(html.contains("masthead"));
        assert!(!html.contains("id=\"about\""));
        assert!(!html.contains("id=\"news\""));
        assert!(!html.contains("id=\"travel\""));
    }

    #[test]
    fn test_landing_includes_topics() {
        let mut config = site();
        config.topics = vec![Topic::new("A", ""), Topic::new("B", ""), Topic::new("C", "")];
        let html = landing_page(&config, &UrlMode::site("/")).into_string();
        assert!(html.contains("id=\"about\""));
        assert!(html.contains(TOPICS_HEADING));
        assert_eq!(html.matches("<li class=\"timeline-item\">").count(), 2);
    }
}
