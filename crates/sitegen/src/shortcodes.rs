// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Built-in shortcodes for markdown pages.
//!
//! ```markdown
//! # {{ site_title /}} topics
//!
//! {{ topics /}}
//!
//! ![map]({{ url path="/assets/images/map.png" /}})
//! ```

use crate::config::ImportantDate;
use crate::markdown::{ShortcodeArgs, Shortcodes};
use crate::sections;
use crate::timeline::Topic;
use crate::urls::UrlMode;
use std::sync::Arc;

/// Data the shortcodes can reach. Shared by every page of one build.
#[derive(Debug, Clone)]
pub struct ShortcodeContext {
    pub site_title: String,
    pub topics: Vec<Topic>,
    pub dates: Vec<ImportantDate>,
    pub urls: UrlMode,
}

/// Build a `Shortcodes` registry whose closures capture `ctx`.
pub fn register_shortcodes(ctx: Arc<ShortcodeContext>) -> Shortcodes {
    let mut shortcodes = Shortcodes::new();

    // {{ site_title /}}
    {
        let c = ctx.clone();
        shortcodes.register("site_title", move |_args: &ShortcodeArgs| {
            maud::html! { (c.site_title) }.into_string()
        });
    }

    // {{ topics /}}: the full timeline list
    {
        let c = ctx.clone();
        shortcodes.register("topics", move |_args: &ShortcodeArgs| {
            single_line(sections::timeline_list(&c.topics).into_string())
        });
    }

    // {{ dates /}}: paired important dates, without the section heading
    {
        let c = ctx.clone();
        shortcodes.register("dates", move |_args: &ShortcodeArgs| {
            single_line(
                maud::html! {
                    div class="row" { (sections::date_entries(&c.dates)) }
                }
                .into_string(),
            )
        });
    }

    // {{ url path="/assets/images/hotel.svg" /}}
    {
        let c = ctx.clone();
        shortcodes.register("url", move |args: &ShortcodeArgs| {
            c.urls.rewrite(args.get_str("path").unwrap_or(""))
        });
    }

    // {{ base_url /}}
    {
        let c = ctx;
        shortcodes.register("base_url", move |_args: &ShortcodeArgs| c.urls.rewrite("/"));
    }

    shortcodes
}

/// Block HTML spliced into markdown must not contain a blank line, or
/// pulldown-cmark ends the HTML block there and wraps the remainder in
/// `<p>`. Newlines carried in from configured text become `&#10;`.
fn single_line(html: String) -> String {
    if html.contains('\n') {
        html.replace('\n', "&#10;")
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{preprocess_shortcodes, render_markdown};

    fn context(urls: UrlMode) -> Arc<ShortcodeContext> {
        Arc::new(ShortcodeContext {
            site_title: "DevConf.US & friends".into(),
            topics: vec![Topic::new("Serverless", ""), Topic::new("Open Source & Process", "")],
            dates: vec![ImportantDate { when: "TBD".into(), what: String::new() }],
            urls,
        })
    }

    #[test]
    fn test_register_shortcodes_creates_all() {
        let sc = register_shortcodes(context(UrlMode::site("/")));
        assert_eq!(sc.names(), vec!["base_url", "dates", "site_title", "topics", "url"]);
    }

    #[test]
    fn test_site_title_is_escaped() {
        let sc = register_shortcodes(context(UrlMode::site("/")));
        assert_eq!(
            preprocess_shortcodes("{{ site_title /}}", &sc).unwrap(),
            "DevConf.US &amp; friends"
        );
    }

    #[test]
    fn test_topics_shortcode() {
        let sc = register_shortcodes(context(UrlMode::site("/")));
        let html = preprocess_shortcodes("{{ topics /}}", &sc).unwrap();
        assert!(html.starts_with("<ul class=\"timeline timeline-centered\">"));
        assert_eq!(html.matches("<li class=\"timeline-item\">").count(), 1);
        assert!(html.contains("timeline-content-right"));
    }

    #[test]
    fn test_dates_shortcode_pads() {
        let sc = register_shortcodes(context(UrlMode::site("/")));
        let html = preprocess_shortcodes("{{ dates /}}", &sc).unwrap();
        assert_eq!(html.matches("border-bottom").count(), 2);
    }

    #[test]
    fn test_url_shortcode_modes() {
        let site = register_shortcodes(context(UrlMode::site("/devconf/")));
        assert_eq!(
            preprocess_shortcodes(r#"{{ url path="/us/hotels" /}}"#, &site).unwrap(),
            "/devconf/us/hotels"
        );
        assert_eq!(preprocess_shortcodes("{{ base_url /}}", &site).unwrap(), "/devconf/");

        let local = register_shortcodes(context(UrlMode::local("/b")));
        assert_eq!(
            preprocess_shortcodes(r#"{{ url path="/us/hotels" /}}"#, &local).unwrap(),
            "file:///b/us/hotels"
        );
    }

    #[test]
    fn test_multiline_descriptions_stay_in_one_html_block() {
        let ctx = Arc::new(ShortcodeContext {
            site_title: "DevConf.US".into(),
            topics: vec![Topic::new("A", "first para\n\nsecond para"), Topic::new("B", "")],
            dates: vec![
                ImportantDate { when: "June\n\n1".into(), what: "CfP".into() },
                ImportantDate { when: "July".into(), what: "Talks".into() },
            ],
            urls: UrlMode::site("/"),
        });
        let sc = register_shortcodes(ctx);

        let topics = render_markdown(&preprocess_shortcodes("{{ topics /}}\n", &sc).unwrap());
        assert!(!topics.contains("<p>"), "{}", topics);
        assert!(topics.contains("first para&#10;&#10;second para"));
        assert_eq!(topics.matches("<li").count(), topics.matches("</li>").count());
        assert_eq!(topics.matches("<div").count(), topics.matches("</div>").count());

        let dates = render_markdown(&preprocess_shortcodes("{{ dates /}}\n", &sc).unwrap());
        assert!(!dates.contains("<p>"), "{}", dates);
        assert_eq!(dates.matches("<div").count(), dates.matches("</div>").count());
    }
}
