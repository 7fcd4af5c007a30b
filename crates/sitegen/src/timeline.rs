// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Centered, alternating timeline for the conference topics list.
//!
//! Topics at even positions open a `timeline-item` and fill its left side;
//! topics at odd positions fill the right side and close it. An odd count
//! leaves the last item open, so it is closed after the loop.
//!
//! Layout is computed as a flat list of [`TimelineEvent`]s by folding over
//! the indexed topics with an "item open" flag; rendering then turns each
//! event into markup. Neither step keeps state between calls.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// A named subject area shown in the timeline.
///
/// Missing fields deserialize to the empty string, so an absent
/// description and an empty one render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One structural render instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent<'a> {
    /// `<li class="timeline-item">`
    OpenItem,
    /// Left content block for an even-indexed topic.
    Left(&'a Topic),
    /// The dot on the center line, emitted after each left block.
    Marker,
    /// Right content block for an odd-indexed topic.
    Right(&'a Topic),
    /// `</li>`
    CloseItem,
}

/// Number of `timeline-item` containers produced for `topic_count` topics.
pub fn item_count(topic_count: usize) -> usize {
    topic_count.div_ceil(2)
}

/// Compute the render instructions for `topics`.
pub fn layout(topics: &[Topic]) -> Vec<TimelineEvent<'_>> {
    let (mut events, open) = topics.iter().enumerate().fold(
        (Vec::with_capacity(topics.len() * 3 + 1), false),
        |(mut events, _open), (i, topic)| {
            if i % 2 == 0 {
                events.push(TimelineEvent::OpenItem);
                events.push(TimelineEvent::Left(topic));
                events.push(TimelineEvent::Marker);
                (events, true)
            } else {
                events.push(TimelineEvent::Right(topic));
                events.push(TimelineEvent::CloseItem);
                (events, false)
            }
        },
    );

    // Odd count: the last left-only item is still open.
    if open {
        events.push(TimelineEvent::CloseItem);
    }
    events
}

/// Render the timeline items for `topics` as an HTML fragment.
///
/// The fragment is the content of a `<ul class="timeline timeline-centered">`;
/// an empty slice renders as the empty string.
pub fn render_timeline(topics: &[Topic]) -> String {
    layout(topics)
        .into_iter()
        .fold(String::new(), |mut out, event| {
            match event {
                TimelineEvent::OpenItem => out.push_str("<li class=\"timeline-item\">"),
                TimelineEvent::Left(topic) => {
                    out.push_str(&content_block("timeline-content-left", topic).into_string())
                }
                TimelineEvent::Marker => out.push_str("<div class=\"timeline-marker\"></div>"),
                TimelineEvent::Right(topic) => {
                    out.push_str(&content_block("timeline-content-right", topic).into_string())
                }
                TimelineEvent::CloseItem => out.push_str("</li>"),
            }
            out
        })
}

fn content_block(side: &str, topic: &Topic) -> Markup {
    html! {
        div class=(side) {
            div class="mont-600 timeline-title" { (topic.name) }
            p class="timeline-description os-400" { (topic.description) }
        }
    }
}
