use anyhow::Result;

use crate::common::SiteContext;

/// Print the topics timeline fragment, as embedded in the landing page.
pub fn topics_command(site: &SiteContext, mut out: impl FnMut(String)) -> Result<()> {
    let topics = &site.config.topics;
    diagnostics::debug!(
        "Rendering {count} topics into {items} timeline items",
        count: topics.len(),
        items: sitegen::timeline::item_count(topics.len())
    );
    out(sitegen::render_timeline(topics));
    Ok(())
}
