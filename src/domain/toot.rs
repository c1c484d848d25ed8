use serde::Serialize;

use super::Entry;

/// Request body for POST /api/v1/statuses. `spoiler_text` is only
/// present when the entry carries a content warning.
#[derive(Debug, Clone, Serialize)]
pub struct Toot {
    pub status: String,
    pub visibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_text: Option<String>,
}

impl Toot {
    pub fn from_entry(entry: &Entry, visibility: &str, cw_tag: &str, skip_tags: &[String]) -> Self {
        Self {
            status: build_status(entry, cw_tag, skip_tags),
            visibility: visibility.to_string(),
            spoiler_text: entry.content_warning.then(|| entry.title.clone()),
        }
    }
}

/// Render the status text for an entry.
///
/// Layout: optional category prefix, title, optional author line, the
/// link framed by blank lines, then the remaining tags as hashtags.
/// The skip set (configured skip tags plus "blog", "documentation" and
/// the CW tag) is excluded from the hashtag list. No truncation to the
/// platform's character limit is performed.
pub fn build_status(entry: &Entry, cw_tag: &str, skip_tags: &[String]) -> String {
    let mut status = String::new();

    if entry.tags.iter().any(|t| t == "blog") {
        status.push_str("New #Blog: ");
    } else if entry.tags.iter().any(|t| t == "documentation") {
        status.push_str("New #Documentation: ");
    }

    status.push_str(&entry.title);
    status.push('\n');

    if let Some(author) = &entry.author {
        status.push_str("Author: ");
        status.push_str(author);
        status.push('\n');
    }

    status.push_str("\n\n");
    status.push_str(&entry.link);
    status.push_str("\n\n");

    for tag in &entry.tags {
        let skipped =
            tag == "blog" || tag == "documentation" || tag == cw_tag || skip_tags.contains(tag);
        if skipped {
            continue;
        }
        status.push('#');
        status.push_str(&tag.replace(' ', ""));
        status.push(' ');
    }

    status
}
