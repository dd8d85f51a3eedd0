use unicode_width::UnicodeWidthStr;

use super::lister::DirectoryListing;

/// Format a listing as plain text: one line per entry, then the info line.
pub fn format_listing(listing: &DirectoryListing) -> String {
    let name_width = listing
        .entries
        .iter()
        .map(|e| e.display_name.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for entry in &listing.entries {
        let padding = name_width - entry.display_name.width();
        output.push_str(&format!(
            "{}{}  {}\n",
            entry.display_name,
            " ".repeat(padding),
            entry.kind().label()
        ));
    }
    output.push_str(&listing.summary());
    output
}

/// Format a listing as JSON
pub fn format_json(listing: &DirectoryListing, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(listing)
    } else {
        serde_json::to_string(listing)
    }
}
