//! String-templated HTML for the panel pages. The two pages are small enough
//! that a template engine would outweigh them.

use crate::models::error::UpstreamError;
use crate::models::Group;

const GROUPS_SLOT: &str = "{groups}";
const MESSAGE_SLOT: &str = "{message}";

const PANEL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>spoofpanel</title>
    <style>
        body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
        .group-container { border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem; margin: 0.5rem 0; }
        .group-error { color: #a00; }
        form label { display: block; margin: 0.75rem 0; }
        form input { width: 100%; }
    </style>
</head>
<body>
    <h1>spoofpanel</h1>

    <h2>Joined groups</h2>
    <div id="gids">{groups}</div>

    <h2>Send a spoofed reply</h2>
    <form method="post" action="/send">
        <label>Chat ID (group or user) <input type="text" name="cid" /></label>
        <label>Sender ID to spoof <input type="text" name="sid" /></label>
        <label>Spoofed message <input type="text" name="spf_msg" /></label>
        <label>Reply message <input type="text" name="rpl_msg" /></label>
        <button type="submit">Send</button>
    </form>
</body>
</html>
"#;

const NOTICE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>spoofpanel</title>
</head>
<body>
    <p>{message}</p>
    <p><a href="/">Back to the panel</a></p>
</body>
</html>
"#;

/// The full panel page with the group container filled in.
pub fn panel_page(group_listing: &str) -> String {
    PANEL_TEMPLATE.replace(GROUPS_SLOT, group_listing)
}

/// Concatenated fragments for the group container, in listing order.
pub fn group_list(groups: &[Group]) -> String {
    groups.iter().map(ToString::to_string).collect()
}

/// Visible error state for the group container.
pub fn group_list_error(error: &UpstreamError) -> String {
    format!("<div class=\"group-error\">Could not load groups: {error}</div>")
}

/// Full-page notice carrying the outcome of a submission.
pub fn notice_page(message: &str) -> String {
    NOTICE_TEMPLATE.replace(MESSAGE_SLOT, message)
}
