use derive_more::Display;

/// One joined group as advertised by the upstream group listing.
///
/// The `Display` impl renders the fragment placed in the panel's group
/// container.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(
    fmt = "<div class=\"group-container\"><b>{}</b><br /><code>{}</code></div>",
    name,
    id
)]
pub struct Group {
    pub name: String,
    pub id: String,
}

impl Group {
    /// The token after the rightmost colon is the id; everything before it is
    /// the name, which may itself contain colons. A line with no colon is all
    /// id.
    pub fn parse_line(line: &str) -> Self {
        match line.rsplit_once(':') {
            Some((name, id)) => Self {
                name: name.to_owned(),
                id: id.to_owned(),
            },
            None => Self {
                name: String::new(),
                id: line.to_owned(),
            },
        }
    }
}

/// Parses the newline-delimited `name:id` body of the upstream group listing.
/// Lines are trimmed first; blank lines yield no record. Order is preserved.
pub fn parse_group_list(body: &str) -> Vec<Group> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Group::parse_line)
        .collect()
}
