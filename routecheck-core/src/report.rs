//! Hierarchical diagnostic reports.
//!
//! A [`Report`] collects human-readable failure messages in a tree shaped
//! like the structure being checked: one root per solution and one child
//! per route. Children are only attached while they hold entries, so a
//! non-empty report always means "something below here failed".

use std::fmt;

use serde::Serialize;

/// A single entry held by a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A plain failure message.
    Message(String),
    /// A nested report that held at least one entry when attached.
    Report(Report),
}

/// Named container of failure messages and nested reports.
///
/// # Examples
/// ```
/// use routecheck_core::Report;
///
/// let mut route = Report::new("vehicle 1");
/// route.record(false, "Vehicle 1 exceeds its capacity by 3");
///
/// let mut root = Report::new("solution");
/// root.record_subreport(route);
/// root.record_subreport(Report::new("vehicle 2"));
///
/// assert!(root.is_failing());
/// assert_eq!(root.len(), 1);
/// assert_eq!(
///     root.render(),
///     vec![
///         "Errors for solution:".to_owned(),
///         "  Errors for vehicle 1:".to_owned(),
///         "  - Vehicle 1 exceeds its capacity by 3".to_owned(),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    name: String,
    entries: Vec<Entry>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Report name, used in the rendered header.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of direct entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the report holds at least one entry.
    ///
    /// Nested reports are only attached when they are failing themselves,
    /// so this shallow check covers the whole subtree.
    #[must_use]
    pub const fn is_failing(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Append `message` when `condition` does not hold.
    pub fn record(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            self.entries.push(Entry::Message(message.into()));
        }
    }

    /// Append the message produced by `message` when `condition` does not
    /// hold. The closure only runs on failure.
    pub fn record_with<F>(&mut self, condition: bool, message: F)
    where
        F: FnOnce() -> String,
    {
        if !condition {
            self.entries.push(Entry::Message(message()));
        }
    }

    /// Attach `subreport` if it is failing; empty reports leave no trace.
    pub fn record_subreport(&mut self, subreport: Self) {
        if subreport.is_failing() {
            self.entries.push(Entry::Report(subreport));
        }
    }

    /// Direct messages, skipping nested reports.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.as_str()),
            Entry::Report(_) => None,
        })
    }

    /// Direct nested reports, skipping messages.
    pub fn subreports(&self) -> impl Iterator<Item = &Self> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Report(report) => Some(report),
            Entry::Message(_) => None,
        })
    }

    /// Render the report as text lines.
    ///
    /// The header reads `Errors for <name>:`, messages are prefixed with
    /// `- ` and nested reports are indented by two spaces per level.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        lines.push(format!("{indent}Errors for {}:", self.name));
        for entry in &self.entries {
            match entry {
                Entry::Message(message) => lines.push(format!("{indent}- {message}")),
                Entry::Report(report) => report.render_into(depth + 1, lines),
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn failing_route() -> Report {
        let mut report = Report::new("vehicle 4");
        report.record(false, "Client 2 arrival time is 5 but latest is 2.5");
        report
    }

    #[rstest]
    fn new_report_is_empty() {
        let report = Report::new("solution");
        assert!(!report.is_failing());
        assert!(report.is_empty());
        assert_eq!(report.name(), "solution");
        assert_eq!(report.render(), vec!["Errors for solution:".to_owned()]);
    }

    #[rstest]
    #[case(true, 0)]
    #[case(false, 1)]
    fn record_appends_only_on_failure(#[case] condition: bool, #[case] expected: usize) {
        let mut report = Report::new("solution");
        report.record(condition, "boom");
        assert_eq!(report.len(), expected);
        assert_eq!(report.is_failing(), !condition);
    }

    #[rstest]
    fn record_with_skips_formatting_on_success() {
        let mut report = Report::new("solution");
        report.record_with(true, || panic!("message must not be built"));
        assert!(report.is_empty());
    }

    #[rstest]
    fn empty_subreports_are_dropped(failing_route: Report) {
        let mut root = Report::new("solution");
        root.record_subreport(Report::new("vehicle 1"));
        root.record_subreport(failing_route.clone());
        assert_eq!(root.len(), 1);
        assert_eq!(root.subreports().collect::<Vec<_>>(), vec![&failing_route]);
        assert_eq!(root.messages().count(), 0);
    }

    #[rstest]
    fn render_keeps_insertion_order(failing_route: Report) {
        let mut root = Report::new("instance-7");
        root.record(false, "first");
        root.record_subreport(failing_route);
        root.record(false, "Expected solution value of 6, found 7");

        assert_eq!(
            root.render(),
            vec![
                "Errors for instance-7:",
                "- first",
                "  Errors for vehicle 4:",
                "  - Client 2 arrival time is 5 but latest is 2.5",
                "- Expected solution value of 6, found 7",
            ]
        );
    }

    #[rstest]
    fn display_joins_rendered_lines(failing_route: Report) {
        assert_eq!(
            failing_route.to_string(),
            "Errors for vehicle 4:\n- Client 2 arrival time is 5 but latest is 2.5"
        );
    }

    #[rstest]
    fn serialises_messages_as_strings(failing_route: Report) {
        let mut root = Report::new("solution");
        root.record_subreport(failing_route);
        root.record(false, "Expected solution value of 6, found 7");

        let value = serde_json::to_value(&root).expect("serialise report");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "solution",
                "entries": [
                    {
                        "name": "vehicle 4",
                        "entries": ["Client 2 arrival time is 5 but latest is 2.5"],
                    },
                    "Expected solution value of 6, found 7",
                ],
            })
        );
    }
}
