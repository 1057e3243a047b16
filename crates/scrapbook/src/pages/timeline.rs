//! Timeline page: milestones grouped by month
//!
//! Groups are ordered chronologically and so are the milestones within each
//! group. Milestones with an unparseable date are left out. Nodes alternate
//! sides across the whole timeline, not per group.

use std::collections::BTreeMap;

use maud::{html, Markup};

use crate::components::card::entry_href;
use crate::components::section_header;
use crate::data::{JournalData, Milestone};
use crate::dates::{display_date, month_key, parse_date};
use crate::error::PageError;
use crate::view::{PageRequest, StaticView, View};

pub const DEFAULT_ICON: &str = "📍";

/// Milestones of one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    /// Sortable key, e.g. "2025-09"
    pub key: String,
    /// Display label, e.g. "September 2025"
    pub label: String,
    pub items: Vec<&'a Milestone>,
}

pub fn group_by_month(milestones: &[Milestone]) -> Vec<MonthGroup<'_>> {
    let mut groups: BTreeMap<String, MonthGroup<'_>> = BTreeMap::new();

    for milestone in milestones {
        let Some((key, label)) = month_key(&milestone.date) else {
            continue;
        };
        groups
            .entry(key.clone())
            .or_insert_with(|| MonthGroup {
                key,
                label,
                items: Vec::new(),
            })
            .items
            .push(milestone);
    }

    groups
        .into_values()
        .map(|mut group| {
            group.items.sort_by_key(|m| parse_date(&m.date));
            group
        })
        .collect()
}

fn node(milestone: &Milestone, position: usize) -> Markup {
    let side = if position % 2 == 1 {
        "timeline-node timeline-node--left"
    } else {
        "timeline-node timeline-node--right"
    };

    html! {
        article class=(side) data-reveal="" {
            div.timeline-dot aria-hidden="true" {}
            div.timeline-card {
                div.timeline-icon aria-label=(milestone.title) {
                    (milestone.icon.as_deref().unwrap_or(DEFAULT_ICON))
                }
                time.timeline-date datetime=(milestone.date) { (display_date(&milestone.date)) }
                h3.timeline-title { (milestone.title) }
                p.timeline-description { (milestone.description) }
                @if let Some(entry_id) = &milestone.entry_id {
                    a.timeline-link href=(entry_href(entry_id))
                        title=(format!("Open journal entry: {}", milestone.title)) {
                        "Read Journal Entry"
                    }
                }
            }
        }
    }
}

pub fn render(data: &JournalData) -> Markup {
    let groups = group_by_month(data.timeline());
    let mut position = 0;
    let sections: Vec<(&MonthGroup<'_>, Vec<Markup>)> = groups
        .iter()
        .map(|group| {
            let nodes = group
                .items
                .iter()
                .map(|milestone| {
                    position += 1;
                    node(milestone, position)
                })
                .collect();
            (group, nodes)
        })
        .collect();

    html! {
        div.page-timeline.page-transition.container {
            (section_header("Learning Timeline", "Moments, experiments, and lessons from BugBoom"))
            div.timeline-container {
                div.timeline-start { span { "🌱 Journey Begins" } }
                @for (group, nodes) in &sections {
                    section.timeline-group aria-label=(group.label) {
                        div.timeline-group-label { span { (group.label) } }
                        @for markup in nodes {
                            (markup)
                        }
                    }
                }
                div.timeline-end { span { "📖 Journal Complete" } }
            }
        }
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    Ok(StaticView::boxed(render(&request.data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn milestone(date: &str, title: &str) -> Milestone {
        Milestone {
            date: date.to_string(),
            title: title.to_string(),
            description: String::new(),
            icon: None,
            entry_id: None,
        }
    }

    #[test]
    fn test_groups_by_month_in_order() {
        let items = vec![
            milestone("2025-10-03", "c"),
            milestone("2025-09-20", "b"),
            milestone("garbage", "x"),
            milestone("2025-09-02", "a"),
        ];
        let groups = group_by_month(&items);
        let shape: Vec<(String, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.label.clone(), g.items.iter().map(|m| m.title.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("September 2025".to_string(), vec!["a", "b"]),
                ("October 2025".to_string(), vec!["c"]),
            ]
        );
    }

    #[test]
    fn test_nodes_alternate_across_groups() {
        let data = JournalData::default().with_timeline(vec![
            milestone("2025-09-02", "a"),
            milestone("2025-10-03", "b"),
            milestone("2025-11-04", "c"),
        ]);
        let html = render(&data).into_string();
        assert_eq!(html.matches("timeline-node--left").count(), 2);
        assert_eq!(html.matches("timeline-node--right").count(), 1);
        assert!(html.contains(DEFAULT_ICON));
        assert!(!html.contains("Read Journal Entry"));
    }
}
