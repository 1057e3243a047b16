//! Findings page: pinned insights, then every finding

use maud::{html, Markup};

use crate::components::card::finding_card;
use crate::components::section_header;
use crate::data::JournalData;
use crate::error::PageError;
use crate::view::{PageRequest, StaticView, View};

pub fn render(data: &JournalData) -> Markup {
    let pinned: Vec<_> = data.findings().iter().filter(|f| f.pinned).collect();

    html! {
        div.page-findings.page-transition.container {
            (section_header("Key Findings", "Insights, lessons, and discoveries from the field"))

            @if !pinned.is_empty() {
                section.pinned-section aria-label="Pinned insights" {
                    div.pinned-header data-reveal="" {
                        span { "📌" }
                        h3 { "Top Insights" }
                    }
                    div.pinned-grid {
                        @for finding in &pinned {
                            (finding_card(finding))
                        }
                    }
                }
            }

            div.findings-divider {}
            h2.section-title.findings-all-title data-reveal="" { "All Findings" }
            div.findings-grid {
                @for finding in data.findings() {
                    (finding_card(finding))
                }
            }
        }
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    Ok(StaticView::boxed(render(&request.data)))
}
