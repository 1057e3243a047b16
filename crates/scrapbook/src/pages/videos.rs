//! Videos page

use maud::{html, Markup};

use crate::components::card::video_card;
use crate::components::section_header;
use crate::data::JournalData;
use crate::error::PageError;
use crate::view::{PageRequest, StaticView, View};

pub fn render(data: &JournalData) -> Markup {
    html! {
        div.page-videos.page-transition.container {
            (section_header(
                "Field Videos",
                "Clips from our visit to BugBoom: interviews, observations, and behind-the-scenes moments",
            ))
            div.videos-grid {
                @for video in data.videos() {
                    (video_card(video))
                }
            }
        }
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    Ok(StaticView::boxed(render(&request.data)))
}
