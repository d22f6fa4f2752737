use crate::components::contest_card::ContestCard;
use shared::{BookmarkSet, Contest, ContestViews};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContestTab {
    Upcoming,
    Bookmarked,
    Past,
}

impl ContestTab {
    pub const ALL: [ContestTab; 3] = [ContestTab::Upcoming, ContestTab::Bookmarked, ContestTab::Past];

    pub fn title(&self) -> &'static str {
        match self {
            ContestTab::Upcoming => "Upcoming",
            ContestTab::Bookmarked => "Bookmarked",
            ContestTab::Past => "Past",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ContestTab::Upcoming => "No upcoming contests found for the selected platforms.",
            ContestTab::Bookmarked => "No bookmarked upcoming contests.",
            ContestTab::Past => "No past contests found for the selected platforms.",
        }
    }

    /// Tab caption with its count, e.g. "Upcoming (3)".
    pub fn caption(&self, views: &ContestViews) -> String {
        let (upcoming, bookmarked, past) = views.counts();
        let count = match self {
            ContestTab::Upcoming => upcoming,
            ContestTab::Bookmarked => bookmarked,
            ContestTab::Past => past,
        };
        format!("{} ({})", self.title(), count)
    }

    pub fn contests<'a>(&self, views: &'a ContestViews) -> &'a [Contest] {
        match self {
            ContestTab::Upcoming => &views.upcoming,
            ContestTab::Bookmarked => &views.bookmarked_upcoming,
            ContestTab::Past => &views.past,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestTabsProps {
    pub views: ContestViews,
    pub bookmarks: BookmarkSet,
    pub active: ContestTab,
    pub countdown_refresh_ms: u32,
    pub on_select: Callback<ContestTab>,
    pub on_toggle_bookmark: Callback<String>,
}

#[function_component(ContestTabs)]
pub fn contest_tabs(props: &ContestTabsProps) -> Html {
    let contests = props.active.contests(&props.views);
    let is_past = props.active == ContestTab::Past;

    html! {
        <div>
            <div class="flex border-b border-gray-200 mb-6" role="tablist">
                {for ContestTab::ALL.iter().copied().map(|tab| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    let active = tab == props.active;
                    html! {
                        <button
                            key={tab.title()}
                            role="tab"
                            aria-selected={active.to_string()}
                            {onclick}
                            class={classes!(
                                "px-4", "py-2", "-mb-px", "text-sm", "font-medium", "border-b-2",
                                if active { "border-blue-600 text-blue-700" } else { "border-transparent text-gray-500 hover:text-gray-700" }
                            )}
                        >
                            {tab.caption(&props.views)}
                        </button>
                    }
                })}
            </div>
            if contests.is_empty() {
                <p class="text-center text-gray-500 py-12">{props.active.empty_message()}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for contests.iter().map(|contest| html! {
                        <ContestCard
                            key={contest.id.clone()}
                            contest={contest.clone()}
                            is_bookmarked={props.bookmarks.contains(&contest.id)}
                            {is_past}
                            countdown_refresh_ms={props.countdown_refresh_ms}
                            on_toggle_bookmark={props.on_toggle_bookmark.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
