use crate::countdown::use_countdown;
use chrono::{DateTime, Local, Utc};
use shared::countdown::{format_duration, format_start_time};
use shared::{Contest, CountdownLabel, Platform};
use yew::prelude::*;

pub fn platform_badge_classes(platform: Platform) -> &'static str {
    match platform {
        Platform::Codeforces => "bg-blue-100 text-blue-800",
        Platform::Codechef => "bg-amber-100 text-amber-800",
        Platform::Leetcode => "bg-orange-100 text-orange-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownBadgeProps {
    pub start_time: DateTime<Utc>,
    pub refresh_ms: u32,
}

#[function_component(CountdownBadge)]
pub fn countdown_badge(props: &CountdownBadgeProps) -> Html {
    let label = use_countdown(props.start_time, props.refresh_ms);
    let class = match label {
        CountdownLabel::Started => "text-green-700",
        CountdownLabel::Remaining(_) => "text-indigo-700",
    };
    html! {
        <p class={classes!("text-sm", "font-semibold", class)}>{"⏱ "}{label.to_string()}</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestCardProps {
    pub contest: Contest,
    pub is_bookmarked: bool,
    /// Past cards never run a countdown.
    #[prop_or_default]
    pub is_past: bool,
    pub countdown_refresh_ms: u32,
    pub on_toggle_bookmark: Callback<String>,
}

#[function_component(ContestCard)]
pub fn contest_card(props: &ContestCardProps) -> Html {
    let contest = &props.contest;

    let on_bookmark = {
        let on_toggle = props.on_toggle_bookmark.clone();
        let id = contest.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    let (bookmark_icon, bookmark_label) = if props.is_bookmarked {
        ("★", "Remove bookmark")
    } else {
        ("☆", "Add bookmark")
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-5 flex flex-col space-y-3 hover:shadow-lg transition-shadow duration-200">
            <div class="flex items-center justify-between">
                <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-semibold", platform_badge_classes(contest.platform))}>
                    {contest.platform.label()}
                </span>
                <button
                    onclick={on_bookmark}
                    aria-label={bookmark_label}
                    title={bookmark_label}
                    class="text-2xl text-yellow-500 hover:scale-110 transition-transform"
                >
                    {bookmark_icon}
                </button>
            </div>
            <h3 class="text-lg font-bold text-gray-900">{&contest.name}</h3>
            <p class="text-sm text-gray-600">{format_start_time(contest.start_time, &Local)}</p>
            if !props.is_past {
                <CountdownBadge start_time={contest.start_time} refresh_ms={props.countdown_refresh_ms} />
            }
            if let Some(duration) = format_duration(contest) {
                <p class="text-sm text-gray-500">{duration}</p>
            }
            <a
                href={contest.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="mt-auto inline-block text-center bg-blue-600 hover:bg-blue-700 text-white font-medium py-2 px-4 rounded-md transition-colors duration-200"
            >
                {"Visit Contest"}
            </a>
        </div>
    }
}
