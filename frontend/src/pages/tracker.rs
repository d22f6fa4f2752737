use crate::api::bookmarks::HttpBookmarkRemote;
use crate::api::contests::fetch_contests;
use crate::components::contest_tabs::{ContestTab, ContestTabs};
use crate::components::platform_filter::PlatformFilter;
use crate::components::toast::{Toast, ToastContext};
use crate::config::Config;
use crate::state::{AppState, TrackerAction};
use crate::storage::LocalStorageBackend;
use gloo_timers::callback::Interval;
use log::{debug, warn};
use shared::sync::{pull_bookmarks, push_toggle};
use shared::{LoadStatus, Platform, RequestSequencer, SyncOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ContestTracker)]
pub fn contest_tracker() -> Html {
    let config = use_memo((), |_| Config::tracker());
    let identity = use_memo((), |_| Config::bookmark_identity());
    let state = {
        let config = config.clone();
        use_reducer(move || AppState::new(LocalStorageBackend, &config))
    };
    let sequencer = use_mut_ref(RequestSequencer::default);
    let toasts = use_context::<ToastContext>();
    let active_tab = use_state(|| ContestTab::Upcoming);
    let rerender = use_force_update();

    let refresh = {
        let config = config.clone();
        let dispatcher = state.dispatcher();
        let sequencer = sequencer.clone();
        Callback::from(move |_: ()| {
            let ticket = sequencer.borrow_mut().next_ticket();
            dispatcher.dispatch(TrackerAction::FetchStarted(ticket));
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = fetch_contests(&config).await;
                dispatcher.dispatch(TrackerAction::FetchFinished(ticket, result));
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // Pull the remote set once and union it into local bookmarks.
    {
        let config = config.clone();
        let identity = identity.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            if let Some(identity) = (*identity).clone() {
                spawn_local(async move {
                    let remote = HttpBookmarkRemote::new((*config).clone());
                    let ids = pull_bookmarks(&remote, &identity).await;
                    dispatcher.dispatch(TrackerAction::RemoteBookmarksFetched(ids));
                });
            }
            || ()
        });
    }

    // Re-run classification as time passes so started contests move to Past.
    use_effect_with(config.countdown_refresh_ms, move |refresh_ms| {
        let interval = Interval::new(*refresh_ms, move || rerender.force_update());
        move || {
            interval.cancel();
        }
    });

    let on_toggle_platform = {
        let state = state.clone();
        let toasts = toasts.clone();
        Callback::from(move |platform: Platform| {
            if state.dashboard.selection().is_locked(platform) {
                if let Some(toasts) = &toasts {
                    toasts.push.emit(Toast::info("At least one platform must stay selected"));
                }
                return;
            }
            state.dispatch(TrackerAction::TogglePlatform(platform));
        })
    };

    let on_select_all = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(TrackerAction::SelectAllPlatforms))
    };

    let on_toggle_bookmark = {
        let config = config.clone();
        let identity = identity.clone();
        let dispatcher = state.dispatcher();
        let sequencer = sequencer.clone();
        let toasts = toasts.clone();
        Callback::from(move |contest_id: String| {
            dispatcher.dispatch(TrackerAction::ToggleBookmark(contest_id.clone()));

            let Some(identity) = (*identity).clone() else {
                return;
            };
            let ticket = sequencer.borrow_mut().next_ticket();
            dispatcher.dispatch(TrackerAction::BookmarkSyncStarted(ticket, contest_id.clone()));

            let config = config.clone();
            let dispatcher = dispatcher.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let remote = HttpBookmarkRemote::new((*config).clone());
                match push_toggle(&remote, &identity, &contest_id).await {
                    SyncOutcome::Synced(ids) => {
                        dispatcher.dispatch(TrackerAction::RemoteBookmarksSynced(ticket, ids));
                    }
                    SyncOutcome::LocalOnly(e) => {
                        warn!("Bookmark kept locally only: {}", e);
                        if let Some(toasts) = toasts {
                            toasts.push.emit(Toast::warning("Bookmark saved locally; server sync failed"));
                        }
                    }
                }
            });
        })
    };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: ContestTab| active_tab.set(tab))
    };

    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let dashboard = &state.dashboard;
    let is_loading = *dashboard.status() == LoadStatus::Loading;
    let has_contests = !dashboard.contests().is_empty();

    if is_loading && !has_contests {
        return html! {
            <div class="flex flex-col items-center justify-center py-24">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                <p class="mt-4 text-gray-600">{"Loading contests..."}</p>
            </div>
        };
    }

    let error_banner = dashboard.error_message().map(|message| html! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-md mb-6" role="alert">
            {message.to_string()}
        </div>
    });

    if !has_contests && error_banner.is_some() {
        return html! {
            <div class="container mx-auto px-4 py-8">
                {for error_banner}
                <button onclick={on_refresh} class="bg-blue-600 hover:bg-blue-700 text-white py-2 px-4 rounded-md">
                    {"Retry"}
                </button>
            </div>
        };
    }

    let views = dashboard.views_now();
    debug!("Rendering tracker with counts {:?}", views.counts());

    html! {
        <div class="container mx-auto px-4 py-8">
            {for error_banner}
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-6">
                <PlatformFilter
                    selection={dashboard.selection().clone()}
                    on_toggle={on_toggle_platform}
                    {on_select_all}
                />
                <button
                    onclick={on_refresh}
                    disabled={is_loading}
                    class="bg-white border border-gray-300 hover:bg-gray-50 text-gray-700 py-2 px-4 rounded-md text-sm disabled:opacity-60"
                >
                    {if is_loading { "Refreshing..." } else { "↻ Refresh" }}
                </button>
            </div>
            <ContestTabs
                {views}
                bookmarks={dashboard.bookmarks().clone()}
                active={*active_tab}
                countdown_refresh_ms={config.countdown_refresh_ms}
                on_select={on_select_tab}
                {on_toggle_bookmark}
            />
        </div>
    }
}
