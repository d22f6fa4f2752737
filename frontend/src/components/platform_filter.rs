use shared::{Platform, PlatformSelection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlatformFilterProps {
    pub selection: PlatformSelection,
    pub on_toggle: Callback<Platform>,
    pub on_select_all: Callback<()>,
}

/// Platform checkboxes. The last selected platform is rendered disabled.
#[function_component(PlatformFilter)]
pub fn platform_filter(props: &PlatformFilterProps) -> Html {
    let on_select_all = {
        let on_select_all = props.on_select_all.clone();
        Callback::from(move |_: MouseEvent| on_select_all.emit(()))
    };

    html! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="text-sm font-medium text-gray-700 mr-1">{"Platforms:"}</span>
            {for Platform::ALL.iter().copied().map(|platform| {
                let selected = props.selection.contains(platform);
                let locked = props.selection.is_locked(platform);
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(platform))
                };
                let state_classes = if selected {
                    "bg-blue-600 text-white border-blue-600"
                } else {
                    "bg-white text-gray-700 border-gray-300 hover:bg-gray-50"
                };
                html! {
                    <button
                        key={platform.as_str()}
                        {onclick}
                        disabled={locked}
                        aria-pressed={selected.to_string()}
                        title={if locked { "At least one platform must stay selected" } else { "" }}
                        class={classes!(
                            "px-3", "py-1", "rounded-full", "border", "text-sm", "transition-colors",
                            state_classes,
                            locked.then_some("opacity-60 cursor-not-allowed")
                        )}
                    >
                        {if selected { "✓ " } else { "" }}{platform.label()}
                    </button>
                }
            })}
            <button
                onclick={on_select_all}
                disabled={props.selection.is_all()}
                class="px-3 py-1 rounded-full text-sm text-blue-700 hover:underline disabled:text-gray-400 disabled:no-underline"
            >
                {"Select All"}
            </button>
        </div>
    }
}
