use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Warning,
}

impl ToastKind {
    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Info => "bg-blue-500 border-blue-600",
            ToastKind::Warning => "bg-amber-500 border-amber-600",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration_ms: 5000,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => {
                if !toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub push: Callback<Toast>,
    pub dismiss: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let push = {
        let dispatcher = state.dispatcher();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let duration_ms = toast.duration_ms;
            dispatcher.dispatch(ToastAction::Push(toast));

            let dispatcher = dispatcher.clone();
            Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let context = ToastContext {
        toasts: state.toasts.clone(),
        push,
        dismiss,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2">
                {for context.toasts.iter().map(|toast| {
                    let on_close = {
                        let dismiss = context.dismiss.clone();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| dismiss.emit(id))
                    };
                    html! {
                        <div key={toast.id.to_string()}
                            class={classes!("flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "max-w-md", toast.kind.classes())}>
                            <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200" aria-label="Dismiss">
                                {"×"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
