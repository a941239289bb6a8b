use leptos::prelude::*;

use crate::workflow::{Notice, NoticeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Queue of notices shown in the corner until the visitor dismisses them.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::info!("{}: {}", notice.title, notice.description);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    #[cfg(test)]
    pub fn notices(&self) -> Vec<Notice> {
        self.toasts
            .get_untracked()
            .into_iter()
            .map(|toast| toast.notice)
            .collect()
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]">
            <For each=move || notifier.toasts.get() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let color = match toast.notice.kind {
                        NoticeKind::Success => "bg-white border-green-500 text-gray-900",
                        NoticeKind::Error => "bg-red-600 border-red-700 text-white",
                    };
                    view! {
                        <button
                            class=format!(
                                "text-left p-4 rounded-lg border-l-4 shadow-lg cursor-pointer {color}",
                            )
                            title="Dismiss"
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <p class="font-semibold">{toast.notice.title}</p>
                            <p class="text-sm opacity-90">{toast.notice.description}</p>
                        </button>
                    }
                }
            </For>
        </div>
    }
}
