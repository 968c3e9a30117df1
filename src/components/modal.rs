//! Generic modal dialog with backdrop dismiss and escape handling.

use leptos::prelude::*;

/// Modal shell: backdrop click, the close button, and Escape all invoke
/// `on_close`; clicks inside the dialog are swallowed.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(()) on:keydown=on_keydown>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
