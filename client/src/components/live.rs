//! Drawing area: the canvas element and its right-click history menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas is owned by the page's engine; this component only mounts the
//! element and forwards raw pointer events. The context menu stays in the
//! DOM so it can overlay the canvas without being painted by it.

use leptos::prelude::*;

use crate::consts::SHORTCUTS;
use crate::state::ui::UiState;

#[component]
pub fn Live(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    on_pointer_down: Callback<leptos::ev::PointerEvent>,
    on_pointer_move: Callback<leptos::ev::PointerEvent>,
    on_pointer_up: Callback<leptos::ev::PointerEvent>,
    on_double_click: Callback<leptos::ev::MouseEvent>,
    on_undo: Callback<()>,
    on_redo: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu = RwSignal::new(None::<(i32, i32)>);

    let on_context_menu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu.set(Some((ev.offset_x(), ev.offset_y())));
    };

    let menu_items = move || {
        SHORTCUTS
            .iter()
            .map(|(key, label, shortcut)| {
                let key = *key;
                let enabled = move || {
                    let state = ui.get();
                    match key {
                        "undo" => state.can_undo,
                        "redo" => state.can_redo,
                        _ => false,
                    }
                };
                view! {
                    <li>
                        <button
                            class="context-menu__item"
                            disabled=move || !enabled()
                            on:click=move |_| {
                                menu.set(None);
                                match key {
                                    "undo" => on_undo.run(()),
                                    "redo" => on_redo.run(()),
                                    _ => {}
                                }
                            }
                        >
                            <span>{*label}</span>
                            <span class="context-menu__shortcut">{*shortcut}</span>
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="live" on:click=move |_| menu.set(None)>
            <canvas
                class="live__canvas"
                node_ref=canvas_ref
                on:pointerdown=move |ev| {
                    menu.set(None);
                    on_pointer_down.run(ev);
                }
                on:pointermove=move |ev| on_pointer_move.run(ev)
                on:pointerup=move |ev| on_pointer_up.run(ev)
                on:dblclick=move |ev| on_double_click.run(ev)
                on:contextmenu=on_context_menu
            ></canvas>
            {move || {
                menu.get()
                    .map(|(x, y)| {
                        view! {
                            <ul class="context-menu" style=format!("left: {x}px; top: {y}px;")>
                                {menu_items()}
                            </ul>
                        }
                    })
            }}
        </section>
    }
}
