//! Top toolbar: tool buttons, the shapes dropdown and the hidden image picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar only reports what the user picked. The page decides what a pick
//! means (start a tool, delete everything, open the picker) and reflects the
//! result back through `UiState::active_element`.

use leptos::prelude::*;

use crate::consts::{NAV_ELEMENTS, NavEntry, NavItem};
use crate::state::ui::{ActiveElement, UiState};

/// Top toolbar for the board page.
#[component]
pub fn Navbar(
    on_select: Callback<ActiveElement>,
    image_input: NodeRef<leptos::html::Input>,
    on_image_change: Callback<leptos::ev::Event>,
) -> impl IntoView {
    let entries = NAV_ELEMENTS
        .iter()
        .map(|entry| match *entry {
            NavEntry::Single(item) => view! {
                <li>
                    <NavButton item=item on_select=on_select />
                </li>
            }
            .into_any(),
            NavEntry::Menu(items) => view! {
                <li>
                    <ShapesMenu items=items on_select=on_select />
                </li>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <span class="navbar__logo">"Liveboard"</span>
            <ul class="navbar__tools">{entries}</ul>
            <input
                type="file"
                class="navbar__file-input"
                accept="image/*"
                node_ref=image_input
                on:change=move |ev| on_image_change.run(ev)
            />
        </nav>
    }
}

#[component]
fn NavButton(item: NavItem, on_select: Callback<ActiveElement>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_active = move || ui.get().active_element.value == item.value;

    view! {
        <button
            class="navbar__btn"
            class:navbar__btn--active=is_active
            title=item.name
            on:click=move |_| on_select.run(item.into())
        >
            <img src=item.icon alt=item.name />
        </button>
    }
}

/// Dropdown whose trigger shows the shape currently in use.
#[component]
fn ShapesMenu(items: &'static [NavItem], on_select: Callback<ActiveElement>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = RwSignal::new(false);

    let current = move || {
        let value = ui.get().active_element.value;
        items.iter().find(|item| item.value == value).copied()
    };
    let trigger = move || current().or_else(|| items.first().copied());

    let options = move || {
        items
            .iter()
            .map(|item| {
                let item = *item;
                view! {
                    <li>
                        <button
                            class="navbar__menu-item"
                            class:navbar__menu-item--active=move || current() == Some(item)
                            on:click=move |_| {
                                open.set(false);
                                on_select.run(item.into());
                            }
                        >
                            <img src=item.icon alt=item.name />
                            <span>{item.name}</span>
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="navbar__menu">
            <button
                class="navbar__btn"
                class:navbar__btn--active=move || current().is_some()
                title="Shapes"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || trigger().map(|item| view! { <img src=item.icon alt=item.name /> })}
            </button>
            <Show when=move || open.get()>
                <ul class="navbar__menu-list">{options()}</ul>
            </Show>
        </div>
    }
}
