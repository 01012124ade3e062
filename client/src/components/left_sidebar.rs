//! Layer list, topmost shape first.

use leptos::prelude::*;

use crate::state::ui::{LayerItem, UiState};

#[component]
pub fn LeftSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="sidebar sidebar--left">
            <h3 class="sidebar__title">"Layers"</h3>
            <Show
                when=move || !ui.get().layers.is_empty()
                fallback=|| view! { <p class="sidebar__empty">"No shapes yet"</p> }
            >
                <ul class="layers">
                    <For
                        each=move || ui.get().layers
                        key=|layer| layer.id.clone()
                        children=move |layer: LayerItem| {
                            view! {
                                <li class="layers__item">
                                    <span class=format!("layers__icon layers__icon--{}", layer.kind.as_str())></span>
                                    <span class="layers__label">{layer.label()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
