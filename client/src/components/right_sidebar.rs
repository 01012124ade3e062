//! Attribute editor for the selected shape plus layer order and export.
//!
//! DESIGN
//! ======
//! Inputs are controlled by `UiState::attributes`; edits flow out through
//! `on_input` and come back once the page has applied them to the shape.
//! `on_blur` ends an editing session so canvas selection updates may again
//! overwrite the fields.

use canvas::attrs::ShapeProperty;
use canvas::shapes::Direction;
use leptos::prelude::*;

use crate::consts::{DIRECTION_OPTIONS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS, FONT_WEIGHT_OPTIONS};
use crate::state::ui::UiState;

#[component]
pub fn RightSidebar(
    on_input: Callback<(ShapeProperty, String)>,
    on_blur: Callback<()>,
    on_bring: Callback<Direction>,
    on_export: Callback<()>,
) -> impl IntoView {
    let font_sizes = FONT_SIZE_OPTIONS.iter().map(|size| (*size, *size)).collect::<Vec<_>>();

    view! {
        <section class="sidebar sidebar--right">
            <h3 class="sidebar__title">"Design"</h3>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Dimensions"</h4>
                <NumberField label="W" property=ShapeProperty::Width on_input=on_input on_blur=on_blur />
                <NumberField label="H" property=ShapeProperty::Height on_input=on_input on_blur=on_blur />
            </div>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Text"</h4>
                <SelectField
                    label="Font"
                    property=ShapeProperty::FontFamily
                    options=FONT_FAMILY_OPTIONS.to_vec()
                    on_input=on_input
                    on_blur=on_blur
                />
                <SelectField label="Size" property=ShapeProperty::FontSize options=font_sizes on_input=on_input on_blur=on_blur />
                <SelectField
                    label="Weight"
                    property=ShapeProperty::FontWeight
                    options=FONT_WEIGHT_OPTIONS.to_vec()
                    on_input=on_input
                    on_blur=on_blur
                />
            </div>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Fill color"</h4>
                <ColorField property=ShapeProperty::Fill on_input=on_input on_blur=on_blur />
            </div>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Stroke"</h4>
                <ColorField property=ShapeProperty::Stroke on_input=on_input on_blur=on_blur />
            </div>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Layer"</h4>
                {DIRECTION_OPTIONS
                    .iter()
                    .filter_map(|(label, value, icon)| {
                        let direction = Direction::from_value(value)?;
                        Some(view! {
                            <button class="sidebar__btn" title=*label on:click=move |_| on_bring.run(direction)>
                                <img src=*icon alt=*label />
                                <span>{*label}</span>
                            </button>
                        })
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="sidebar__group">
                <h4 class="sidebar__heading">"Export"</h4>
                <button class="btn sidebar__export" on:click=move |_| on_export.run(())>
                    "Export to PNG"
                </button>
            </div>
        </section>
    }
}

#[component]
fn NumberField(
    label: &'static str,
    property: ShapeProperty,
    on_input: Callback<(ShapeProperty, String)>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <label class="sidebar__field">
            <span class="sidebar__label">{label}</span>
            <input
                type="number"
                min="10"
                class="sidebar__input"
                prop:value=move || ui.get().attributes.get(property).to_owned()
                on:input=move |ev| on_input.run((property, event_target_value(&ev)))
                on:blur=move |_| on_blur.run(())
            />
        </label>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    property: ShapeProperty,
    options: Vec<(&'static str, &'static str)>,
    on_input: Callback<(ShapeProperty, String)>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <label class="sidebar__field">
            <span class="sidebar__label">{label}</span>
            <select
                class="sidebar__select"
                prop:value=move || ui.get().attributes.get(property).to_owned()
                on:change=move |ev| on_input.run((property, event_target_value(&ev)))
                on:blur=move |_| on_blur.run(())
            >
                <option value="" disabled=true>
                    "Choose"
                </option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn ColorField(
    property: ShapeProperty,
    on_input: Callback<(ShapeProperty, String)>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let value = move || ui.get().attributes.get(property).to_owned();

    view! {
        <label class="sidebar__field sidebar__field--color">
            <input
                type="color"
                class="sidebar__color"
                prop:value=value
                on:input=move |ev| on_input.run((property, event_target_value(&ev)))
                on:blur=move |_| on_blur.run(())
            />
            <span class="sidebar__color-value">{value}</span>
        </label>
    }
}
