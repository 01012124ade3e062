//! Board page: the whiteboard controller wired to the DOM.
//!
//! ARCHITECTURE
//! ============
//! `Whiteboard` holds every piece of drawing state and turns input into
//! `Effects`. This page owns the browser side. It feeds DOM events in, runs
//! the effects that need a browser (timers, prompts, `localStorage`, the file
//! picker), paints the surface through `canvas::engine::Engine` and copies the
//! result into `UiState` for the toolbar and sidebars.
//!
//! TRADE-OFFS
//! ==========
//! The engine and timers live in local `StoredValue`s instead of
//! `Rc<RefCell<..>>` so that every handler captures one `Copy` handle and can
//! be handed to child components as a `Callback`.

use canvas::attrs::ShapeProperty;
#[cfg(feature = "hydrate")]
use canvas::engine::Engine;
#[cfg(feature = "hydrate")]
use canvas::input::{Button, Key};
#[cfg(feature = "hydrate")]
use canvas::keys::{CLIPBOARD_STORAGE_KEY, Clipboard};
use canvas::shapes::Direction;
#[cfg(feature = "hydrate")]
use gloo_events::EventListener;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use room::MemoryRoom;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::components::left_sidebar::LeftSidebar;
use crate::components::live::Live;
use crate::components::navbar::Navbar;
use crate::components::right_sidebar::RightSidebar;
#[cfg(feature = "hydrate")]
use crate::consts::{ACTIVE_ELEMENT_RESET_MS, EXPORT_FILE_NAME};
use crate::state::ui::{ActiveElement, UiState};
use crate::state::whiteboard::{Effects, Whiteboard};
#[cfg(feature = "hydrate")]
use crate::util::browser;
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_modifiers, mouse_point, pointer_point, targets_form_field};

type Board = Whiteboard<MemoryRoom>;

/// Repaint delay while image sources are still decoding.
#[cfg(feature = "hydrate")]
const IMAGE_RETRY_MS: u32 = 50;

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct Timers {
    reset: Option<Timeout>,
    image_retry: Option<Timeout>,
    listeners: Vec<EventListener>,
}

/// Everything an event handler touches.
#[derive(Clone, Copy)]
struct Host {
    board: StoredValue<Board>,
    ui: RwSignal<UiState>,
    #[cfg(feature = "hydrate")]
    engine: StoredValue<Option<Engine>, LocalStorage>,
    #[cfg(feature = "hydrate")]
    timers: StoredValue<Timers, LocalStorage>,
    #[cfg(feature = "hydrate")]
    image_input: NodeRef<leptos::html::Input>,
}

impl Host {
    /// Run `f` against the controller, then apply what it asks for.
    fn run(self, f: impl FnOnce(&mut Board) -> Effects) {
        let effects = self.board.try_update_value(f).unwrap_or_default();
        self.apply(effects);
    }

    fn apply(self, effects: Effects) {
        let rebuilt = self.board.try_update_value(Whiteboard::refresh_from_storage).unwrap_or(false);
        if rebuilt || effects.render {
            self.render();
        }
        self.publish();
        self.run_browser_effects(effects);
    }

    /// Copy controller state into `UiState`, notifying only on change.
    fn publish(self) {
        self.board.with_value(|board| self.ui.maybe_update(|ui| ui.refresh(board)));
    }

    #[cfg(not(feature = "hydrate"))]
    fn render(self) {}

    #[cfg(not(feature = "hydrate"))]
    fn run_browser_effects(self, _effects: Effects) {}

    #[cfg(feature = "hydrate")]
    fn render(self) {
        let pending = self
            .engine
            .try_update_value(|slot| {
                let engine = slot.as_mut()?;
                self.board.with_value(|board| match engine.render(board.surface()) {
                    Ok(pending) => Some(pending),
                    Err(e) => {
                        log::warn!("board: render failed: {e:?}");
                        None
                    }
                })
            })
            .flatten()
            .unwrap_or(false);
        if pending {
            let retry = Timeout::new(IMAGE_RETRY_MS, move || self.render());
            self.timers.update_value(|t| t.image_retry = Some(retry));
        }
    }

    #[cfg(feature = "hydrate")]
    fn run_browser_effects(self, effects: Effects) {
        if let Some(json) = &effects.store_clipboard {
            browser::save_item(CLIPBOARD_STORAGE_KEY, json);
        }
        if effects.cancel_active_element_reset {
            self.timers.update_value(|t| t.reset = None);
        }
        if effects.schedule_active_element_reset {
            let timer = Timeout::new(ACTIVE_ELEMENT_RESET_MS, move || {
                self.board.update_value(Whiteboard::reset_active_element);
                self.publish();
            });
            // Replacing the handle cancels a reset that is still pending.
            self.timers.update_value(|t| t.reset = Some(timer));
        }
        if effects.open_image_picker {
            if let Some(input) = self.image_input.get_untracked() {
                input.click();
            }
        }
        if let Some((id, text)) = effects.edit_text {
            if let Some(next) = browser::prompt_text("Edit text", &text) {
                self.run(|board| board.commit_text(id, &next));
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn mount(self, canvas: web_sys::HtmlCanvasElement) {
        let mut engine = match Engine::new(canvas) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("board: canvas unavailable: {e:?}");
                return;
            }
        };
        let (width, height) = engine.client_size();
        if let Err(e) = engine.set_dimensions(width, height, browser::device_pixel_ratio()) {
            log::warn!("board: cannot size canvas: {e:?}");
        }
        self.engine.set_value(Some(engine));

        if let Some(json) = browser::load_item(CLIPBOARD_STORAGE_KEY) {
            match Clipboard::from_json(&json) {
                Ok(clipboard) => self.board.update_value(|board| board.set_clipboard(clipboard)),
                Err(e) => log::warn!("board: stored clipboard ignored: {e}"),
            }
        }

        self.listen();
        self.run(|board| board.resize(width, height));
        log::info!("board: mounted at {width}x{height}");
    }

    #[cfg(feature = "hydrate")]
    fn listen(self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let on_resize = EventListener::new(&window, "resize", move |_| {
            let Some((width, height)) = browser::window_size() else {
                return;
            };
            let resized = self.engine.try_update_value(|slot| {
                slot.as_mut()
                    .map(|engine| engine.set_dimensions(width, height, browser::device_pixel_ratio()))
            });
            if let Some(Some(Err(e))) = resized {
                log::warn!("board: resize failed: {e:?}");
            }
            self.run(|board| board.resize(width, height));
        });

        let on_key_down = EventListener::new(&window, "keydown", move |event| {
            if targets_form_field(event) {
                return;
            }
            let Some(ev) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let key = Key(ev.key());
            let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let effects = self.board.try_update_value(|board| board.key_down(&key, modifiers)).unwrap_or_default();
            if effects.prevent_default {
                ev.prevent_default();
            }
            self.apply(effects);
        });

        self.timers.update_value(|t| t.listeners = vec![on_resize, on_key_down]);
    }

    #[cfg(feature = "hydrate")]
    fn unmount(self) {
        self.timers.update_value(|t| *t = Timers::default());
        self.engine.set_value(None);
    }

    #[cfg(feature = "hydrate")]
    fn export(self) {
        let url = self.engine.with_value(|slot| slot.as_ref().map(Engine::to_data_url));
        match url {
            Some(Ok(url)) => {
                if let Err(e) = browser::download_data_url(&url, EXPORT_FILE_NAME) {
                    log::warn!("board: export failed: {e:?}");
                }
            }
            Some(Err(e)) => log::warn!("board: cannot encode canvas: {e:?}"),
            None => {}
        }
    }
}

/// The whiteboard page.
#[component]
pub fn BoardPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let image_input = NodeRef::<leptos::html::Input>::new();
    let host = Host {
        board: StoredValue::new(Whiteboard::new(MemoryRoom::new())),
        ui,
        #[cfg(feature = "hydrate")]
        engine: StoredValue::new_local(None),
        #[cfg(feature = "hydrate")]
        timers: StoredValue::new_local(Timers::default()),
        #[cfg(feature = "hydrate")]
        image_input,
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if host.engine.with_value(Option::is_some) {
            return;
        }
        host.mount(canvas);
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        host.unmount();
        host.board.update_value(|board| board.room_mut().leave());
    });

    let on_select = Callback::new(move |element: ActiveElement| host.run(|board| board.handle_active_element(element)));

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("board: pointer capture refused: {e:?}");
                    }
                }
                let point = pointer_point(&ev);
                let button = Button::from_dom(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                host.run(|board| board.pointer_down(point, button, modifiers));
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_ev: leptos::ev::PointerEvent| {})
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                host.run(|board| board.pointer_move(point));
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_ev: leptos::ev::PointerEvent| {})
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                host.run(|board| board.pointer_up(point));
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_ev: leptos::ev::PointerEvent| {})
        }
    };

    let on_double_click = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |ev: leptos::ev::MouseEvent| {
                let point = mouse_point(&ev);
                host.run(|board| board.double_click(point));
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_ev: leptos::ev::MouseEvent| {})
        }
    };

    let on_image_change = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |_ev: leptos::ev::Event| {
                let Some(input) = image_input.get_untracked() else {
                    return;
                };
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                // Clear so picking the same file again still fires `change`.
                input.set_value("");
                let read = browser::read_image_file(&file, move |src, width, height| {
                    host.run(move |board| board.upload_image(src, width, height));
                });
                if let Err(e) = read {
                    log::warn!("board: cannot read image: {e:?}");
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_ev: leptos::ev::Event| {})
        }
    };

    let on_export = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |()| host.export())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|()| {})
        }
    };

    let on_input = Callback::new(move |(property, value): (ShapeProperty, String)| {
        host.run(|board| board.handle_input_change(property, &value));
    });
    let on_blur = Callback::new(move |()| host.board.update_value(Whiteboard::end_editing));
    let on_bring = Callback::new(move |direction: Direction| host.run(|board| board.bring_element(direction)));
    let on_undo = Callback::new(move |()| host.run(Whiteboard::undo));
    let on_redo = Callback::new(move |()| host.run(Whiteboard::redo));

    view! {
        <main class="board">
            <Navbar on_select=on_select image_input=image_input on_image_change=on_image_change />
            <section class="board__body">
                <LeftSidebar />
                <Live
                    canvas_ref=canvas_ref
                    on_pointer_down=on_pointer_down
                    on_pointer_move=on_pointer_move
                    on_pointer_up=on_pointer_up
                    on_double_click=on_double_click
                    on_undo=on_undo
                    on_redo=on_redo
                />
                <RightSidebar on_input=on_input on_blur=on_blur on_bring=on_bring on_export=on_export />
            </section>
        </main>
    }
}
