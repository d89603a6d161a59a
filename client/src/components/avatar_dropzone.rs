//! Avatar upload drop zone with inline preview.
//!
//! DESIGN
//! ======
//! `AvatarField` bundles the signals the form and the drop zone share: the
//! selected file's metadata (validated like any other field), the live
//! browser file handle (kept local to the UI thread), and the preview state.
//! The zone's own click opens the file picker; the remove/change buttons
//! inside it stop propagation so they never trigger that click.

use leptos::prelude::*;

use crate::components::icons::{InfoIcon, UploadIcon};
use crate::state::preview::PreviewState;
use crate::util::file::FileHandle;
use crate::util::validation::{ACCEPT_ATTR, AvatarFile, FieldError};

const AVATAR_HINT: &str = "Upload your photo (JPG or PNG, max size: 5MB)";

/// Signals backing the avatar input.
#[derive(Clone, Copy)]
pub struct AvatarField {
    pub preview: RwSignal<PreviewState>,
    pub selected: RwSignal<Option<AvatarFile>>,
    pub error: RwSignal<Option<FieldError>>,
    handle: StoredValue<Option<FileHandle>, LocalStorage>,
}

impl Default for AvatarField {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarField {
    pub fn new() -> Self {
        Self {
            preview: RwSignal::new(PreviewState::default()),
            selected: RwSignal::new(None),
            error: RwSignal::new(None),
            handle: StoredValue::new_local(None),
        }
    }

    /// Forget the selected file and its preview.
    pub fn reset(self) {
        self.preview.update(PreviewState::remove);
        self.selected.set(None);
        self.error.set(None);
        self.handle.set_value(None);
    }

    /// Take `file` as the avatar: validate it now and start its preview read.
    #[cfg(feature = "hydrate")]
    pub fn select(self, file: web_sys::File) {
        use crate::util::file::read_data_url;
        use crate::util::validation::validate_avatar;

        let meta = AvatarFile::from_file(&file);
        let error = validate_avatar(&meta).err();
        if let Some(e) = error {
            log::info!("avatar {} rejected: {e}", meta.name);
        }
        self.error.set(error);
        self.selected.set(Some(meta));
        self.handle.set_value(Some(file.clone()));

        let preview = self.preview;
        let generation = preview.try_update(PreviewState::begin_read).unwrap_or_default();
        leptos::task::spawn_local(async move {
            match read_data_url(&file).await {
                Ok(data_url) => {
                    let applied = preview.try_update(|p| p.finish_read(generation, data_url)).unwrap_or(false);
                    if !applied {
                        log::debug!("discarded stale avatar preview (generation {generation})");
                    }
                }
                Err(e) => {
                    log::warn!("avatar preview failed: {e}");
                    preview.update(|p| {
                        p.fail_read(generation);
                    });
                }
            }
        });
    }

    /// Create an object URL for the selected file, if any.
    pub fn object_url(self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let file = self.handle.get_value()?;
            match crate::util::file::create_object_url(&file) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("avatar falls back to default: {e}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[component]
pub fn AvatarDropzone(field: AvatarField) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let open_picker = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_zone_click = move |_: leptos::ev::MouseEvent| {
        if !field.preview.with_untracked(PreviewState::has_preview) {
            open_picker();
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !field.preview.with_untracked(|p| p.drag_active || p.has_preview()) {
            field.preview.update(|p| p.drag_active = true);
        }
    };

    let on_drag_leave = move |_: leptos::ev::DragEvent| {
        if field.preview.with_untracked(|p| p.drag_active) {
            field.preview.update(|p| p.drag_active = false);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        field.preview.update(|p| p.drag_active = false);
        if field.preview.with_untracked(PreviewState::has_preview) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let files = ev.data_transfer().and_then(|dt| dt.files());
            if let Some(file) = crate::util::file::first_file(files) {
                field.select(file);
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = crate::util::file::first_file(input.files()) {
                field.select(file);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        field.reset();
        #[cfg(feature = "hydrate")]
        {
            // Lets the same file be picked again.
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_change_image = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        open_picker();
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for="avatar-input">"Upload Avatar"</label>
            <div
                class="dropzone"
                class:dropzone--interactive=move || !field.preview.with(PreviewState::has_preview)
                class:dropzone--drag=move || field.preview.with(|p| p.drag_active)
                class:dropzone--invalid=move || field.error.get().is_some()
                on:click=on_zone_click
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                {move || match field.preview.with(|p| p.data_url().map(str::to_owned)) {
                    Some(src) => view! {
                        <div class="dropzone__preview">
                            <img class="dropzone__image" src=src alt=""/>
                        </div>
                        <div class="dropzone__actions">
                            <button type="button" class="dropzone__action dropzone__action--link" on:click=on_remove>
                                "Remove Image"
                            </button>
                            <button type="button" class="dropzone__action" on:click=on_change_image>
                                "Change image"
                            </button>
                        </div>
                    }
                        .into_any(),
                    None => view! { <UploadIcon class="dropzone__icon"/> }.into_any(),
                }}
                <input
                    id="avatar-input"
                    class="dropzone__input"
                    type="file"
                    accept=ACCEPT_ATTR
                    node_ref=input_ref
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    on:change=on_change
                />
                {move || {
                    field.preview.with(PreviewState::prompt).map(|text| view! { <p class="dropzone__prompt">{text}</p> })
                }}
            </div>
            <p class="form-field__hint" class:form-field__hint--error=move || field.error.get().is_some()>
                <InfoIcon class="form-field__hint-icon"/>
                {move || field.error.get().map_or_else(|| AVATAR_HINT.to_owned(), |e| e.to_string())}
            </p>
        </div>
    }
}
