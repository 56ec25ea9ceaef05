// Copyright © 2025 Nipun Kumar

use dioxus::{
    html::{FileData, HasFileData},
    logger::tracing::warn,
    prelude::*,
};

use crate::{
    intake::photo::{PhotoIntake, UploadedFile},
    ui::notice::NoticeBanner,
};

/// Reads the first of `files` into memory.
async fn read_first(files: Vec<FileData>) -> Option<UploadedFile> {
    let file = files.into_iter().next()?;
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => Some(UploadedFile {
            name,
            media_type: file.content_type(),
            bytes: bytes.to_vec(),
        }),
        Err(e) => {
            warn!("Could not read {name}: {e:?}");
            None
        }
    }
}

/// Drop zone, file picker and simulated camera, then a preview with an
/// "Analyze Homework" button once an image is loaded.
///
/// The analysis itself is started by the parent through `on_analyze` so that
/// it outlives this component when the user switches tabs.
#[component]
pub fn PhotoUpload(
    photo: Signal<PhotoIntake>,
    max_upload_label: String,
    on_analyze: Callback<(), ()>,
) -> Element {
    let mut photo = photo;
    let current = photo.read().clone();

    let notice = current.notice.as_ref().map(|e| {
        rsx! {
            NoticeBanner {
                message: e.to_string(),
                on_dismiss: move |_| photo.write().dismiss_notice(),
            }
        }
    });

    let Some(image) = current.image else {
        let zone_class = if current.drag_active {
            "drop-zone active"
        } else {
            "drop-zone"
        };
        return rsx! {
            div { class: "photo-upload",
                {notice}
                div {
                    class: "{zone_class}",
                    ondragenter: move |e: DragEvent| {
                        e.prevent_default();
                        photo.write().set_drag_active(true);
                    },
                    ondragover: move |e: DragEvent| {
                        e.prevent_default();
                        photo.write().set_drag_active(true);
                    },
                    ondragleave: move |e: DragEvent| {
                        e.prevent_default();
                        photo.write().set_drag_active(false);
                    },
                    ondrop: move |e: DragEvent| async move {
                        e.prevent_default();
                        photo.write().set_drag_active(false);
                        if let Some(file) = read_first(e.files()).await {
                            // Rejections are shown through the intake notice.
                            let _ = photo.write().accept_file(file);
                        }
                    },
                    input {
                        id: "homework-file",
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |e: FormEvent| async move {
                            if let Some(file) = read_first(e.files()).await {
                                let _ = photo.write().accept_file(file);
                            }
                        },
                    }
                    div { class: "drop-zone-icon", "📷" }
                    h3 { "Upload Homework Photo" }
                    p { class: "muted", "Take a clear photo of the homework question or worksheet" }
                    div { class: "button-row",
                        label { r#for: "homework-file", class: "button outline", "⇪ Choose File" }
                        button {
                            class: "outline",
                            onclick: move |_| photo.write().capture(),
                            "📷 Use Camera"
                        }
                    }
                    div { class: "hint", "Supported formats: JPG, PNG, WEBP (Max {max_upload_label})" }
                }
            }
        };
    };

    let analyzing = current.analyzing;
    let src = image.data_uri;
    rsx! {
        div { class: "photo-upload",
            {notice}
            div { class: "card preview",
                div { class: "preview-frame",
                    img { src: "{src}", alt: "Uploaded homework" }
                    button {
                        class: "clear-image",
                        title: "Remove photo",
                        onclick: move |_| photo.write().clear(),
                        "✕"
                    }
                }
                div { class: "button-row",
                    button {
                        class: "primary",
                        disabled: analyzing,
                        onclick: move |_| on_analyze(()),
                        if analyzing {
                            span { class: "spinner" }
                            "Analyzing..."
                        } else {
                            "🖼 Analyze Homework"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nothing_dropped_reads_nothing() {
        assert!(read_first(Vec::new()).await.is_none());
    }
}
