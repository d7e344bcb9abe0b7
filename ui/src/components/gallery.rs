use leptos::prelude::*;

use crate::config::LIGHTBOX_FADE_MS;
use crate::timer::{TaskSlot, WebScheduler};

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// At most one image is ever shown; `Closing` keeps it mounted for the fade-out.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(GalleryImage),
    Closing(GalleryImage),
}

impl Lightbox {
    pub fn open(&mut self, image: GalleryImage) {
        *self = Lightbox::Open(image);
    }

    /// Returns false if there was nothing open to close.
    pub fn begin_close(&mut self) -> bool {
        match std::mem::take(self) {
            Lightbox::Open(img) => {
                *self = Lightbox::Closing(img);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn finish_close(&mut self) {
        if matches!(self, Lightbox::Closing(_)) {
            *self = Lightbox::Closed;
        }
    }

    pub fn image(&self) -> Option<&GalleryImage> {
        match self {
            Lightbox::Open(img) | Lightbox::Closing(img) => Some(img),
            Lightbox::Closed => None,
        }
    }

    pub fn animation(&self) -> &'static str {
        match self {
            Lightbox::Closing(_) => "fadeOut 0.3s ease",
            _ => "fadeIn 0.3s ease",
        }
    }
}

const BACKDROP_STYLE: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
    background: rgba(0, 0, 0, 0.95); display: flex; align-items: center; \
    justify-content: center; z-index: 10000;";

const PHOTOS: &[(&str, &str)] = &[
    ("/assets/img/gallery-1.jpg", "Gastraum am Abend"),
    ("/assets/img/gallery-2.jpg", "Rinderfilet mit Trüffeljus"),
    ("/assets/img/gallery-3.jpg", "Unsere Weinkarte"),
    ("/assets/img/gallery-4.jpg", "Küchenteam beim Anrichten"),
    ("/assets/img/gallery-5.jpg", "Terrasse im Sommer"),
    ("/assets/img/gallery-6.jpg", "Crème brûlée"),
];

#[component]
pub fn GallerySection() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::default());
    let closer = StoredValue::new_local(TaskSlot::new(WebScheduler));

    let open = move |image: GalleryImage| {
        closer.update_value(|slot| slot.cancel());
        lightbox.update(|lb| lb.open(image));
    };

    let close = move || {
        if lightbox.try_update(Lightbox::begin_close).unwrap_or(false) {
            closer.update_value(|slot| {
                slot.arm(LIGHTBOX_FADE_MS, move || lightbox.update(Lightbox::finish_close))
            });
        }
    };

    let items = PHOTOS
        .iter()
        .map(|&(src, alt)| {
            let image = GalleryImage {
                src: src.to_owned(),
                alt: alt.to_owned(),
            };
            view! {
                <div class="gallery-item" on:click=move |_| open(image.clone())>
                    <img src=src alt=alt loading="lazy"/>
                    <div class="gallery-overlay"><span>{alt}</span></div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let overlay = move || {
        let state = lightbox.get();
        let animation = state.animation();
        state.image().cloned().map(|GalleryImage { src, alt }| {
            let caption = alt.clone();
            view! {
                <div
                    class="lightbox"
                    style=format!("{BACKDROP_STYLE} animation: {animation};")
                    on:click=move |_| close()
                >
                    <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                        <span
                            class="lightbox-close"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                close();
                            }
                        >
                            "×"
                        </span>
                        <img src=src alt=alt/>
                        <div class="lightbox-caption">{caption}</div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <div class="section-header">
                    <span class="section-subtitle">"Eindrücke"</span>
                    <h2>"Galerie"</h2>
                </div>
                <div class="gallery-grid">{items}</div>
            </div>
            {overlay}
        </section>
    }
}
