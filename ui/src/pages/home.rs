use leptos::prelude::*;

use crate::components::{
    anchor::Anchor, gallery::GallerySection, hero::Hero, menu::MenuSection,
    reservation::ReservationSection,
};

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-content">
                    <div class="section-header">
                        <span class="section-subtitle">"Über uns"</span>
                        <h2>"Tradition trifft Handwerk"</h2>
                    </div>
                    <p>
                        "Seit über 25 Jahren kochen wir mit Produkten aus der Region. "
                        "Was auf den Teller kommt, entscheidet der Markt am Morgen."
                    </p>
                    <Anchor href="#menu" class="btn btn-secondary">"Zur Speisekarte"</Anchor>
                </div>

                <div class="features">
                    <FeatureCard icon="🌿" title="Regional" text="Gemüse und Fleisch von Höfen im Umland."/>
                    <FeatureCard icon="🍷" title="Weinkeller" text="Über 200 Positionen, viele davon offen."/>
                    <FeatureCard icon="👨‍🍳" title="Handwerk" text="Brot, Fonds und Pasta machen wir selbst."/>
                </div>
            </div>
        </section>
    }
}

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Das beste Rinderfilet der Stadt, und der Service ist herzlich.", "Miriam K."),
    ("Wir feiern hier jeden Hochzeitstag. Immer wieder großartig.", "Jonas & Lea"),
    ("Die Weinbegleitung war eine echte Entdeckung.", "Peter S."),
];

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <span class="section-subtitle">"Gäste"</span>
                    <h2>"Was unsere Gäste sagen"</h2>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|&(quote, who)| view! {
                            <div class="testimonial-card">
                                <p class="testimonial-text">{quote}</p>
                                <span class="testimonial-author">{who}</span>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <span class="section-subtitle">"Kontakt"</span>
                    <h2>"So finden Sie uns"</h2>
                </div>
                <div class="contact-grid">
                    <div class="contact-item">
                        <h4>"Adresse"</h4>
                        <p>"Marktplatz 7" <br/> "80331 München"</p>
                    </div>
                    <div class="contact-item">
                        <h4>"Öffnungszeiten"</h4>
                        <p>"Di–Sa 17:30–23:00" <br/> "So 12:00–15:00"</p>
                    </div>
                    <div class="contact-item">
                        <h4>"Telefon"</h4>
                        <p><a href="tel:+49891234567">"+49 89 123 45 67"</a></p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <About/>
        <MenuSection/>
        <GallerySection/>
        <Testimonials/>
        <ReservationSection/>
        <Contact/>
    }
}
