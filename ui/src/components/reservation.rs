use leptos::logging::{error, log};
use leptos::prelude::*;
use serde::Serialize;

use crate::components::field::FieldStatus;
use crate::config::RESERVATION_REVERT_MS;
use crate::timer::{Scheduler, TaskSlot, WebScheduler};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
        Field::Guests,
        Field::Message,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
            Field::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Message)
    }
}

/// What a guest typed in; logged as JSON on submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl Reservation {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Guests => &self.guests,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Guests => &mut self.guests,
            Field::Message => &mut self.message,
        }
    }
}

/// Draft, per-field validation and the confirmed flag.
///
/// While `confirmed` the form carries `hide` and the success box `show`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationForm {
    pub draft: Reservation,
    status: [FieldStatus; Field::ALL.len()],
    pub confirmed: bool,
}

impl ReservationForm {
    pub fn input(&mut self, field: Field, value: String) {
        let st = &mut self.status[field.index()];
        if field.required() {
            *st = st.on_input(&value);
        }
        *self.draft.slot(field) = value;
    }

    pub fn blur(&mut self, field: Field) {
        if field.required() {
            self.status[field.index()] = FieldStatus::on_blur(self.draft.get(field));
        }
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        self.status[field.index()]
    }

    pub fn submit(&mut self) -> Reservation {
        self.confirmed = true;
        self.draft.clone()
    }

    /// Back to an empty, visible form.
    pub fn revert(&mut self) {
        *self = Self::default();
    }
}

/// `YYYY-MM-DD` for a `<input type="date" min=..>`; `month0` is zero-based like JS `Date`.
pub fn iso_date(year: u32, month0: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month0 + 1)
}

/// Confirms the form, logs the data and (re)arms the revert.
///
/// A second submit re-arms the slot instead of stacking timers.
pub fn submit_reservation<S: Scheduler>(
    form: RwSignal<ReservationForm>,
    revert: &mut TaskSlot<S>,
) -> Option<Reservation> {
    let data = form.try_update(|f| f.submit())?;
    match serde_json::to_string(&data) {
        Ok(json) => log!("Reservation Data: {json}"),
        Err(e) => error!("could not serialize reservation: {e}"),
    }

    revert.arm(RESERVATION_REVERT_MS, move || form.update(ReservationForm::revert));
    Some(data)
}

fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    iso_date(now.get_full_year(), now.get_month(), now.get_date())
}

#[component]
fn TextField(
    form: RwSignal<ReservationForm>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] min: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.id()>{label}</label>
            <input
                type=kind
                id=field.id()
                name=field.id()
                min=min
                required=field.required()
                class=("error", move || form.with(|f| f.status(field).is_error()))
                class=("valid", move || form.with(|f| f.status(field).is_valid()))
                prop:value=move || form.with(|f| f.draft.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
        </div>
    }
}

#[component]
pub fn ReservationSection() -> impl IntoView {
    let form = RwSignal::new(ReservationForm::default());
    let revert = StoredValue::new_local(TaskSlot::new(WebScheduler));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        revert.update_value(|slot| {
            submit_reservation(form, slot);
        });
    };

    let guests = Field::Guests;

    view! {
        <section id="reservation" class="reservation">
            <div class="container">
                <div class="reservation-content">
                    <div class="section-header">
                        <span class="section-subtitle">"Reservierung"</span>
                        <h2>"Tisch reservieren"</h2>
                    </div>

                    <form
                        id="reservationForm"
                        class="reservation-form"
                        class=("hide", move || form.with(|f| f.confirmed))
                        on:submit=on_submit
                    >
                        <div class="form-row">
                            <TextField form field=Field::Name label="Name"/>
                            <TextField form field=Field::Email label="E-Mail" kind="email"/>
                        </div>
                        <div class="form-row">
                            <TextField form field=Field::Phone label="Telefon" kind="tel"/>
                            <TextField form field=Field::Date label="Datum" kind="date" min=today_iso()/>
                        </div>
                        <div class="form-row">
                            <TextField form field=Field::Time label="Uhrzeit" kind="time"/>
                            <div class="form-group">
                                <label for=guests.id()>"Personen"</label>
                                <select
                                    id=guests.id()
                                    name=guests.id()
                                    required=true
                                    class=("error", move || form.with(|f| f.status(guests).is_error()))
                                    class=("valid", move || form.with(|f| f.status(guests).is_valid()))
                                    prop:value=move || form.with(|f| f.draft.get(guests).to_owned())
                                    on:change=move |ev| form.update(|f| f.input(guests, event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.blur(guests))
                                >
                                    <option value="">"Bitte wählen"</option>
                                    {(1..=8)
                                        .map(|n| view! { <option value=n.to_string()>{n}</option> })
                                        .collect::<Vec<_>>()}
                                    <option value="9+">"9+"</option>
                                </select>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="message">"Besondere Wünsche"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                prop:value=move || form.with(|f| f.draft.message.clone())
                                on:input=move |ev| form.update(|f| f.input(Field::Message, event_target_value(&ev)))
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary">"Jetzt reservieren"</button>
                    </form>

                    <div
                        id="reservationSuccess"
                        class="reservation-success"
                        class=("show", move || form.with(|f| f.confirmed))
                    >
                        <h3>"Vielen Dank!"</h3>
                        <p>"Ihre Reservierungsanfrage ist eingegangen. Wir bestätigen sie in Kürze per E-Mail."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
