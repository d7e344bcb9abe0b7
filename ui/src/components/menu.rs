use leptos::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuCategory {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

pub struct Dish {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

const STARTERS: &[Dish] = &[
    Dish { name: "Burrata", description: "Tomaten, Basilikum, alter Balsamico", price: "14 €" },
    Dish { name: "Rindertatar", description: "Kapern, Eigelb, Sauerteigbrot", price: "18 €" },
    Dish { name: "Kürbissuppe", description: "geröstete Kerne, Kernöl", price: "9 €" },
];

const MAINS: &[Dish] = &[
    Dish { name: "Rinderfilet", description: "Trüffeljus, Kartoffelgratin", price: "38 €" },
    Dish { name: "Zander", description: "Beurre blanc, Fenchel, Safran", price: "29 €" },
    Dish { name: "Risotto", description: "Steinpilze, Parmesan, Petersilie", price: "22 €" },
];

const DESSERTS: &[Dish] = &[
    Dish { name: "Crème brûlée", description: "Tahiti-Vanille", price: "9 €" },
    Dish { name: "Schokoladentarte", description: "Meersalz, Crème fraîche", price: "11 €" },
];

const DRINKS: &[Dish] = &[
    Dish { name: "Hauswein", description: "rot oder weiß, 0,2 l", price: "7 €" },
    Dish { name: "Espresso", description: "Single Origin", price: "3 €" },
    Dish { name: "Hausgemachte Limonade", description: "Zitrone, Minze", price: "5 €" },
];

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Desserts,
        MenuCategory::Drinks,
    ];

    /// Matches the tab's `data-category` and the category block's `id`.
    pub fn id(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "starters",
            MenuCategory::Mains => "mains",
            MenuCategory::Desserts => "desserts",
            MenuCategory::Drinks => "drinks",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Vorspeisen",
            MenuCategory::Mains => "Hauptgerichte",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Drinks => "Getränke",
        }
    }

    /// Tab and category block share this; exactly one category is active.
    pub fn is_active(self, selected: MenuCategory) -> bool {
        self == selected
    }

    pub fn select(self, sel: RwSignal<MenuCategory>) {
        sel.set(self);
    }

    pub fn dishes(&self) -> &'static [Dish] {
        match self {
            MenuCategory::Starters => STARTERS,
            MenuCategory::Mains => MAINS,
            MenuCategory::Desserts => DESSERTS,
            MenuCategory::Drinks => DRINKS,
        }
    }
}

pub trait MenuTab {
    fn labelled_tab(self, sel: RwSignal<MenuCategory>) -> impl IntoView;
    fn category_block(self, sel: RwSignal<MenuCategory>) -> impl IntoView;
}

impl MenuTab for MenuCategory {
    fn labelled_tab(self, sel: RwSignal<MenuCategory>) -> impl IntoView {
        view! {
            <button
                class="menu-tab"
                class=("active", move || self.is_active(sel.get()))
                data-category=self.id()
                on:click=move |_| self.select(sel)
            >
                {self.label()}
            </button>
        }
    }

    fn category_block(self, sel: RwSignal<MenuCategory>) -> impl IntoView {
        let dishes = self
            .dishes()
            .iter()
            .map(|d| {
                view! {
                    <div class="menu-item">
                        <div class="menu-item-header">
                            <h4>{d.name}</h4>
                            <span class="menu-item-price">{d.price}</span>
                        </div>
                        <p>{d.description}</p>
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div
                id=self.id()
                class="menu-category"
                class=("active", move || self.is_active(sel.get()))
            >
                {dishes}
            </div>
        }
    }
}

#[component]
pub fn MenuSection() -> impl IntoView {
    let selected = RwSignal::new(MenuCategory::Starters);

    view! {
        <section id="menu" class="menu">
            <div class="container">
                <div class="section-header">
                    <span class="section-subtitle">"Unsere Küche"</span>
                    <h2>"Speisekarte"</h2>
                </div>

                <div class="menu-tabs">
                    {MenuCategory::ALL.into_iter().map(|c| c.labelled_tab(selected)).collect::<Vec<_>>()}
                </div>

                <div class="menu-content">
                    {MenuCategory::ALL.into_iter().map(|c| c.category_block(selected)).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn ids_round_trip_for_every_tab() {
        for c in MenuCategory::ALL {
            assert_eq!(MenuCategory::from_id(c.id()), Some(c));
        }
        assert_eq!(MenuCategory::from_id("brunch"), None);
    }

    #[test]
    fn selecting_a_tab_activates_only_its_category_from_any_prior_state() {
        Owner::new().with(|| {
            for prior in MenuCategory::ALL {
                let sel = RwSignal::new(prior);
                let desserts = MenuCategory::from_id("desserts").unwrap();
                desserts.select(sel);

                let active: Vec<_> = MenuCategory::ALL
                    .into_iter()
                    .filter(|c| c.is_active(sel.get_untracked()))
                    .map(|c| c.id())
                    .collect();
                assert_eq!(active, vec!["desserts"], "prior = {prior:?}");
            }
        });
    }

    #[test]
    fn switching_tabs_moves_the_active_marker() {
        Owner::new().with(|| {
            let sel = RwSignal::new(MenuCategory::Mains);
            assert!(MenuCategory::Mains.is_active(sel.get_untracked()));

            MenuCategory::Drinks.select(sel);
            assert!(!MenuCategory::Mains.is_active(sel.get_untracked()));
            assert!(MenuCategory::Drinks.is_active(sel.get_untracked()));

            // re-selecting is a no-op, not a toggle
            MenuCategory::Drinks.select(sel);
            assert!(MenuCategory::Drinks.is_active(sel.get_untracked()));
        });
    }

    #[test]
    fn every_category_has_dishes() {
        assert!(MenuCategory::ALL.iter().all(|c| !c.dishes().is_empty()));
    }
}
