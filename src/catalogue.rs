// SPDX-License-Identifier: MPL-2.0
//! Built-in catalogue of tour categories and their places.
//!
//! The tour listing is drawn from this table. Entries can also be opened
//! directly in the viewer (`/virtual-tour/{category}/{index}`) without a
//! backend round trip.

use crate::domain::{Language, LocalizedText, Place, PlaceId, Text};

/// Strings in every site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Names {
    pub fr: &'static str,
    pub ar: &'static str,
    pub wo: &'static str,
    pub en: &'static str,
}

impl Names {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::French => self.fr,
            Language::Arabic => self.ar,
            Language::Wolof => self.wo,
            Language::English => self.en,
        }
    }

    #[must_use]
    pub fn to_text(&self) -> Text {
        Text::Localized(LocalizedText::new(self.fr, self.ar, self.wo, self.en))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CataloguePlace {
    pub id: &'static str,
    pub name: Names,
    pub description: Names,
    /// Storage path or absolute URL of the panorama.
    pub image: &'static str,
}

impl CataloguePlace {
    #[must_use]
    pub fn to_place(&self) -> Place {
        Place {
            id: PlaceId::new(self.id),
            name: self.name.to_text(),
            image: self.image.to_string(),
            description: Some(self.description.to_text()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Path segment used in routes.
    pub key: &'static str,
    pub name: Names,
    pub places: &'static [CataloguePlace],
}

static CATEGORIES: &[Category] = &[
    Category {
        key: "priere",
        name: Names {
            fr: "Espaces de prière",
            ar: "أماكن الصلاة",
            wo: "Fenn yu jëmm",
            en: "Prayer spaces",
        },
        places: &[CataloguePlace {
            id: "01crfr-vregtge564-verg84fr-wer2frfr-15rfafefqw-vwefwf897-efqwfeff84f9wf-fewfwfewf898-dzgwefwdc4dcSff-safcr3fr-fcvsffewfsdcdcf",
            name: Names {
                fr: "Salle de prière principale",
                ar: "قاعة الصلاة الرئيسية",
                wo: "Kër jumma bu mag",
                en: "Main prayer hall",
            },
            description: Names {
                fr: "Lieu central pour les prières collectives.",
                ar: "المكان المركزي للصلاة الجماعية.",
                wo: "Fenn bu mag ngir jëmm.",
                en: "Central place for collective prayers.",
            },
            image: "hall.jpg",
        }],
    },
    Category {
        key: "architecture",
        name: Names {
            fr: "Architecture",
            ar: "الهندسة المعمارية",
            wo: "Arkitektuur",
            en: "Architecture",
        },
        places: &[
            CataloguePlace {
                id: "0casf515-sfrefreferrf54651-vre889qeqwewfwe-csdfrttr78f-dvfb1684-dvfv654fqewf-vrf51vwefq",
                name: Names {
                    fr: "Minaret",
                    ar: "المئذنة",
                    wo: "Minare",
                    en: "Minaret",
                },
                description: Names {
                    fr: "Tour emblématique pour l'appel à la prière.",
                    ar: "برج مميز للأذان.",
                    wo: "Tur bu mag ngir woy.",
                    en: "Iconic tower for the call to prayer.",
                },
                image: "centre.jpg",
            },
            CataloguePlace {
                id: "1f4azfefrvbgrt-sdfvstrrbfv-ver554cwf-sefrfsdf1654-aefrqwerwfwewfr-avaf16wedq-Qwerer5641-wewed51",
                name: Names {
                    fr: "Mihrab",
                    ar: "المحراب",
                    wo: "Mihrab",
                    en: "Mihrab",
                },
                description: Names {
                    fr: "Niche indiquant la direction de la Mecque.",
                    ar: "مكان يحدد اتجاه مكة.",
                    wo: "Niche ngir jëmm ci Maka.",
                    en: "Niche indicating the direction of Mecca.",
                },
                image: "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429",
            },
        ],
    },
    Category {
        key: "espaces",
        name: Names {
            fr: "Espaces communs",
            ar: "المساحات المشتركة",
            wo: "Kaw yu askan wi",
            en: "Community spaces",
        },
        places: &[CataloguePlace {
            id: "0vgr18ogbkjopojp5-fr8vsfr6d5fv5edf-wefqwerrf61514e-xcvoiloiòp-vdfvf2e2bfdf54vf-fwefr6yfbfbjgbf-65132ddgertfgfhgf-dsffr86ef498grg-ffregfdv2dv8-sdfe6",
            name: Names {
                fr: "Cour intérieure",
                ar: "الفناء الداخلي",
                wo: "Kaw bu ca biir",
                en: "Inner courtyard",
            },
            description: Names {
                fr: "Espace ouvert pour la communauté.",
                ar: "مساحة مفتوحة للمجتمع.",
                wo: "Kaw bu leer ngir askan wi.",
                en: "Open space for the community.",
            },
            image: "https://images.unsplash.com/photo-1464983953574-0892a716854b",
        }],
    },
    Category {
        key: "savoir",
        name: Names {
            fr: "Savoir & étude",
            ar: "العلم والدراسة",
            wo: "Xam-xam ak jàng",
            en: "Knowledge & study",
        },
        places: &[CataloguePlace {
            id: "0vfe65kmpsw-ewtg156wf43frefq-fwef1wf6qwf18fvxdscdsvfeg1-qrds12vv1f3cvcfr-wqrwer1ds1ffr5wqew-f5f1w89wffew-rf5fwr98w4",
            name: Names {
                fr: "Bibliothèque",
                ar: "المكتبة",
                wo: "Biiblioteek",
                en: "Library",
            },
            description: Names {
                fr: "Lieu de savoir et d'étude.",
                ar: "مكان للعلم والدراسة.",
                wo: "Fenn bu xam-xam ak jàng.",
                en: "Place of knowledge and study.",
            },
            image: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca",
        }],
    },
];

/// All categories in display order.
#[must_use]
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

#[must_use]
pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}

/// The `index`-th place of category `key`.
#[must_use]
pub fn entry(key: &str, index: usize) -> Option<&'static CataloguePlace> {
    find(key)?.places.get(index)
}
