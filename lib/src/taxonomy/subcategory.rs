use std::fmt;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, Lang};

/// A finer-grained gallery label within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    ZaanseSchans,
    ZaanSampler,
    #[serde(rename = "17de-eeuws")]
    ZeventiendeEeuws,
    MarktPlein,
    IconischePanden,
    AlgemeenStadsgezicht,
    Molentypen,
    Watermolens,
    MolenZeilschip,
    TraditioneleKostuums,
    RegioMerklappen,
    Tegelmotieven,
    PostzegelBorduurwerken,
    WapensDeviezen,
    InhuldigingenGeboorte,
    HuwelijksJubileum,
    KamerWildeBloemen,
    Bloembollenlandschap,
    /// Not yet classified.
    Onbekend,
}

/// One rule of a subcategory table: any keyword match selects `subcategory`.
#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub subcategory: Subcategory,
}

/// An ordered rule list. The first matching rule wins; `fallback` applies
/// when none match.
#[derive(Debug)]
pub struct RuleSet {
    pub rules: &'static [Rule],
    pub fallback: Subcategory,
}

macro_rules! rules {
    ($($($keyword:literal)|+ => $sub:ident),* ; else $fallback:ident) => (
        RuleSet {
            rules: &[$(Rule { keywords: &[$($keyword),+], subcategory: Subcategory::$sub }),*],
            fallback: Subcategory::$fallback,
        }
    )
}

static ZAANSE: RuleSet = rules! {
    "schans" | "molens" => ZaanseSchans,
    "sampler" | "merklap" | "houten huisjes" => ZaanSampler;
    else ZaanseSchans
};

static STADSGEZICHTEN: RuleSet = rules! {
    "1650" | "17de eeuw" | "amstelredam" => ZeventiendeEeuws,
    "waterlooplein" | "markt" | "plein" => MarktPlein,
    "paleis" | "dam" | "grachtenpand" => IconischePanden;
    else AlgemeenStadsgezicht
};

static MOLENS: RuleSet = rules! {
    "stellingmolen" | "grondzeiler" | "tower mill" | "diverse molen" => Molentypen,
    "watermolen" | "polder" | "hollow post" => Watermolens,
    "zeilschip" | "sailing ship" => MolenZeilschip;
    else Molentypen
};

static KLEDERDRACHT: RuleSet = rules! {
    "echtparen" | "kostuum" | "traditionele" => TraditioneleKostuums,
    "merklap" | "friesland" | "heraldiek" | "wapen" => RegioMerklappen;
    else TraditioneleKostuums
};

static DELFTS: RuleSet = rules! {
    "tegel" | "molen" | "stokpaard" => Tegelmotieven,
    "postzegel" | "wilhelmina" | "juliana" => PostzegelBorduurwerken;
    else Tegelmotieven
};

static KONINKLIJK: RuleSet = rules! {
    "maintiendrai" | "wapen" | "devies" | "heraldiek" => WapensDeviezen,
    "geboorte" | "inhuldiging" | "beatrix" | "amalia" => InhuldigingenGeboorte,
    "huwelijk" | "claus" | "máxima" | "willem" => HuwelijksJubileum;
    else WapensDeviezen
};

static FLORA: RuleSet = rules! {
    "viooltje" | "korenbloem" | "kaaps" | "wilde bloemen" => KamerWildeBloemen,
    "bollenstreek" | "bollen" | "bulb" => Bloembollenlandschap;
    else KamerWildeBloemen
};

impl RuleSet {
    /// Evaluates the rules against `text`, which must be lowercase.
    pub fn evaluate(&self, text: &str) -> Subcategory {
        self.rules.iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
            .map_or(self.fallback, |rule| rule.subcategory)
    }
}

impl Category {
    pub fn rules(self) -> &'static RuleSet {
        match self {
            Category::Zaanse => &ZAANSE,
            Category::Stadsgezichten => &STADSGEZICHTEN,
            Category::Molens => &MOLENS,
            Category::Klederdracht => &KLEDERDRACHT,
            Category::Delfts => &DELFTS,
            Category::Koninklijk => &KONINKLIJK,
            Category::Flora => &FLORA,
        }
    }
}

impl Subcategory {
    /// Derives the subcategory of an item in `category` from its title and
    /// description.
    pub fn derive(category: Category, title: &str, description: &str) -> Subcategory {
        let text = format!("{title} {description}").to_lowercase();
        category.rules().evaluate(&text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subcategory::ZaanseSchans => "zaanse-schans",
            Subcategory::ZaanSampler => "zaan-sampler",
            Subcategory::ZeventiendeEeuws => "17de-eeuws",
            Subcategory::MarktPlein => "markt-plein",
            Subcategory::IconischePanden => "iconische-panden",
            Subcategory::AlgemeenStadsgezicht => "algemeen-stadsgezicht",
            Subcategory::Molentypen => "molentypen",
            Subcategory::Watermolens => "watermolens",
            Subcategory::MolenZeilschip => "molen-zeilschip",
            Subcategory::TraditioneleKostuums => "traditionele-kostuums",
            Subcategory::RegioMerklappen => "regio-merklappen",
            Subcategory::Tegelmotieven => "tegelmotieven",
            Subcategory::PostzegelBorduurwerken => "postzegel-borduurwerken",
            Subcategory::WapensDeviezen => "wapens-deviezen",
            Subcategory::InhuldigingenGeboorte => "inhuldigingen-geboorte",
            Subcategory::HuwelijksJubileum => "huwelijks-jubileum",
            Subcategory::KamerWildeBloemen => "kamer-wilde-bloemen",
            Subcategory::Bloembollenlandschap => "bloembollenlandschap",
            Subcategory::Onbekend => "onbekend",
        }
    }

    /// The display label, or `None` for an unclassified item.
    pub fn label(self, lang: Lang) -> Option<&'static str> {
        let (nl, en) = match self {
            Subcategory::ZaanseSchans => ("Zaanse Schans", "Zaanse Schans"),
            Subcategory::ZaanSampler => ("Zaan Sampler", "Zaan Sampler"),
            Subcategory::ZeventiendeEeuws => ("17de eeuw", "17th Century"),
            Subcategory::MarktPlein => ("Markt & Plein", "Market & Square"),
            Subcategory::IconischePanden => ("Iconische Panden", "Iconic Buildings"),
            Subcategory::AlgemeenStadsgezicht => ("Algemeen", "General"),
            Subcategory::Molentypen => ("Molentypen", "Mill Types"),
            Subcategory::Watermolens => ("Watermolens", "Water Mills"),
            Subcategory::MolenZeilschip => ("Molen & Zeilschip", "Mill & Sailing Ship"),
            Subcategory::TraditioneleKostuums => ("Traditionele Kostuums", "Traditional Costumes"),
            Subcategory::RegioMerklappen => ("Regio Merklappen", "Regional Samplers"),
            Subcategory::Tegelmotieven => ("Tegelmotieven", "Tile Motifs"),
            Subcategory::PostzegelBorduurwerken => ("Postzegel Borduurwerken", "Postage Stamp Embroidery"),
            Subcategory::WapensDeviezen => ("Wapens & Deviezen", "Coats of Arms & Mottos"),
            Subcategory::InhuldigingenGeboorte => ("Inhuldigingen & Geboorte", "Inaugurations & Birth"),
            Subcategory::HuwelijksJubileum => ("Huwelijks & Jubileum", "Wedding & Jubilee"),
            Subcategory::KamerWildeBloemen => ("Kamer- & Wilde Bloemen", "House & Wild Flowers"),
            Subcategory::Bloembollenlandschap => ("Bloembollenlandschap", "Flower Bulb Landscape"),
            Subcategory::Onbekend => return None,
        };

        Some(lang.pick(nl, en))
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        // "amstelredam" and "dam" both match; the 17th century rule is first.
        let sub = Subcategory::derive(Category::Stadsgezichten, "Amstelredam 1650", "De Dam");
        assert_eq!(sub, Subcategory::ZeventiendeEeuws);

        let sub = Subcategory::derive(Category::Stadsgezichten, "Waterlooplein", "Paleis op de Dam");
        assert_eq!(sub, Subcategory::MarktPlein);
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let sub = Subcategory::derive(Category::Stadsgezichten, "Herengracht", "");
        assert_eq!(sub, Subcategory::AlgemeenStadsgezicht);
        assert_eq!(Subcategory::derive(Category::Flora, "", ""), Subcategory::KamerWildeBloemen);
        assert_eq!(Subcategory::derive(Category::Molens, "", ""), Subcategory::Molentypen);
    }

    #[test]
    fn matching_ignores_case() {
        let sub = Subcategory::derive(Category::Koninklijk, "Huwelijk Willem-Alexander en MÁXIMA", "");
        assert_eq!(sub, Subcategory::HuwelijksJubileum);
        let sub = Subcategory::derive(Category::Flora, "De BOLLENSTREEK", "");
        assert_eq!(sub, Subcategory::Bloembollenlandschap);
    }

    #[test]
    fn each_rule_is_reachable() {
        for category in Category::ALL {
            for rule in category.rules().rules {
                for keyword in rule.keywords {
                    let derived = Subcategory::derive(category, keyword, "");
                    let earlier = category.rules().rules.iter()
                        .take_while(|r| r.subcategory != rule.subcategory)
                        .any(|r| r.keywords.iter().any(|k| keyword.contains(k)));

                    if !earlier {
                        assert_eq!(derived, rule.subcategory, "{category}: {keyword}");
                    }
                }
            }
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        let json = serde_json::to_string(&Subcategory::ZeventiendeEeuws).unwrap();
        assert_eq!(json, "\"17de-eeuws\"");
        let json = serde_json::to_string(&Subcategory::KamerWildeBloemen).unwrap();
        assert_eq!(json, "\"kamer-wilde-bloemen\"");
        let json = serde_json::to_string(&Subcategory::Onbekend).unwrap();
        assert_eq!(json, format!("\"{}\"", Subcategory::Onbekend));
    }

    #[test]
    fn labels() {
        assert_eq!(Subcategory::MarktPlein.label(Lang::En), Some("Market & Square"));
        assert_eq!(Subcategory::MarktPlein.label(Lang::Nl), Some("Markt & Plein"));
        assert_eq!(Subcategory::Onbekend.label(Lang::Nl), None);
    }
}
