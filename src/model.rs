use crate::error::KioskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Texto en los dos idiomas del kiosco.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bilingual {
    pub en: String,
    pub ar: String,
}

impl Bilingual {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Retail,
    Corporate,
}

impl Segment {
    pub const ALL: [Segment; 2] = [Segment::Retail, Segment::Corporate];

    pub fn key(self) -> &'static str {
        match self {
            Segment::Retail => "retail",
            Segment::Corporate => "corporate",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    // Retail
    MobileApp,
    InstantFinance,
    InstantPrepaid,
    CardOffers,
    DAwards,
    // Corporate
    Vcp,
    Wps,
    PaymentGateway,
    Rdc,
    DigitalOnboarding,
}

impl Product {
    pub const ALL: [Product; 10] = [
        Product::MobileApp,
        Product::InstantFinance,
        Product::InstantPrepaid,
        Product::CardOffers,
        Product::DAwards,
        Product::Vcp,
        Product::Wps,
        Product::PaymentGateway,
        Product::Rdc,
        Product::DigitalOnboarding,
    ];

    pub fn segment(self) -> Segment {
        match self {
            Product::MobileApp
            | Product::InstantFinance
            | Product::InstantPrepaid
            | Product::CardOffers
            | Product::DAwards => Segment::Retail,
            Product::Vcp
            | Product::Wps
            | Product::PaymentGateway
            | Product::Rdc
            | Product::DigitalOnboarding => Segment::Corporate,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Product::MobileApp => "mobile_app",
            Product::InstantFinance => "instant_finance",
            Product::InstantPrepaid => "instant_prepaid",
            Product::CardOffers => "card_offers",
            Product::DAwards => "dawards",
            Product::Vcp => "vcp",
            Product::Wps => "wps",
            Product::PaymentGateway => "payment_gateway",
            Product::Rdc => "rdc",
            Product::DigitalOnboarding => "digital_onboarding",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum ChapterId {
    One,
    Two,
    Three,
    Four,
}

impl ChapterId {
    pub const ALL: [ChapterId; 4] = [ChapterId::One, ChapterId::Two, ChapterId::Three, ChapterId::Four];

    /// Número "humano" (1..=4).
    pub fn number(self) -> usize {
        match self {
            ChapterId::One => 1,
            ChapterId::Two => 2,
            ChapterId::Three => 3,
            ChapterId::Four => 4,
        }
    }
}

/// Identificador de pantalla. Conjunto cerrado: cada vista navegable es una variante.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Screen {
    Landing(Segment),
    Cards(Segment),
    Detail(Product),
    Game(Segment),
    Chapter(ChapterId),
    End,
}

impl Screen {
    /// Todas las pantallas, en orden estable.
    pub fn all() -> Vec<Screen> {
        let mut screens = Vec::with_capacity(21);
        for segment in Segment::ALL {
            screens.push(Screen::Landing(segment));
            screens.push(Screen::Cards(segment));
            screens.push(Screen::Game(segment));
        }
        screens.extend(Product::ALL.into_iter().map(Screen::Detail));
        screens.extend(ChapterId::ALL.into_iter().map(Screen::Chapter));
        screens.push(Screen::End);
        screens
    }

    pub fn key(self) -> String {
        match self {
            Screen::Landing(s) => format!("{}_landing", s.key()),
            Screen::Cards(s) => format!("{}_cards", s.key()),
            Screen::Game(s) => format!("{}_game", s.key()),
            Screen::Detail(p) => format!("{}_{}", p.segment().key(), p.key()),
            Screen::Chapter(c) => format!("chapter_{}", c.number()),
            Screen::End => "end".to_owned(),
        }
    }

    /// Segmento al que pertenece la pantalla (capítulos y final no tienen).
    pub fn segment(self) -> Option<Segment> {
        match self {
            Screen::Landing(s) | Screen::Cards(s) | Screen::Game(s) => Some(s),
            Screen::Detail(p) => Some(p.segment()),
            Screen::Chapter(_) | Screen::End => None,
        }
    }

    pub fn chapter(self) -> Option<ChapterId> {
        match self {
            Screen::Chapter(c) => Some(c),
            _ => None,
        }
    }

    /// Pantallas a las que solo se llega con un salto directo desde una tarjeta.
    pub fn is_card_target(self) -> bool {
        matches!(self, Screen::Detail(_) | Screen::Game(_))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Screen {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Screen::all()
            .into_iter()
            .find(|screen| screen.key() == wanted)
            .ok_or_else(|| KioskError::UnknownScreen(wanted.to_owned()))
    }
}

impl TryFrom<String> for Screen {
    type Error = KioskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Screen> for String {
    fn from(screen: Screen) -> Self {
        screen.key()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Zap,
    TrendingUp,
    ShieldCheck,
    Smartphone,
    CreditCard,
    Headphones,
    User,
    Building,
    Briefcase,
    Gem,
    Sparkles,
    Leaf,
    Orbit,
    Wallet,
    Gift,
    Banknote,
    Globe,
    Cheque,
    UserCheck,
    Gamepad,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Zap => "⚡",
            Icon::TrendingUp => "📈",
            Icon::ShieldCheck => "🛡",
            Icon::Smartphone => "📱",
            Icon::CreditCard => "💳",
            Icon::Headphones => "🎧",
            Icon::User => "👤",
            Icon::Building => "🏢",
            Icon::Briefcase => "💼",
            Icon::Gem => "💎",
            Icon::Sparkles => "✨",
            Icon::Leaf => "🍃",
            Icon::Orbit => "🌐",
            Icon::Wallet => "👛",
            Icon::Gift => "🎁",
            Icon::Banknote => "💵",
            Icon::Globe => "🌍",
            Icon::Cheque => "📝",
            Icon::UserCheck => "✅",
            Icon::Gamepad => "🎮",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlayStyle {
    Grid,
    Waves,
    Modular,
    Horizon,
    Stars,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Chapter {
    pub id: Screen,
    pub background_image: String,
    pub headline: Bilingual,
    #[serde(default)]
    pub subline: Option<Bilingual>,
    pub icons: Vec<Icon>,
    pub overlay: OverlayStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Card {
    pub id: u8,
    pub title: Bilingual,
    pub icon: Icon,
    pub target: Screen,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub content_title: Option<Bilingual>,
    #[serde(default)]
    pub content_description: Option<Bilingual>,
    #[serde(default)]
    pub features: Vec<Bilingual>,
    #[serde(default)]
    pub demo_tagline: Option<Bilingual>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_key_parses_back_to_itself() {
        for screen in Screen::all() {
            let parsed: Screen = screen.key().parse().expect("known key");
            assert_eq!(parsed, screen);
        }
    }

    #[test]
    fn screen_keys_are_unique() {
        let mut keys: Vec<String> = Screen::all().into_iter().map(Screen::key).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "retail_lobby".parse::<Screen>().unwrap_err();
        assert!(matches!(err, KioskError::UnknownScreen(k) if k == "retail_lobby"));
    }

    #[test]
    fn detail_screens_belong_to_the_product_segment() {
        assert_eq!(Screen::Detail(Product::Rdc).segment(), Some(Segment::Corporate));
        assert_eq!(Screen::Detail(Product::DAwards).key(), "retail_dawards");
        assert_eq!(Screen::Chapter(ChapterId::Two).segment(), None);
    }

    #[test]
    fn bilingual_picks_the_requested_language() {
        let text = Bilingual { en: "Home".into(), ar: "الرئيسية".into() };
        assert_eq!(text.get(Language::En), "Home");
        assert_eq!(text.get(Language::Ar), "الرئيسية");
        assert!(Language::Ar.is_rtl());
    }
}
