//! Locale support for the Battle.net API
//!
//! Each region accepts a fixed subset of locales. The pairing is a caller
//! responsibility: the gateway records whatever locale `authenticate` was
//! given and never validates it against the region (the API itself rejects
//! mismatches).

use crate::Region;
use std::fmt;

/// Locales supported by the Battle.net API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Locale {
    EnUs,
    EsMx,
    PtBr,
    EnGb,
    EsEs,
    FrFr,
    RuRu,
    DeDe,
    PtPt,
    ItIt,
    KoKr,
    ZhTw,
    ZhCn,
}

impl Locale {
    /// Convert locale to its `ll_RR` wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EsMx => "es_MX",
            Locale::PtBr => "pt_BR",
            Locale::EnGb => "en_GB",
            Locale::EsEs => "es_ES",
            Locale::FrFr => "fr_FR",
            Locale::RuRu => "ru_RU",
            Locale::DeDe => "de_DE",
            Locale::PtPt => "pt_PT",
            Locale::ItIt => "it_IT",
            Locale::KoKr => "ko_KR",
            Locale::ZhTw => "zh_TW",
            Locale::ZhCn => "zh_CN",
        }
    }

    /// Parse locale from string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en_us" => Some(Locale::EnUs),
            "es_mx" => Some(Locale::EsMx),
            "pt_br" => Some(Locale::PtBr),
            "en_gb" => Some(Locale::EnGb),
            "es_es" => Some(Locale::EsEs),
            "fr_fr" => Some(Locale::FrFr),
            "ru_ru" => Some(Locale::RuRu),
            "de_de" => Some(Locale::DeDe),
            "pt_pt" => Some(Locale::PtPt),
            "it_it" => Some(Locale::ItIt),
            "ko_kr" => Some(Locale::KoKr),
            "zh_tw" => Some(Locale::ZhTw),
            "zh_cn" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// Whether this locale is accepted by the given region
    pub fn is_valid_for(&self, region: Region) -> bool {
        region.locales().contains(self)
    }
}

impl Region {
    /// Locales accepted by this region
    pub fn locales(&self) -> &'static [Locale] {
        match self {
            Region::US => &[Locale::EnUs, Locale::EsMx, Locale::PtBr],
            Region::EU => &[
                Locale::EnGb,
                Locale::EsEs,
                Locale::FrFr,
                Locale::RuRu,
                Locale::DeDe,
                Locale::PtPt,
                Locale::ItIt,
            ],
            Region::KR => &[Locale::KoKr],
            Region::TW => &[Locale::ZhTw],
            Region::CN => &[Locale::ZhCn],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| crate::Error::InvalidLocale(s.to_string()))
    }
}
