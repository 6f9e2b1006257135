use std::{fmt, str::FromStr};

use bitflags::bitflags;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

bitflags! {
    /// Modifier keys held while a gesture takes place.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const META = 1 << 2;
        const ALT = 1 << 3;
        const ALT_GRAPH = 1 << 4;
    }
}

/// A single modifier key. Iteration order is the order used when rendering
/// a [`Modifiers`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Modifier {
    #[strum(serialize = "ALT")]
    Alt,
    #[strum(serialize = "SHIFT")]
    Shift,
    #[strum(to_string = "CTRL", serialize = "CONTROL")]
    Ctrl,
    #[strum(serialize = "META")]
    Meta,
    #[strum(serialize = "ALT_GRAPH")]
    AltGraph,
}

impl Modifier {
    pub fn mask(self) -> Modifiers {
        match self {
            Modifier::Alt => Modifiers::ALT,
            Modifier::Shift => Modifiers::SHIFT,
            Modifier::Ctrl => Modifiers::CTRL,
            Modifier::Meta => Modifiers::META,
            Modifier::AltGraph => Modifiers::ALT_GRAPH,
        }
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        modifier.mask()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown modifier `{0}`")]
pub struct ParseModifiersError(pub String);

impl Modifiers {
    pub const NO_MODIFIER: Modifiers = Modifiers::empty();

    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::iter().filter(move |modifier| self.contains(modifier.mask()))
    }

    /// Renders the set as `ALT+SHIFT+CTRL+META+ALT_GRAPH` (present keys only).
    /// The empty set renders as an empty string.
    pub fn text(self) -> String {
        self.modifiers()
            .map(|modifier| modifier.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl FromStr for Modifiers {
    type Err = ParseModifiersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Modifiers::NO_MODIFIER);
        }

        s.split('+').try_fold(Modifiers::NO_MODIFIER, |mask, part| {
            let part = part.trim();
            Modifier::from_str(part)
                .map(|modifier| mask | modifier.mask())
                .map_err(|_| ParseModifiersError(part.to_owned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mask_renders_nothing() {
        assert_eq!(Modifiers::NO_MODIFIER.text(), "");
        assert_eq!(Modifiers::default(), Modifiers::NO_MODIFIER);
    }

    #[test]
    fn rendering_order_is_fixed() {
        let mask = Modifiers::ALT_GRAPH | Modifiers::CTRL | Modifiers::SHIFT | Modifiers::ALT;
        assert_eq!(mask.text(), "ALT+SHIFT+CTRL+ALT_GRAPH");
        assert_eq!(Modifiers::CTRL.to_string(), "CTRL");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "ctrl+Shift".parse::<Modifiers>(),
            Ok(Modifiers::CTRL | Modifiers::SHIFT)
        );
        assert_eq!("CONTROL".parse::<Modifiers>(), Ok(Modifiers::CTRL));
        assert_eq!(" ".parse::<Modifiers>(), Ok(Modifiers::NO_MODIFIER));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "CTRL+HYPER".parse::<Modifiers>(),
            Err(ParseModifiersError("HYPER".into()))
        );
    }

    #[test]
    fn text_parses_back() {
        let mask = Modifiers::META | Modifiers::ALT;
        assert_eq!(mask.text().parse::<Modifiers>(), Ok(mask));
    }
}
