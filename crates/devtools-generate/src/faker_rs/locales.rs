use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocaleKey {
    #[default]
    EnUs,
    PlPl,
}

impl LocaleKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en_US" | "en" => Some(Self::EnUs),
            "pl_PL" | "pl" => Some(Self::PlPl),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::PlPl => "pl_PL",
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::LocaleKey;

    #[test]
    fn parse_round_trips_canonical_names() {
        for locale in [LocaleKey::EnUs, LocaleKey::PlPl] {
            assert_eq!(LocaleKey::parse(locale.as_str()), Some(locale));
        }
        assert_eq!(LocaleKey::parse("pl"), Some(LocaleKey::PlPl));
        assert_eq!(LocaleKey::parse("pt_BR"), None);
    }
}
