#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueKind {
    #[default]
    Fire,
    Ice,
    Ash,
    Psychedelic,
}

impl HueKind {
    /// Texture order; slot `n` is selected with key `n + 1`.
    pub const ALL: &'static [Self] = &[Self::Fire, Self::Ice, Self::Ash, Self::Psychedelic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Ash => "Ash",
            Self::Psychedelic => "Psychedelic",
        }
    }

    /// File name of the texture without its `.rgba` extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Ash => "ash",
            Self::Psychedelic => "psychedelic",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Fire => 0,
            Self::Ice => 1,
            Self::Ash => 2,
            Self::Psychedelic => 3,
        }
    }

    /// Maps the digit keys 1-4 to their slot.
    #[must_use]
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=4 => Self::ALL.get(usize::from(digit - 1)).copied(),
            _ => None,
        }
    }
}

impl std::fmt::Display for HueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(HueKind::ALL.first(), Some(&HueKind::default()));
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, &kind) in HueKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn digits_select_slots_in_order() {
        assert_eq!(HueKind::from_digit(1), Some(HueKind::Fire));
        assert_eq!(HueKind::from_digit(2), Some(HueKind::Ice));
        assert_eq!(HueKind::from_digit(3), Some(HueKind::Ash));
        assert_eq!(HueKind::from_digit(4), Some(HueKind::Psychedelic));
        assert_eq!(HueKind::from_digit(0), None);
        assert_eq!(HueKind::from_digit(5), None);
    }

    #[test]
    fn file_stems_are_unique() {
        let stems: Vec<&str> = HueKind::ALL.iter().map(|k| k.file_stem()).collect();
        for (i, stem) in stems.iter().enumerate() {
            for (j, other) in stems.iter().enumerate() {
                if i != j {
                    assert_ne!(stem, other, "Duplicate file stem: {}", stem);
                }
            }
        }
    }
}
