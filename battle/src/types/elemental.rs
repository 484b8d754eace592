//! Elemental type system and effectiveness chart

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fifteen first-generation elemental types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
}

impl Type {
    /// All fifteen types
    pub const ALL: [Type; 15] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Effectiveness of this type attacking a single defending type
    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Effectiveness against a dual-typed defender: the product over
    /// every type the defender has
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders.iter().map(|t| self.effectiveness(*t)).product()
    }

    /// Parse a catalog type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
        }
    }

    /// Types that hit the given defending combination for more than 1x
    pub fn weaknesses_of(defenders: &[Type]) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| t.effectiveness_multi(defenders) > 1.0)
            .collect()
    }

    /// Types the defending combination resists (0 < effectiveness < 1)
    pub fn resistances_of(defenders: &[Type]) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| {
                let eff = t.effectiveness_multi(defenders);
                eff > 0.0 && eff < 1.0
            })
            .collect()
    }

    /// Types the defending combination is immune to
    pub fn immunities_of(defenders: &[Type]) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| t.effectiveness_multi(defenders) == 0.0)
            .collect()
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// String-level effectiveness lookup for catalogs that carry type
/// names. Unrecognized names contribute a neutral 1.0; there is no
/// error path.
pub fn effectiveness_by_name<S: AsRef<str>>(move_type: &str, defender_types: &[S]) -> f32 {
    let Some(attacking) = Type::from_name(move_type) else {
        return 1.0;
    };
    defender_types
        .iter()
        .map(|t| Type::from_name(t.as_ref()).map_or(1.0, |d| attacking.effectiveness(d)))
        .product()
}

/// 15x15 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// First-generation matchups, quirks included (Bug is super effective
/// against Poison, Ghost does nothing to Psychic, Ice is neutral to Fire).
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison,
///        Ground, Flying, Psychic, Bug, Rock, Ghost, Dragon
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 15]; 15] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 2.0, 0.5, 0.5, 1.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 2.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Grass), 2.0);
        assert_eq!(Type::Water.effectiveness(Type::Fire), 2.0);
        assert_eq!(Type::Electric.effectiveness(Type::Water), 2.0);
        assert_eq!(Type::Fighting.effectiveness(Type::Normal), 2.0);
    }

    #[test]
    fn test_not_very_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Water), 0.5);
        assert_eq!(Type::Grass.effectiveness(Type::Fire), 0.5);
        assert_eq!(Type::Electric.effectiveness(Type::Grass), 0.5);
    }

    #[test]
    fn test_immunities() {
        assert_eq!(Type::Normal.effectiveness(Type::Ghost), 0.0);
        assert_eq!(Type::Ghost.effectiveness(Type::Normal), 0.0);
        assert_eq!(Type::Electric.effectiveness(Type::Ground), 0.0);
        assert_eq!(Type::Ground.effectiveness(Type::Flying), 0.0);
        assert_eq!(Type::Fighting.effectiveness(Type::Ghost), 0.0);
    }

    #[test]
    fn test_first_gen_quirks() {
        // These differ from later generations
        assert_eq!(Type::Bug.effectiveness(Type::Poison), 2.0);
        assert_eq!(Type::Poison.effectiveness(Type::Bug), 2.0);
        assert_eq!(Type::Ghost.effectiveness(Type::Psychic), 0.0);
        assert_eq!(Type::Ice.effectiveness(Type::Fire), 0.5);
    }

    #[test]
    fn test_effectiveness_multi() {
        // Electric vs Water/Flying = 4x
        assert_eq!(
            Type::Electric.effectiveness_multi(&[Type::Water, Type::Flying]),
            4.0
        );
        // Normal vs Rock/Ghost = 0.5 * 0 = 0
        assert_eq!(
            Type::Normal.effectiveness_multi(&[Type::Rock, Type::Ghost]),
            0.0
        );
        // Fire vs Water/Rock = 0.25x
        assert_eq!(
            Type::Fire.effectiveness_multi(&[Type::Water, Type::Rock]),
            0.25
        );
        // Electric vs Ground = immune
        assert_eq!(Type::Electric.effectiveness_multi(&[Type::Ground]), 0.0);
    }

    #[test]
    fn test_effectiveness_by_name() {
        assert_eq!(effectiveness_by_name("Electric", &["Ground"]), 0.0);
        assert_eq!(effectiveness_by_name("Fire", &["Grass"]), 2.0);
        assert_eq!(effectiveness_by_name("Water", &["Fire"]), 2.0);
        assert_eq!(effectiveness_by_name("Normal", &["Rock", "Ghost"]), 0.0);
        // Unknown names are neutral, never an error
        assert_eq!(effectiveness_by_name("Cosmic", &["Water"]), 1.0);
        assert_eq!(effectiveness_by_name("Fire", &["Cosmic", "Grass"]), 2.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("PSYCHIC"), Some(Type::Psychic));
        assert_eq!(Type::from_name("fairy"), None);
    }

    #[test]
    fn test_matchup_helpers() {
        // Water is weak to Electric and Grass
        let weak = Type::weaknesses_of(&[Type::Water]);
        assert_eq!(weak, vec![Type::Electric, Type::Grass]);

        let resists = Type::resistances_of(&[Type::Water]);
        assert!(resists.contains(&Type::Fire));
        assert!(resists.contains(&Type::Water));
        assert!(resists.contains(&Type::Ice));

        assert_eq!(Type::immunities_of(&[Type::Ghost]), vec![Type::Normal, Type::Fighting]);
        assert_eq!(Type::immunities_of(&[Type::Water]), Vec::<Type>::new());
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 15);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[14], Type::Dragon);
    }
}
