// src/noyau/operateur.rs

use std::fmt;

/// Les quatre opérations, partagées par les fractions et les expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Operateur {
    #[default]
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

/// Étiquette venant de l’UI / CLI : ASCII `+ - * /` seulement.
impl TryFrom<char> for Operateur {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            autre => Err(autre),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
