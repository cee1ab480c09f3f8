// src/noyau/operateur.rs
//
// Opérateurs binaires + fonctions unaires (énumérations fermées).
// Saisie : une fonction est désignée par UN caractère (code), voir `Fonction::depuis_code`.

/// Opérateurs binaires `+ - * / % ^`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,
}

impl OpBinaire {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(OpBinaire::Plus),
            '-' => Some(OpBinaire::Moins),
            '*' => Some(OpBinaire::Fois),
            '/' => Some(OpBinaire::Division),
            '%' => Some(OpBinaire::Modulo),
            '^' => Some(OpBinaire::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Plus => '+',
            OpBinaire::Moins => '-',
            OpBinaire::Fois => '*',
            OpBinaire::Division => '/',
            OpBinaire::Modulo => '%',
            OpBinaire::Puissance => '^',
        }
    }
}

/// Fonctions unaires (palier de précédence 4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log10,
    Racine,
    Factorielle,
    Exp,
    Inverse,
    Oppose,
}

impl Fonction {
    /// Table des codes (sensible à la casse).
    ///
    /// Pour un mot alphabétique, seul le PREMIER caractère compte :
    /// "sin" et "sqrt" donnent tous deux `s` (sinus), "log" donne `l` (ln).
    /// `!` n’est pas alphabétique : c’est un lexème d’un caractère.
    pub fn depuis_code(c: char) -> Option<Self> {
        match c {
            's' => Some(Fonction::Sin),
            'c' => Some(Fonction::Cos),
            't' => Some(Fonction::Tan),
            'S' => Some(Fonction::Asin),
            'C' => Some(Fonction::Acos),
            'T' => Some(Fonction::Atan),
            'l' => Some(Fonction::Ln),
            'L' => Some(Fonction::Log10),
            'q' => Some(Fonction::Racine),
            '!' => Some(Fonction::Factorielle),
            'E' => Some(Fonction::Exp),
            'R' => Some(Fonction::Inverse),
            'N' => Some(Fonction::Oppose),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Fonction::Sin => 's',
            Fonction::Cos => 'c',
            Fonction::Tan => 't',
            Fonction::Asin => 'S',
            Fonction::Acos => 'C',
            Fonction::Atan => 'T',
            Fonction::Ln => 'l',
            Fonction::Log10 => 'L',
            Fonction::Racine => 'q',
            Fonction::Factorielle => '!',
            Fonction::Exp => 'E',
            Fonction::Inverse => 'R',
            Fonction::Oppose => 'N',
        }
    }

    /// Nom lisible (bulle d’aide de l’UI).
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Ln => "ln",
            Fonction::Log10 => "log10",
            Fonction::Racine => "sqrt",
            Fonction::Factorielle => "factorielle",
            Fonction::Exp => "exp",
            Fonction::Inverse => "1/x",
            Fonction::Oppose => "-x",
        }
    }

    pub const TOUTES: [Fonction; 13] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Ln,
        Fonction::Log10,
        Fonction::Racine,
        Fonction::Factorielle,
        Fonction::Exp,
        Fonction::Inverse,
        Fonction::Oppose,
    ];
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Binaire(OpBinaire),
    Fonction(Fonction),
    ParenOuvrante,
}

impl Operateur {
    /// Paliers : 1 = `+ -`, 2 = `* / %`, 3 = `^`, 4 = fonctions, 0 = `(` (bloque la réduction).
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Binaire(OpBinaire::Plus | OpBinaire::Moins) => 1,
            Operateur::Binaire(OpBinaire::Fois | OpBinaire::Division | OpBinaire::Modulo) => 2,
            Operateur::Binaire(OpBinaire::Puissance) => 3,
            Operateur::Fonction(_) => 4,
            Operateur::ParenOuvrante => 0,
        }
    }

    pub fn associatif_droite(self) -> bool {
        matches!(self, Operateur::Binaire(OpBinaire::Puissance))
    }

    /// Le sommet `self` doit-il être réduit avant d’empiler `entrant` ?
    pub fn reduit_avant(self, entrant: Operateur) -> bool {
        let p_sommet = self.precedence();
        let p_entrant = entrant.precedence();
        p_sommet > p_entrant || (p_sommet == p_entrant && !entrant.associatif_droite())
    }
}
