// src/noyau/jetons.rs
//
// Tokenisation “à la demande” : le pilote tire un jeton à la fois, en donnant
// la classe du jeton précédent (nécessaire pour reconnaître un signe collé à un nombre).

use std::fmt;

use num_traits::FloatConst;

use super::erreur::ErreurCalc;
use super::operateur::{Fonction, OpBinaire};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    /// Valeur double précision, figée à la lecture du jeton.
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => f64::PI(),
            Constante::E => f64::E(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Constante(Constante),
    Fonction(Fonction),
    Operateur(OpBinaire),
    ParenOuvrante,
    ParenFermante,
}

/// Classe du jeton précédent (état du pilote).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClasseJeton {
    Aucune,
    Nombre,
    Operateur,
    ParenOuvrante,
    ParenFermante,
    Fonction,
    Constante,
}

impl ClasseJeton {
    /// Un `+`/`-` lu après cette classe peut être le signe d’un littéral.
    pub fn admet_signe(self) -> bool {
        matches!(
            self,
            ClasseJeton::Aucune
                | ClasseJeton::Operateur
                | ClasseJeton::ParenOuvrante
                | ClasseJeton::Fonction
        )
    }

    /// Cette classe clôt une valeur : un jeton “valeur” qui suit implique un `*`.
    pub fn clot_valeur(self) -> bool {
        matches!(
            self,
            ClasseJeton::Nombre | ClasseJeton::Constante | ClasseJeton::ParenFermante
        )
    }
}

impl Jeton {
    pub fn classe(&self) -> ClasseJeton {
        match self {
            Jeton::Nombre(_) => ClasseJeton::Nombre,
            Jeton::Constante(_) => ClasseJeton::Constante,
            Jeton::Fonction(_) => ClasseJeton::Fonction,
            Jeton::Operateur(_) => ClasseJeton::Operateur,
            Jeton::ParenOuvrante => ClasseJeton::ParenOuvrante,
            Jeton::ParenFermante => ClasseJeton::ParenFermante,
        }
    }

    /// Jetons devant lesquels une multiplication implicite peut s’insérer.
    pub fn ouvre_valeur(&self) -> bool {
        matches!(
            self,
            Jeton::Nombre(_) | Jeton::Constante(_) | Jeton::Fonction(_) | Jeton::ParenOuvrante
        )
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(v) => write!(f, "{v}"),
            Jeton::Constante(Constante::Pi) => f.write_str("π"),
            Jeton::Constante(Constante::E) => f.write_str("e"),
            Jeton::Fonction(fct) => f.write_str(fct.nom()),
            Jeton::Operateur(op) => write!(f, "{}", op.symbole()),
            Jeton::ParenOuvrante => f.write_str("("),
            Jeton::ParenFermante => f.write_str(")"),
        }
    }
}

/// Lecteur de jetons sur une ligne d’entrée (curseur = index de caractère).
pub struct LecteurJetons {
    chars: Vec<char>,
    i: usize,
}

impl LecteurJetons {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            i: 0,
        }
    }

    pub fn curseur(&self) -> usize {
        self.i
    }

    fn voir(&self, k: usize) -> Option<char> {
        self.chars.get(self.i + k).copied()
    }

    /// Jeton suivant, `Ok(None)` en fin d’entrée.
    ///
    /// Toute erreur renvoyée ici est FATALE pour l’évaluation en cours.
    pub fn suivant(&mut self, precedent: ClasseJeton) -> Result<Option<Jeton>, ErreurCalc> {
        while let Some(c) = self.voir(0) {
            if !c.is_whitespace() {
                break;
            }
            self.i += 1;
        }

        let Some(c) = self.voir(0) else {
            return Ok(None);
        };

        // Nombre (éventuellement signé si le contexte l’autorise : "3+-2", "-5")
        let debut_nombre = c.is_ascii_digit() || c == '.';
        let signe_colle = (c == '+' || c == '-')
            && precedent.admet_signe()
            && matches!(self.voir(1), Some(d) if d.is_ascii_digit() || d == '.');
        if debut_nombre || signe_colle {
            return self.lire_nombre().map(|v| Some(Jeton::Nombre(v)));
        }

        // Constantes : un seul caractère, jamais début d’un nom de fonction
        if c == 'p' {
            self.i += 1;
            return Ok(Some(Jeton::Constante(Constante::Pi)));
        }
        if c == 'e' {
            self.i += 1;
            return Ok(Some(Jeton::Constante(Constante::E)));
        }

        // Mot alphabétique : seul son premier caractère est significatif ("sqrt" == "s")
        if c.is_ascii_alphabetic() {
            while matches!(self.voir(0), Some(l) if l.is_ascii_alphabetic()) {
                self.i += 1;
            }
            return Fonction::depuis_code(c)
                .map(|f| Some(Jeton::Fonction(f)))
                .ok_or(ErreurCalc::INVALIDE);
        }

        self.i += 1;
        match c {
            '(' => Ok(Some(Jeton::ParenOuvrante)),
            ')' => Ok(Some(Jeton::ParenFermante)),
            '!' => Ok(Some(Jeton::Fonction(Fonction::Factorielle))),
            _ => OpBinaire::depuis_char(c)
                .map(|op| Some(Jeton::Operateur(op)))
                .ok_or(ErreurCalc::INVALIDE),
        }
    }

    /// Littéral flottant, plus longue correspondance :
    /// `[+-] chiffres [. chiffres] [(e|E) [+-] chiffres]` (partie entière ou fraction non vide).
    /// L’exposant n’est consommé que s’il a au moins un chiffre ("2e" = 2 puis la constante e).
    fn lire_nombre(&mut self) -> Result<f64, ErreurCalc> {
        let start = self.i;
        let mut chiffres = 0usize;

        if matches!(self.voir(0), Some('+' | '-')) {
            self.i += 1;
        }
        while matches!(self.voir(0), Some(d) if d.is_ascii_digit()) {
            self.i += 1;
            chiffres += 1;
        }
        if self.voir(0) == Some('.') {
            self.i += 1;
            while matches!(self.voir(0), Some(d) if d.is_ascii_digit()) {
                self.i += 1;
                chiffres += 1;
            }
        }
        if chiffres == 0 {
            return Err(ErreurCalc::INVALIDE);
        }

        if matches!(self.voir(0), Some('e' | 'E')) {
            let mut k = 1;
            if matches!(self.voir(k), Some('+' | '-')) {
                k += 1;
            }
            if matches!(self.voir(k), Some(d) if d.is_ascii_digit()) {
                self.i += k;
                while matches!(self.voir(0), Some(d) if d.is_ascii_digit()) {
                    self.i += 1;
                }
            }
        }

        // "2.3.4" : un second point collé n’est pas un nouveau nombre
        if self.voir(0) == Some('.') {
            return Err(ErreurCalc::INVALIDE);
        }

        let txt: String = self.chars[start..self.i].iter().collect();
        txt.parse::<f64>().map_err(|_| ErreurCalc::INVALIDE)
    }
}
