// src/noyau/pile.rs
//
// Piles à capacité fixe (pré-allouées, jamais agrandies).
// La pile d’opérateurs compte aussi le CUMUL des empilements : c’est ce compteur,
// pas la profondeur courante, qui déclenche le débordement (limite de travail).

use super::erreur::ErreurCalc;
use super::operateur::Operateur;

#[derive(Clone, Debug)]
pub struct PileOperandes {
    items: Vec<f64>,
    capacite: usize,
}

impl PileOperandes {
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacite),
            capacite,
        }
    }

    pub fn empiler(&mut self, v: f64) -> Result<(), ErreurCalc> {
        if self.items.len() >= self.capacite {
            return Err(ErreurCalc::DebordementPile);
        }
        self.items.push(v);
        Ok(())
    }

    /// `None` sur pile vide : à l’appelant de verrouiller l’erreur.
    pub fn depiler(&mut self) -> Option<f64> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn vider(&mut self) {
        self.items.clear();
    }
}

#[derive(Clone, Debug)]
pub struct PileOperateurs {
    items: Vec<Operateur>,
    capacite: usize,
    total_empile: usize,
}

impl PileOperateurs {
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacite),
            capacite,
            total_empile: 0,
        }
    }

    pub fn empiler(&mut self, op: Operateur) -> Result<(), ErreurCalc> {
        if self.items.len() >= self.capacite || self.total_empile >= self.capacite {
            return Err(ErreurCalc::DebordementPile);
        }
        self.items.push(op);
        self.total_empile += 1;
        Ok(())
    }

    pub fn depiler(&mut self) -> Option<Operateur> {
        self.items.pop()
    }

    pub fn sommet(&self) -> Option<Operateur> {
        self.items.last().copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_empile(&self) -> usize {
        self.total_empile
    }

    /// Seul endroit où le cumul revient à zéro (début d’évaluation).
    pub fn reinitialiser(&mut self) {
        self.items.clear();
        self.total_empile = 0;
    }
}
