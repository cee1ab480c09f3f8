//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la ligne saisie + l’instance de calculatrice, et offrir des
//! opérations simples (C/AC/=/DEG-RAD) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : on transmet la ligne au noyau, qui écrit son écran.
//! - Un seul appelant à la fois sur l’instance (l’UI est mono-thread).
//! - Défense en profondeur : longueur de saisie bornée.

use crate::noyau::operateur::Fonction;
use crate::noyau::{Calculatrice, ModeAngle};

/// Garde-fou : au-delà, les touches n’ajoutent plus rien (anti-abus / anti-gel).
const ENTREE_MAX: usize = 512;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- noyau (écran + mode d’angle + erreur) ---
    calc: Calculatrice,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            calc: Calculatrice::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Lecture ------------------------ */

    pub fn ecran(&self) -> &str {
        self.calc.affichage()
    }

    pub fn ecran_en_erreur(&self) -> bool {
        self.calc.erreur().is_some()
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.calc.mode_angle()
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// = : évalue la ligne saisie (l’écran du noyau porte résultat ou message).
    pub fn evaluer(&mut self) {
        self.calc.evaluer(&self.entree);
        self.focus_entree = true;
    }

    /// AC : remise à zéro totale (entrée + écran ; le mode d’angle reste).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.calc.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher à l’écran).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : écran à "0" (sans toucher à l’entrée).
    pub fn clear_ecran(&mut self) {
        self.calc.clear();
        self.focus_entree = true;
    }

    /// DEG <-> RAD
    pub fn basculer_mode_angle(&mut self) {
        self.calc.basculer_mode_angle();
        self.focus_entree = true;
    }

    /// Ajoute du texte en fin d’entrée (bornée à ENTREE_MAX caractères).
    pub fn inserer(&mut self, texte: &str) {
        if self.entree.chars().count() + texte.chars().count() > ENTREE_MAX {
            return;
        }
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Bouton de fonction : code + '(' ("s(", "N("), pour que deux fonctions
    /// consécutives ne se collent pas en un seul mot.
    pub fn inserer_fonction(&mut self, f: Fonction) {
        let mut texte = String::with_capacity(2);
        texte.push(f.code());
        texte.push('(');
        self.inserer(&texte);
    }

    /// DEL : retire le dernier symbole (les codes de fonction font un seul caractère).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        self.focus_entree = true;
    }
}
