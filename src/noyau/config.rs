// src/noyau/config.rs
//
// Dimensionnement d’une instance (valeurs par défaut = dimensionnement de référence).

/// Capacité de chaque pile (opérandes ET cumul d’empilements d’opérateurs).
pub const CAPACITE_PILES: usize = 100;

/// Capacité de l’écran, en octets de texte.
/// Doit contenir le plus long message ("Math Error: Domain error (e.g., sqrt(-1))").
pub const CAPACITE_AFFICHAGE: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// DEG <-> RAD
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Libellé court (bouton de l’UI).
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigCalc {
    pub capacite_piles: usize,
    pub capacite_affichage: usize,
    /// Mode d’angle à la création (clear ne le touche pas).
    pub mode_angle: ModeAngle,
}

impl Default for ConfigCalc {
    fn default() -> Self {
        Self {
            capacite_piles: CAPACITE_PILES,
            capacite_affichage: CAPACITE_AFFICHAGE,
            mode_angle: ModeAngle::Degres,
        }
    }
}

impl ConfigCalc {
    /// Garde-fou : l’écran doit pouvoir afficher n’importe quel message d’erreur.
    pub fn bornee(self) -> Self {
        Self {
            capacite_piles: self.capacite_piles.max(1),
            capacite_affichage: self.capacite_affichage.max(CAPACITE_AFFICHAGE),
            mode_angle: self.mode_angle,
        }
    }
}
