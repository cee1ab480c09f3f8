// src/noyau/application.rs
//
// Application d’un opérateur sur la pile d’opérandes.
//
// Contrat : quoi qu’il arrive, UNE valeur est réempilée (NaN en cas d’erreur),
// pour que la forme de la pile reste cohérente ; l’erreur éventuelle est renvoyée
// à l’appelant, qui décide de la verrouiller (la première gagne).

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::config::ModeAngle;
use super::erreur::ErreurCalc;
use super::operateur::{Fonction, OpBinaire, Operateur};
use super::pile::PileOperandes;

/// Au-delà, n! dépasse f64::MAX (171! ≈ 1.24e309).
const FACTORIELLE_MAX: u32 = 170;

pub fn appliquer(
    op: Operateur,
    operandes: &mut PileOperandes,
    mode: ModeAngle,
) -> Result<(), ErreurCalc> {
    let mut premiere: Option<ErreurCalc> = None;

    let resultat = match op {
        Operateur::Binaire(bin) => {
            // a op b : a a été empilé en premier
            let b = depiler_ou_nan(operandes, &mut premiere);
            let a = depiler_ou_nan(operandes, &mut premiere);
            calcul_binaire(bin, a, b)
        }
        Operateur::Fonction(f) => {
            let a = depiler_ou_nan(operandes, &mut premiere);
            calcul_fonction(f, a, mode)
        }
        // Une '(' n’est jamais appliquée : le pilote s’arrête dessus.
        Operateur::ParenOuvrante => Err(ErreurCalc::PARENTHESES),
    };

    let valeur = resultat.unwrap_or_else(|e| {
        premiere.get_or_insert(e);
        f64::NAN
    });

    // Au moins une case vient d’être libérée (ou la pile était vide) : pas de débordement attendu.
    if let Err(e) = operandes.empiler(valeur) {
        premiere.get_or_insert(e);
    }

    match premiere {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Dépile une opérande ; sur pile vide, verrouille une erreur de syntaxe et rend NaN.
fn depiler_ou_nan(operandes: &mut PileOperandes, premiere: &mut Option<ErreurCalc>) -> f64 {
    operandes.depiler().unwrap_or_else(|| {
        premiere.get_or_insert(ErreurCalc::INVALIDE);
        f64::NAN
    })
}

fn calcul_binaire(op: OpBinaire, a: f64, b: f64) -> Result<f64, ErreurCalc> {
    match op {
        OpBinaire::Plus => Ok(a + b),
        OpBinaire::Moins => Ok(a - b),
        OpBinaire::Fois => Ok(a * b),
        OpBinaire::Division => {
            if b == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
        // reste flottant tronqué (signe du dividende), comme fmod
        OpBinaire::Modulo => {
            if b == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(a % b)
            }
        }
        OpBinaire::Puissance => Ok(a.powf(b)),
    }
}

fn calcul_fonction(f: Fonction, a: f64, mode: ModeAngle) -> Result<f64, ErreurCalc> {
    let vers_radians = |x: f64| match mode {
        ModeAngle::Degres => x.to_radians(),
        ModeAngle::Radians => x,
    };
    let depuis_radians = |x: f64| match mode {
        ModeAngle::Degres => x.to_degrees(),
        ModeAngle::Radians => x,
    };

    match f {
        Fonction::Sin => Ok(vers_radians(a).sin()),
        Fonction::Cos => Ok(vers_radians(a).cos()),
        Fonction::Tan => Ok(vers_radians(a).tan()),

        Fonction::Asin => Ok(depuis_radians(a.asin())),
        Fonction::Acos => Ok(depuis_radians(a.acos())),
        Fonction::Atan => Ok(depuis_radians(a.atan())),

        Fonction::Ln => {
            if a <= 0.0 {
                Err(ErreurCalc::Domaine)
            } else {
                Ok(a.ln())
            }
        }
        Fonction::Log10 => {
            if a <= 0.0 {
                Err(ErreurCalc::Domaine)
            } else {
                Ok(a.log10())
            }
        }
        Fonction::Racine => {
            if a < 0.0 {
                Err(ErreurCalc::Domaine)
            } else {
                Ok(a.sqrt())
            }
        }
        Fonction::Factorielle => factorielle(a),
        Fonction::Exp => Ok(a.exp()),
        Fonction::Inverse => {
            if a == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(1.0 / a)
            }
        }
        Fonction::Oppose => Ok(-a),
    }
}

/// n! pour n entier naturel ; produit exact puis conversion (arrondi unique).
fn factorielle(n: f64) -> Result<f64, ErreurCalc> {
    if n < 0.0 || n.floor() != n {
        return Err(ErreurCalc::Domaine);
    }
    if n > f64::from(FACTORIELLE_MAX) {
        return Err(ErreurCalc::Domaine);
    }

    // n est entier dans [0, 170] : conversion sans perte
    let n = n as u32;
    let produit = (2..=n).fold(BigUint::one(), |acc, k| acc * k);

    match produit.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalc::Domaine),
    }
}
