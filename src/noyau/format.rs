// src/noyau/format.rs
//
// Rendu du résultat final pour l’écran.
// - nombre fini : 10 chiffres significatifs, zéros de queue retirés
// - exponentielle (style C, "1.5e+10") si |v| arrondi >= 1e10 ou < 1e-6
// - NaN / ±inf : messages d’erreur (jamais "NaN" ni "inf" à l’écran)

use super::erreur::ErreurCalc;

/// Chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Exposant décimal à partir duquel on passe en notation exponentielle.
const EXPOSANT_MAX_FIXE: i32 = 10;

/// Exposant décimal en dessous duquel on passe en notation exponentielle (1e-6).
const EXPOSANT_MIN_FIXE: i32 = -6;

/// Message pour un résultat infini.
pub const MESSAGE_DEBORDEMENT: &str = "Error: Overflow";

/// Texte affiché pour la valeur restante d’une évaluation sans erreur verrouillée.
pub fn formater_resultat(valeur: f64) -> String {
    if valeur.is_nan() {
        // NaN sans erreur verrouillée (ex: asin(2)) : formulation “domaine”.
        return ErreurCalc::Domaine.to_string();
    }
    if !valeur.is_finite() {
        return MESSAGE_DEBORDEMENT.to_string();
    }
    formater_nombre(valeur)
}

/// Formatage “%.10g” avec seuils d’exponentielle [1e-6, 1e10).
pub fn formater_nombre(v: f64) -> String {
    if v == 0.0 {
        // -0 compris
        return "0".to_string();
    }

    // Arrondi à 10 chiffres significatifs, puis lecture de l’exposant ARRONDI
    // (9999999999.7 devient 1.000000000e10 : exponentielle).
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(EXPOSANT_MIN_FIXE..EXPOSANT_MAX_FIXE).contains(&exposant) {
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            retirer_zeros(mantisse),
            exposant.unsigned_abs()
        );
    }

    let decimales = (CHIFFRES_SIGNIFICATIFS as i32 - 1 - exposant).max(0) as usize;
    retirer_zeros(&format!("{v:.decimales$}")).to_string()
}

/// "2.500" -> "2.5", "3.000" -> "3", "120" -> "120"
fn retirer_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
